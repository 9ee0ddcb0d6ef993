use crate::provider::AdapterType;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Registry
    pub adapter: AdapterType,
    pub modules_dir: Option<PathBuf>,

    // Server
    pub bind_address: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            // Registry
            adapter: match lookup("LOCALE_ADAPTER") {
                Some(name) => name
                    .parse::<AdapterType>()
                    .with_context(|| format!("LOCALE_ADAPTER is invalid: {}", name))?,
                None => AdapterType::Jre,
            },
            modules_dir: lookup("LOCALE_MODULES_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),

            // Server
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match lookup("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .with_context(|| format!("PORT is not a valid port: {}", port))?,
                None => 8080,
            },
        })
    }
}
