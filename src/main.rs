use anyhow::Result;
use locale_provider_registry::config::Config;
use locale_provider_registry::data::DirectoryDiscovery;
use locale_provider_registry::{server, LocaleProviderRegistry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_provider_registry=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Starting locale provider registry ({})", config.adapter);

    let mut builder = LocaleProviderRegistry::builder().adapter_type(config.adapter);
    if let Some(dir) = &config.modules_dir {
        info!("Discovering data modules in {}", dir.display());
        builder = builder.discovery(DirectoryDiscovery::new(dir));
    }
    let registry = builder.build();

    // Resolve available locales up front so a misconfigured dataset aborts
    // startup instead of the first request.
    let locales = registry.available_locales();
    info!("{} locales available", locales.len());

    server::serve(&config, registry).await
}
