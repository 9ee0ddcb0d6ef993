use super::{DataModule, ModuleDiscovery};
use crate::error::RegistryError;
use crate::provider::AdapterType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// A data module described by plain data: its name, adapter type, and the
/// tags it contributes per category.
///
/// On disk this is a JSON file:
///
/// ```json
/// { "name": "extra-eu", "adapter": "JRE", "tags": { "FormatData": "de-DE fr-FR" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    pub name: String,
    pub adapter: AdapterType,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>, adapter: AdapterType) -> Self {
        Self {
            name: name.into(),
            adapter,
            tags: HashMap::new(),
        }
    }

    /// Add the tags contributed for `category`.
    pub fn with_tags(mut self, category: impl Into<String>, tags: impl Into<String>) -> Self {
        self.tags.insert(category.into(), tags.into());
        self
    }
}

impl DataModule for ModuleDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn adapter_type(&self) -> AdapterType {
        self.adapter
    }

    fn available_tags(&self, category: &str) -> Option<String> {
        self.tags.get(category).cloned()
    }
}

/// A fixed, in-memory list of modules.
#[derive(Clone, Default)]
pub struct StaticDiscovery {
    modules: Vec<Arc<dyn DataModule>>,
}

impl StaticDiscovery {
    /// No installed modules.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(modules: Vec<Arc<dyn DataModule>>) -> Self {
        Self { modules }
    }

    /// Append a module.
    pub fn with_module(mut self, module: impl DataModule + 'static) -> Self {
        self.modules.push(Arc::new(module));
        self
    }
}

impl ModuleDiscovery for StaticDiscovery {
    fn modules(&self) -> Vec<Arc<dyn DataModule>> {
        self.modules.clone()
    }
}

/// Discovers modules from the `*.json` descriptors in a directory.
///
/// The directory is rescanned on every call; files are visited in path
/// order. Unreadable or malformed descriptors are logged and skipped.
#[derive(Debug, Clone)]
pub struct DirectoryDiscovery {
    dir: PathBuf,
}

impl DirectoryDiscovery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Read and parse one descriptor file.
    pub fn read_descriptor(path: &Path) -> Result<ModuleDescriptor, RegistryError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| RegistryError::ModuleDescriptor {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;

        serde_json::from_str(&contents).map_err(|e| RegistryError::ModuleDescriptor {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    fn descriptor_paths(&self) -> Vec<PathBuf> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    "Cannot read module directory {}: {}",
                    self.dir.display(),
                    e
                );
                return Vec::new();
            }
        };

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        paths
    }
}

impl ModuleDiscovery for DirectoryDiscovery {
    fn modules(&self) -> Vec<Arc<dyn DataModule>> {
        let mut modules: Vec<Arc<dyn DataModule>> = Vec::new();

        for path in self.descriptor_paths() {
            match Self::read_descriptor(&path) {
                Ok(descriptor) => {
                    debug!(
                        "Discovered data module '{}' ({}) at {}",
                        descriptor.name,
                        descriptor.adapter,
                        path.display()
                    );
                    modules.push(Arc::new(descriptor));
                }
                Err(e) => warn!("Skipping data module: {}", e),
            }
        }

        modules
    }
}
