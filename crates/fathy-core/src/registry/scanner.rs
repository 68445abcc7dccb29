//! Module scanner.
//!
//! Walks the module catalogue once, loads each module in isolation and binds
//! every exposed operation at its derived path.

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use fathy_protocols::{ApiModule, ModuleContext, ModuleError, Operation};

use super::path::endpoint_path;
use super::table::{panic_message, Binding, EndpointTable, EndpointTableBuilder};
use crate::error::RegistryError;

/// Which modules the scanner may load.
///
/// An empty `enabled` list allows every module not listed in `disabled`.
/// Entries may use the slash (`utilities/status_check`) or dotted
/// (`utilities.status_check`) form.
#[derive(Debug, Clone, Default)]
pub struct ModuleFilter {
    enabled: Vec<String>,
    disabled: Vec<String>,
}

impl ModuleFilter {
    pub fn new(enabled: Vec<String>, disabled: Vec<String>) -> Self {
        Self {
            enabled: enabled.iter().map(|m| normalize_key(m)).collect(),
            disabled: disabled.iter().map(|m| normalize_key(m)).collect(),
        }
    }

    pub fn allows(&self, module_path: &str) -> bool {
        let key = normalize_key(module_path);
        if self.disabled.contains(&key) {
            return false;
        }
        self.enabled.is_empty() || self.enabled.contains(&key)
    }
}

fn normalize_key(module: &str) -> String {
    module.trim_matches('/').replace('.', "/")
}

/// A module that failed to load.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedModule {
    pub module: String,
    pub reason: String,
}

/// Outcome of a scan.
#[derive(Debug)]
pub struct ScanReport {
    /// The frozen endpoint table.
    pub table: EndpointTable,
    /// Dotted names of modules that loaded.
    pub loaded: Vec<String>,
    /// Modules that failed to load.
    pub skipped: Vec<SkippedModule>,
}

impl ScanReport {
    pub fn total_endpoints(&self) -> usize {
        self.table.len()
    }
}

/// Loads modules and builds the endpoint table.
#[derive(Debug, Default)]
pub struct ModuleScanner {
    filter: ModuleFilter,
    settings: HashMap<String, Value>,
    reserved: Vec<String>,
}

impl ModuleScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: ModuleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Per-module settings, keyed by module path (slash or dotted form).
    pub fn with_settings(mut self, settings: HashMap<String, Value>) -> Self {
        self.settings = settings
            .into_iter()
            .map(|(k, v)| (normalize_key(&k), v))
            .collect();
        self
    }

    /// Paths served by fixed routes.
    pub fn with_reserved<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Load every module and bind its exposed operations.
    ///
    /// A module that fails to load, or exposes an operation name that is not
    /// a plain identifier, is logged and skipped. A path collision aborts the
    /// scan.
    pub async fn scan(&self, modules: &[Box<dyn ApiModule>]) -> Result<ScanReport, RegistryError> {
        info!("Scanning {} API modules", modules.len());

        let mut builder = EndpointTableBuilder::new().with_reserved(self.reserved.iter().cloned());
        let mut loaded = Vec::new();
        let mut skipped = Vec::new();

        for module in modules {
            let manifest = module.manifest();
            let module_name = manifest.dotted_name();

            if manifest.is_private() {
                debug!("Skipping private module {}", module_name);
                continue;
            }
            if !self.filter.allows(&manifest.path) {
                info!("Module {} disabled by configuration", module_name);
                continue;
            }

            info!("Loading module {}", module_name);
            let operations = match self.load_module(module.as_ref()).await {
                Ok(operations) => operations,
                Err(e) => {
                    error!("Error loading module {}: {}", module_name, e);
                    skipped.push(SkippedModule {
                        module: module_name,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let exposed: Vec<Arc<dyn Operation>> = operations
                .into_iter()
                .filter(|operation| {
                    let private = operation.definition().is_private();
                    if private {
                        debug!("Skipping private operation {}.{}", module_name, operation.name());
                    }
                    !private
                })
                .collect();

            if let Some(bad) = exposed.iter().find(|op| !is_identifier(op.name())) {
                let reason = RegistryError::InvalidPath(format!("{}/{}", manifest.path, bad.name()));
                error!("Error loading module {}: {}", module_name, reason);
                skipped.push(SkippedModule {
                    module: module_name,
                    reason: reason.to_string(),
                });
                continue;
            }

            for operation in exposed {
                let path = endpoint_path(&manifest.path, operation.name());
                builder.insert(Binding::new(path.clone(), module_name.clone(), operation))?;
                info!("Registered: {}", path);
            }

            loaded.push(module_name);
        }

        info!(
            "Successfully loaded {} API endpoints from {} modules",
            builder.len(),
            loaded.len()
        );

        Ok(ScanReport {
            table: builder.build(),
            loaded,
            skipped,
        })
    }

    async fn load_module(
        &self,
        module: &dyn ApiModule,
    ) -> Result<Vec<Arc<dyn Operation>>, ModuleError> {
        let manifest = module.manifest();
        manifest.validate()?;

        let settings = self
            .settings
            .get(&manifest.path)
            .cloned()
            .unwrap_or(Value::Null);

        AssertUnwindSafe(module.load(ModuleContext::new(settings)))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| {
                Err(ModuleError::LoadFailed(format!(
                    "panicked: {}",
                    panic_message(payload.as_ref())
                )))
            })
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
