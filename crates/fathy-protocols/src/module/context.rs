//! Module load context.

use serde::de::DeserializeOwned;

/// Context handed to a module while it loads.
#[derive(Debug, Clone, Default)]
pub struct ModuleContext {
    /// Module-specific settings from configuration (a JSON object, or null).
    pub settings: serde_json::Value,
}

impl ModuleContext {
    pub fn new(settings: serde_json::Value) -> Self {
        Self { settings }
    }

    /// Get a typed setting. Missing or mistyped keys yield `None`.
    pub fn setting<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.settings
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
