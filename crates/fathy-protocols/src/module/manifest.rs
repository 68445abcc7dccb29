//! Module manifest types.

use serde::{Deserialize, Serialize};

use crate::error::ModuleError;

/// Module file names starting with this prefix are internal and never loaded.
pub const PRIVATE_MODULE_PREFIX: &str = "__";

/// Module manifest containing metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleManifest {
    /// Slash-separated module path, e.g. `robot_functions/basic_tour`.
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ModuleManifest {
    /// Create a new module manifest.
    ///
    /// `path` may use `/`, `\` or `::` as separators and may carry a `.rs`
    /// extension; it is stored normalized. An unnormalizable path is kept
    /// verbatim and rejected later by [`ModuleManifest::validate`].
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        let raw = path.into();
        let path = normalize_module_path(&raw).unwrap_or(raw);
        Self {
            path,
            name: name.into(),
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Last path segment, the equivalent of a file name.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Dotted module identifier, e.g. `robot_functions.basic_tour`.
    pub fn dotted_name(&self) -> String {
        self.path.replace('/', ".")
    }

    /// Whether the module is internal and must be skipped.
    pub fn is_private(&self) -> bool {
        self.file_name().starts_with(PRIVATE_MODULE_PREFIX)
    }

    /// Check that the path is a well-formed module path.
    pub fn validate(&self) -> Result<(), ModuleError> {
        normalize_module_path(&self.path).map(|_| ())
    }
}

/// Normalize a module path.
///
/// Separators become `/`, a trailing `.rs` extension is stripped, and every
/// segment must be a non-empty identifier of ASCII letters, digits and `_`.
pub fn normalize_module_path(raw: &str) -> Result<String, ModuleError> {
    let unified = raw.replace("::", "/").replace('\\', "/");
    let trimmed = unified.trim_matches('/');
    let trimmed = trimmed.strip_suffix(".rs").unwrap_or(trimmed);

    if trimmed.is_empty() {
        return Err(ModuleError::InvalidManifest("module path is empty".to_string()));
    }

    for segment in trimmed.split('/') {
        let valid = !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(ModuleError::InvalidManifest(format!(
                "invalid segment '{}' in module path '{}'",
                segment, raw
            )));
        }
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
