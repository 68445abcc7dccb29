//! Module loading errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("Module load failed: {0}")]
    LoadFailed(String),

    #[error("Invalid module manifest: {0}")]
    InvalidManifest(String),

    #[error("Invalid module settings: {0}")]
    InvalidSettings(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failed_error() {
        let err = ModuleError::LoadFailed("sensor bus offline".to_string());
        let display = err.to_string();
        assert!(display.contains("load failed"));
        assert!(display.contains("sensor bus offline"));
    }

    #[test]
    fn test_invalid_manifest_error() {
        let err = ModuleError::InvalidManifest("empty path".to_string());
        assert!(err.to_string().contains("manifest"));
    }

    #[test]
    fn test_invalid_settings_error() {
        let err = ModuleError::InvalidSettings("minutes_per_stop must be > 0".to_string());
        assert!(err.to_string().contains("minutes_per_stop"));
    }
}
