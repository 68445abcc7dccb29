//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Convert the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(e) => Err(ConfigError::InvalidValue {
                field: e.path,
                message: e.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_s2s(config, &mut result);
        Self::validate_modules(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        if !config.server.static_dir.exists() {
            result.add_warning(ValidationWarning::new(
                "server.static_dir",
                format!(
                    "Static directory does not exist: {}",
                    config.server.static_dir.display()
                ),
            ));
        }
    }

    fn validate_s2s(config: &Config, result: &mut ValidationResult) {
        let url = &config.s2s.url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "s2s.url",
                "url must start with http:// or https://",
            ));
        }

        if config.s2s.timeout_seconds == 0 {
            result.add_error(ValidationError::new(
                "s2s.timeout_seconds",
                "timeout_seconds must be greater than 0",
            ));
        }

        if config.s2s.max_upload_bytes == 0 {
            result.add_error(ValidationError::new(
                "s2s.max_upload_bytes",
                "max_upload_bytes must be greater than 0",
            ));
        }
    }

    fn validate_modules(config: &Config, result: &mut ValidationResult) {
        for module in &config.modules.enabled {
            if config.modules.disabled.contains(module) {
                result.add_error(ValidationError::new(
                    "modules",
                    format!("Module '{}' is both enabled and disabled", module),
                ));
            }
        }

        for (module, settings) in &config.modules.settings {
            if !settings.is_object() {
                result.add_warning(ValidationWarning::new(
                    format!("modules.settings.{}", module),
                    "Module settings should be a table",
                ));
            }
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
