//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub s2s: S2sConfig,

    #[serde(default)]
    pub modules: ModulesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding `index.html`, `favicon.ico` and `/static` assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

/// Upstream speech-to-speech service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S2sConfig {
    #[serde(default = "default_s2s_url")]
    pub url: String,

    #[serde(default = "default_s2s_timeout")]
    pub timeout_seconds: u64,

    /// Largest accepted audio upload, in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for S2sConfig {
    fn default() -> Self {
        Self {
            url: default_s2s_url(),
            timeout_seconds: default_s2s_timeout(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_s2s_url() -> String {
    "http://localhost:5001/s2s".to_string()
}

fn default_s2s_timeout() -> u64 {
    120
}

fn default_max_upload_bytes() -> usize {
    25 * 1024 * 1024
}

/// API module selection and per-module settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModulesConfig {
    /// When non-empty, only these modules are loaded.
    #[serde(default)]
    pub enabled: Vec<String>,

    #[serde(default)]
    pub disabled: Vec<String>,

    /// Settings handed to each module, keyed by module path.
    #[serde(default)]
    pub settings: HashMap<String, serde_json::Value>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Directory for daily rotated log files. Console only when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.static_dir, PathBuf::from("static"));
        assert_eq!(config.s2s.url, "http://localhost:5001/s2s");
        assert_eq!(config.s2s.timeout_seconds, 120);
        assert!(config.modules.enabled.is_empty());
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.dir.is_none());
    }

    #[test]
    fn test_config_serialize_roundtrip_keeps_defaults() {
        let config = Config::default();
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.server.port, config.server.port);
        assert_eq!(parsed.s2s.max_upload_bytes, config.s2s.max_upload_bytes);
    }
}
