//! CLI definitions for Fathy.

use std::path::PathBuf;

use clap::Parser;

use fathy_config::Config;

/// Fathy CLI.
#[derive(Debug, Parser)]
#[command(name = "fathy")]
#[command(about = "Fathy Robot Control System")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (defaults apply when the file is absent)
    #[arg(short, long, default_value = "config/default.toml", env = "FATHY_CONFIG")]
    pub config: PathBuf,

    /// Server host
    #[arg(long)]
    pub host: Option<String>,

    /// Server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding index.html and static assets
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Cli {
    /// Apply command line overrides on top of the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = dir.clone();
        }
    }
}
