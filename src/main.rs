//! Fathy - Robot Control System
//!
//! Loads configuration, registers every catalogued API module and serves
//! the HTTP API together with the touch interface.

mod catalogue;
mod cli;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fathy_api::{ApiServer, AppState, SpeechClient, RESERVED_PATHS, SYSTEM_NAME};
use fathy_config::{ConfigLoader, ConfigValidator, LoggingConfig};
use fathy_core::{ModuleFilter, ModuleScanner};

use crate::cli::Cli;

/// Initialize tracing with console output and, when `[logging] dir` is set,
/// a daily rotated log file.
fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

    let file_layer = match &logging.dir {
        Some(dir) => {
            let log_dir = PathBuf::from(ConfigLoader::expand_path(dir));
            std::fs::create_dir_all(&log_dir)?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("fathy")
                .filename_suffix("log")
                .max_log_files(30)
                .build(&log_dir)?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = ConfigLoader::load_or_default(&cli.config)?;
    cli.apply(&mut config);
    init_tracing(&config.logging)?;

    info!("🤖 {} v{}", SYSTEM_NAME, env!("CARGO_PKG_VERSION"));
    for warning in ConfigValidator::validate(&config).into_result()? {
        warn!("Config {}: {}", warning.path, warning.message);
    }

    let modules = catalogue::modules();
    let report = ModuleScanner::new()
        .with_filter(ModuleFilter::new(
            config.modules.enabled.clone(),
            config.modules.disabled.clone(),
        ))
        .with_settings(config.modules.settings.clone())
        .with_reserved(RESERVED_PATHS.iter().copied())
        .scan(&modules)
        .await?;

    let speech = SpeechClient::new(
        config.s2s.url.clone(),
        Duration::from_secs(config.s2s.timeout_seconds),
    )?;
    info!("Speech service: {}", speech.url());

    let state = AppState::new(
        Arc::new(report.table),
        speech,
        config.server.static_dir.clone(),
    )
    .with_max_upload_bytes(config.s2s.max_upload_bytes);

    let server = ApiServer::new(config.server.host.clone(), config.server.port, Arc::new(state));
    server.run().await?;

    Ok(())
}
