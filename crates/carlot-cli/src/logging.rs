use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::types::LogLevel;

/// Directory for log files; when set, logs go to `carlot.<pid>.log` there.
pub const LOG_DIR_ENV: &str = "CARLOT_LOG_DIR";

/// Install the global subscriber.
///
/// `RUST_LOG` overrides `level`. With `interactive` set and no log directory,
/// nothing is installed: the TUI owns the terminal.
pub fn init(level: LogLevel, interactive: bool) {
    let filter = || {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::default().add_directive(level.filter().into()))
    };

    if let Some(log_dir) = std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from)
        && std::fs::create_dir_all(&log_dir).is_ok()
    {
        let log_path = log_dir.join(format!("carlot.{}.log", std::process::id()));

        if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true);

            tracing_subscriber::registry()
                .with(filter())
                .with(file_layer)
                .init();

            tracing::info!(path = ?log_path, "tracing initialized");
            return;
        }
    }

    if interactive {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .init();
}
