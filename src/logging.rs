use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Environment variable naming the log file. Takes precedence over the config.
pub const LOG_ENV: &str = "NAVTREE_LOG";

/// Initialize tracing with optional file output.
///
/// Logging stays off unless `NAVTREE_LOG` or `logging.file` names a file, so
/// snapshots printed to stdout are never interleaved with log lines.
///
/// Log files get a unique suffix so concurrent runs do not clobber each
/// other: `{path}.{timestamp}.{pid}`
pub fn init_tracing(config: &LoggingConfig) {
    let Some(log_path) = log_path(config) else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path.display(), timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    if tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing already initialized, not logging to {}", unique_path);
    }
}

fn log_path(config: &LoggingConfig) -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
}
