//! Logging Infrastructure
//!
//! Structured logging through `tracing`. Console output always; with a log
//! directory, output goes to a daily rolling file instead.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// File name prefix for rolling log files
const LOG_FILE_PREFIX: &str = "front-desk";

/// Initialize the logger at `info`, console only
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with an optional level and log directory
///
/// `RUST_LOG` wins over `log_level` when set. A missing log directory is
/// created; if that fails the logger falls back to the console.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if std::fs::create_dir_all(log_path).is_ok() {
            let file_appender = tracing_appender::rolling::daily(log_path, LOG_FILE_PREFIX);
            // try_init: a second call (tests) keeps the first subscriber
            let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
            return;
        }
    }

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logger_twice_is_harmless() {
        init_logger();
        init_logger_with_file(Some("debug"), None);
        tracing::info!("logger initialised");
    }

    #[test]
    fn test_log_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let logs = dir.path().join("logs");
        init_logger_with_file(Some("info"), logs.to_str());
        assert!(logs.exists());
    }
}
