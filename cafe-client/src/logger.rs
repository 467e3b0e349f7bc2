//! Logging setup
//!
//! `RUST_LOG` takes precedence over the level passed in. With a log
//! directory the output goes to a daily rolling file instead of stdout.

use std::path::Path;

use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "cafe-client";

/// Initialize the logger at `info` on stdout
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger with optional file output
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
                return;
            }
            Err(e) => eprintln!("Cannot create log dir {}: {e}, logging to stdout", dir.display()),
        }
    }

    let _ = subscriber.try_init();
}
