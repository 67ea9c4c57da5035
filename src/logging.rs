//! Logging setup: colored stderr + JSON rolling log file.
//!
//! The file layer is optional. If its directory cannot be created the tool
//! keeps running with stderr logging only.

use std::path::Path;

use tracing::warn;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub const DEFAULT_LOG_FILE: &str = "logs/gradebook.log";

/// Builds a filter from the directives in `var`, or `default` when the
/// variable is unset or empty.
pub fn env_filter(var: &str, default: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}

/// Opens a daily-rolling appender for `log_file_path`, creating its directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn log_file_appender(log_file_path: &Path) -> Result<RollingFileAppender, InitError> {
    let log_dir = log_file_path.parent().unwrap_or(Path::new("logs"));
    let file_name = log_file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "gradebook.log".to_string());

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(file_name)
        .build(log_dir)
}

/// Installs the global subscriber.
///
/// Stderr defaults to `warn` (`RUST_LOG`) so log lines do not interleave
/// with prompts; the JSON file defaults to `debug` (`RUST_LOG_JSON`) and is
/// written to `LOG_FILE_PATH`. The returned guard must be held until exit.
pub fn init() -> Option<WorkerGuard> {
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(env_filter("RUST_LOG", LevelFilter::WARN));

    let (json_layer, file_guard, file_error) = match log_file_appender(Path::new(&log_file_path)) {
        Ok(appender) => {
            let (non_blocking_file, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(env_filter("RUST_LOG_JSON", LevelFilter::DEBUG));
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    if let Some(e) = file_error {
        warn!(path = %log_file_path, error = %e, "Log file unavailable, logging to stderr only");
    }

    file_guard
}
