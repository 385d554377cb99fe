use crate::cli::Args;
use std::io::stdout;
use std::path::Path;
use tour_standings::config::Config;
use tour_standings::constants::files;
use tour_standings::error::AppError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "tour_standings=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse::<Directive>()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a custom log path into directory and file name.
fn resolve_log_location(custom_log_path: Option<&String>) -> (String, String) {
    match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(files::LOG_FILE);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), files::LOG_FILE.to_string()),
    }
}

/// Sets up logging for the binary.
///
/// - Always logs to a daily rolling file
/// - With `--debug` also logs to stdout
/// - Creates the log directory if it doesn't exist
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    args: &Args,
    config: Option<&Config>,
) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = config.and_then(|c| c.log_file_path.as_ref());
    let custom_log_path = args.log_file.as_ref().or(config_log_path);
    let (log_dir, log_file_name) = resolve_log_location(custom_log_path);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter()?);

    let registry = tracing_subscriber::registry().with(file_layer);

    if args.debug {
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(env_filter()?),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
