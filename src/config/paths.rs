use crate::constants::files;
use std::path::{Path, PathBuf};

fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(files::APP_DIR)
}

/// Returns the platform-specific path for the config file.
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    app_dir()
        .join(files::CONFIG_FILE)
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    app_dir()
        .join(files::LOG_DIR)
        .to_string_lossy()
        .to_string()
}
