use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - If the data file path is provided, it cannot be empty
/// - If the log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    data_file: &Option<String>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if let Some(data_path) = data_file
        && data_path.trim().is_empty()
    {
        return Err(AppError::config_error("Data file path cannot be empty"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.trim().is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
