use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse tour data: {0}")]
    DataParse(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Snapshot consistency errors
    #[error("Invalid tour data: {0}")]
    DataValidation(String),

    #[error("Stop not found: {stop_id}")]
    StopNotFound { stop_id: i64 },
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a snapshot validation error
    pub fn data_validation(msg: impl Into<String>) -> Self {
        Self::DataValidation(msg.into())
    }

    /// Create a stop not found error
    pub fn stop_not_found(stop_id: i64) -> Self {
        Self::StopNotFound { stop_id }
    }

    /// Check if the error comes from the user's input data rather than the environment
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            AppError::DataParse(_) | AppError::DataValidation(_) | AppError::StopNotFound { .. }
        )
    }
}
