use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    // Snapshot file was readable but did not contain match records
    #[error("Invalid match data in {path}: {message}")]
    MatchData { path: String, message: String },

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an error for an invalid flag combination
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a match data error for the given snapshot file
    pub fn match_data_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MatchData {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// True for errors caused by the user's input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            AppError::Config(_) | AppError::InvalidArguments(_) | AppError::MatchData { .. }
        )
    }
}
