use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Default match type cannot be empty or whitespace
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    default_match_type: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if default_match_type.trim().is_empty() {
        return Err(AppError::config_error("Default match type cannot be empty"));
    }

    if default_match_type.trim() != default_match_type {
        return Err(AppError::config_error(format!(
            "Default match type '{default_match_type}' has leading or trailing whitespace"
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
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
