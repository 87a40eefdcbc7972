use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API token cannot be empty
/// - Both URLs must start with http:// or https://
/// - If a log file path is provided it cannot be empty, and its parent
///   directory must exist or be creatable
pub fn validate_config(
    api_token: &str,
    api_base_url: &str,
    live_url: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_token.trim().is_empty() {
        return Err(AppError::config_error("API token cannot be empty"));
    }

    for (name, url) in [("API base URL", api_base_url), ("Live scores URL", live_url)] {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::config_error(format!(
                "{name} must start with http:// or https:// (got '{url}')"
            )));
        }
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
