use super::Config;
use crate::constants::refresh::MIN_INTERVAL_SECONDS;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must look like a URL or domain name
/// - API key cannot be empty
/// - League id must be non-zero
/// - Refresh interval cannot be shorter than the enforced minimum
/// - HTTP timeout must be non-zero
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let base = config.api_base_url.trim();
    if base.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !base.starts_with("http://") && !base.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !base.contains('.') && !base.starts_with("localhost") {
            return Err(AppError::config_error(
                "API base URL must be a valid URL or domain name",
            ));
        }
    }

    if config.api_key.trim().is_empty() {
        return Err(AppError::config_error("API key cannot be empty"));
    }

    if config.league_id == 0 {
        return Err(AppError::config_error("League id must be greater than zero"));
    }

    if config.refresh_interval_seconds < MIN_INTERVAL_SECONDS {
        return Err(AppError::config_error(format!(
            "Refresh interval must be at least {MIN_INTERVAL_SECONDS} seconds"
        )));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be greater than zero"));
    }

    if let Some(log_path) = &config.log_file_path {
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
