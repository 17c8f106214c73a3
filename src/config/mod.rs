use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_API_KEY, DEFAULT_HTTP_TIMEOUT_SECONDS, DEFAULT_LEAGUE_ID,
    refresh::DEFAULT_INTERVAL_SECONDS,
};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the sports data API, without the API key segment.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// API key inserted as the first path segment after the base URL.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// League whose upcoming events are polled.
    #[serde(default = "default_league_id")]
    pub league_id: u32,
    /// Seconds between fetch cycles.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
    /// HTTP timeout in seconds for API requests.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_api_key() -> String {
    DEFAULT_API_KEY.to_string()
}

fn default_league_id() -> u32 {
    DEFAULT_LEAGUE_ID
}

fn default_refresh_interval() -> u64 {
    DEFAULT_INTERVAL_SECONDS
}

fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            api_key: default_api_key(),
            league_id: default_league_id(),
            refresh_interval_seconds: default_refresh_interval(),
            http_timeout_seconds: default_http_timeout(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, the built-in defaults are used; the API is
    /// public so there is nothing to ask the user for.
    ///
    /// # Environment Variables
    /// - `LIGA1_API_BASE_URL` - Override API base URL
    /// - `LIGA1_API_KEY` - Override API key
    /// - `LIGA1_LEAGUE_ID` - Override league id
    /// - `LIGA1_REFRESH_SECONDS` - Override refresh interval
    /// - `LIGA1_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `LIGA1_LOG_FILE` - Override log file path
    pub async fn load() -> Result<Self, AppError> {
        Self::load_or_default_from(&get_config_path()).await
    }

    /// Same as [`Config::load`] but reading from an explicit path.
    pub async fn load_or_default_from(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            tracing::debug!("No config file at {path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `LIGA1_*` environment variables on top of the current values.
    /// Unparseable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var("LIGA1_API_BASE_URL") {
            self.api_base_url = base_url;
        }

        if let Ok(api_key) = std::env::var("LIGA1_API_KEY") {
            self.api_key = api_key;
        }

        if let Some(league_id) = std::env::var("LIGA1_LEAGUE_ID")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            self.league_id = league_id;
        }

        if let Some(interval) = std::env::var("LIGA1_REFRESH_SECONDS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.refresh_interval_seconds = interval;
        }

        if let Some(timeout) = std::env::var("LIGA1_HTTP_TIMEOUT")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(log_file_path) = std::env::var("LIGA1_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Base URL with scheme added and trailing slashes removed.
    pub fn normalized_base_url(&self) -> String {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("https://{trimmed}")
        }
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not created yet, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.normalized_base_url());
        println!("────────────────────────────────────");
        println!("League Id:");
        println!("{}", config.league_id);
        println!("────────────────────────────────────");
        println!("Refresh Interval:");
        println!("{} seconds", config.refresh_interval_seconds);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/liga1_feed.log");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and stores the base
    /// URL in its normalized form.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_base_url: self.normalized_base_url(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without env overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    const ENV_VARS: [&str; 6] = [
        "LIGA1_API_BASE_URL",
        "LIGA1_API_KEY",
        "LIGA1_LEAGUE_ID",
        "LIGA1_REFRESH_SECONDS",
        "LIGA1_HTTP_TIMEOUT",
        "LIGA1_LOG_FILE",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            // SAFETY: env-mutating tests are serialized with #[serial]
            unsafe { std::env::remove_var(var) };
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config_content = r#"
api_base_url = "https://api.example.com/json"
api_key = "123"
league_id = 4328
refresh_interval_seconds = 120
log_file_path = "/custom/log/path"
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_base_url, "https://api.example.com/json");
        assert_eq!(config.api_key, "123");
        assert_eq!(config.league_id, 4328);
        assert_eq!(config.refresh_interval_seconds, 120);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
    }

    #[tokio::test]
    async fn test_config_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    #[serial]
    async fn test_missing_file_falls_back_to_defaults() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("does_not_exist.toml");

        let config = Config::load_or_default_from(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.api_key, DEFAULT_API_KEY);
        assert_eq!(config.league_id, DEFAULT_LEAGUE_ID);
        assert_eq!(config.refresh_interval_seconds, 60);
        assert!(!config_path.exists(), "loading must not create the file");
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("dir").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config = Config {
            api_base_url: "api.example.com/json/".to_string(),
            log_file_path: Some("/tmp/liga1.log".to_string()),
            ..Config::default()
        };
        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.api_base_url, "https://api.example.com/json");
        assert_eq!(loaded.log_file_path, Some("/tmp/liga1.log".to_string()));
        assert_eq!(loaded.league_id, config.league_id);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "league_id = \"not a number\"")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_load_from_nonexistent_path() {
        let result = Config::load_from_path("/nonexistent/liga1/config.toml").await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_normalized_base_url() {
        let mut config = Config::default();
        assert_eq!(config.normalized_base_url(), DEFAULT_API_BASE_URL);

        config.api_base_url = "http://localhost:8080/".to_string();
        assert_eq!(config.normalized_base_url(), "http://localhost:8080");

        config.api_base_url = "www.example.com/api".to_string();
        assert_eq!(config.normalized_base_url(), "https://www.example.com/api");
    }

    #[test]
    fn test_config_path_generation() {
        let path = Config::get_config_path();
        assert!(path.contains("liga1_feed"));
        assert!(path.ends_with("config.toml"));

        let log_dir = Config::get_log_dir_path();
        assert!(log_dir.contains("liga1_feed"));
        assert!(log_dir.ends_with("logs"));
    }

    #[test]
    fn test_config_validation_valid_configs() {
        assert!(Config::default().validate().is_ok());

        let local = Config {
            api_base_url: "localhost:8080".to_string(),
            ..Config::default()
        };
        assert!(local.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_configs() {
        let cases = [
            Config {
                api_base_url: String::new(),
                ..Config::default()
            },
            Config {
                api_base_url: "notadomain".to_string(),
                ..Config::default()
            },
            Config {
                api_key: "  ".to_string(),
                ..Config::default()
            },
            Config {
                league_id: 0,
                ..Config::default()
            },
            Config {
                refresh_interval_seconds: 1,
                ..Config::default()
            },
            Config {
                http_timeout_seconds: 0,
                ..Config::default()
            },
            Config {
                log_file_path: Some(String::new()),
                ..Config::default()
            },
        ];

        for config in cases {
            let result = config.validate();
            assert!(
                matches!(result, Err(AppError::Config(_))),
                "expected validation failure for {config:?}"
            );
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_environment_variable_override() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "league_id = 4328\n").await.unwrap();

        // SAFETY: serialized with #[serial]
        unsafe {
            std::env::set_var("LIGA1_API_BASE_URL", "http://localhost:9999");
            std::env::set_var("LIGA1_LEAGUE_ID", "4391");
            std::env::set_var("LIGA1_REFRESH_SECONDS", "90");
            std::env::set_var("LIGA1_HTTP_TIMEOUT", "not-a-number");
        }

        let config = Config::load_or_default_from(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_base_url, "http://localhost:9999");
        assert_eq!(config.league_id, 4391);
        assert_eq!(config.refresh_interval_seconds, 90);
        assert_eq!(config.http_timeout_seconds, DEFAULT_HTTP_TIMEOUT_SECONDS);

        clear_env();
    }

    #[tokio::test]
    #[serial]
    async fn test_environment_override_is_validated() {
        clear_env();
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        // SAFETY: serialized with #[serial]
        unsafe { std::env::set_var("LIGA1_REFRESH_SECONDS", "2") };

        let result = Config::load_or_default_from(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::Config(_))));

        clear_env();
    }
}
