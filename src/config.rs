use serde::Deserialize;
use std::env;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::ConfigError;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const ENV_PREFIX: &str = "PORTFOLIO";

/// Runtime configuration for the console
///
/// Resolved from defaults, then `config.toml` in the user's config
/// directory, then environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Root of the admin API, without a trailing slash
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// Send the session token as a bearer header on API calls
    pub attach_token: bool,
}

/// On-disk shape of `config.toml`; every key is optional
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    attach_token: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            attach_token: false,
        }
    }
}

impl Config {
    /// Load the configuration from the default file location and environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::get_config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(ENV_PREFIX);
        config.validate()?;

        info!(
            "Using API at {} (timeout {}s, token attachment {})",
            config.api_base_url,
            config.request_timeout.as_secs(),
            if config.attach_token { "on" } else { "off" }
        );

        Ok(config)
    }

    /// Get the path where the config file is expected
    /// - Linux: ~/.config/portfolio-admin/config.toml
    /// - macOS: ~/Library/Application Support/portfolio-admin/config.toml
    /// - Windows: %APPDATA%\portfolio-admin\config.toml
    fn get_config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("portfolio-admin");
        path.push("config.toml");
        Some(path)
    }

    /// Read a config file, falling back to defaults if it does not exist
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Self::from_toml(&contents)
    }

    fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: FileConfig = toml::from_str(contents)?;
        let defaults = Self::default();

        let config = Self {
            api_base_url: file.api_base_url.unwrap_or(defaults.api_base_url),
            request_timeout: file
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            attach_token: file.attach_token.unwrap_or(defaults.attach_token),
        };
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `{prefix}_API_URL`, `{prefix}_API_TIMEOUT` and
    /// `{prefix}_ATTACH_TOKEN`. Unparsable values are logged and ignored.
    fn apply_env(&mut self, prefix: &str) {
        if let Some(url) = var(&format!("{prefix}_API_URL")) {
            self.api_base_url = url;
        }
        if let Some(secs) = try_parse::<u64>(&format!("{prefix}_API_TIMEOUT")) {
            self.request_timeout = Duration::from_secs(secs);
        }
        if let Some(attach) = try_parse::<bool>(&format!("{prefix}_ATTACH_TOKEN")) {
            self.attach_token = attach;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = self.api_base_url.trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) || url.len() <= 8 {
            return Err(ConfigError::InvalidUrl(self.api_base_url.clone()));
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn try_parse<T: FromStr>(key: &str) -> Option<T>
where
    T::Err: Display,
{
    let raw = var(key)?;
    raw.trim()
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, ignoring");
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::from_file(&temp_dir.path().join("config.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert!(!config.attach_token);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "api_base_url = \"https://admin.example.com/\"\nrequest_timeout_secs = 3\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.base_url(), "https://admin.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(!config.attach_token);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let result = Config::from_toml("api_base_url = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut config = Config::from_toml("request_timeout_secs = 3").unwrap();
        env::set_var("PORTFOLIO_OVERRIDE_API_URL", "https://env.example.com");
        env::set_var("PORTFOLIO_OVERRIDE_API_TIMEOUT", "42");
        env::set_var("PORTFOLIO_OVERRIDE_ATTACH_TOKEN", "true");

        config.apply_env("PORTFOLIO_OVERRIDE");

        assert_eq!(config.base_url(), "https://env.example.com");
        assert_eq!(config.request_timeout, Duration::from_secs(42));
        assert!(config.attach_token);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = Config::from_toml("request_timeout_secs = 3").unwrap();
        env::set_var("PORTFOLIO_INVALID_API_TIMEOUT", "abc");
        env::set_var("PORTFOLIO_INVALID_ATTACH_TOKEN", "maybe");

        config.apply_env("PORTFOLIO_INVALID");

        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(!config.attach_token);
        assert_eq!(config.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_rejects_non_http_url() {
        let result = Config::from_toml("api_base_url = \"localhost:5000\"");
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }
}
