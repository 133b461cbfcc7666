//! Configuration management for the soulscript application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `SOULSCRIPT_DIR`: Data directory holding the reflection history (defaults to ~/.soulscript)
//! - `GEMINI_API_KEY`: Gemini API key; remote guidance is disabled without it
//! - `SOULSCRIPT_MODEL`: Gemini model name (defaults to gemini-1.5-flash)
//! - `SOULSCRIPT_API_URL`: Gemini API base URL
//! - `SOULSCRIPT_SEED`: Optional seed making every random choice reproducible
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DEFAULT_GEMINI_API_URL, DEFAULT_GEMINI_MODEL, ENV_VAR_GEMINI_API_KEY,
    ENV_VAR_HOME, ENV_VAR_SOULSCRIPT_API_URL, ENV_VAR_SOULSCRIPT_DIR, ENV_VAR_SOULSCRIPT_MODEL,
    ENV_VAR_SOULSCRIPT_SEED,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the soulscript application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use soulscript::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     data_dir: PathBuf::from("/path/to/data"),
///     ..Config::default()
/// };
/// assert!(!config.remote_configured());
/// ```
///
/// Loading configuration from environment variables:
/// ```no_run
/// use soulscript::Config;
/// use std::env;
///
/// env::set_var("SOULSCRIPT_DIR", "/custom/soulscript/path");
///
/// let config = Config::load().expect("Failed to load configuration");
/// assert_eq!(config.data_dir.to_str(), Some("/custom/soulscript/path"));
/// ```
#[derive(Clone)]
pub struct Config {
    /// Directory holding the reflection history and its lock file.
    pub data_dir: PathBuf,

    /// Gemini API key. `None` disables remote guidance.
    pub gemini_api_key: Option<String>,

    /// Gemini model name.
    pub gemini_model: String,

    /// Gemini API base URL.
    pub gemini_api_url: String,

    /// Seed for all random choices. `None` uses fresh entropy per run.
    pub seed: Option<u64>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &"[REDACTED_PATH]")
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_url", &self.gemini_api_url)
            .field("seed", &self.seed)
            .finish()
    }
}

impl Default for Config {
    /// Creates a new Config with default values and no data directory.
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from(""),
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_url: DEFAULT_GEMINI_API_URL.to_string(),
            seed: None,
        }
    }
}

/// Reads a variable, treating unset and blank the same.
fn non_blank_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand` to handle `~`
    /// and environment variable references.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The data directory path expansion fails or yields an empty path
    /// - `SOULSCRIPT_SEED` is set but is not an unsigned integer
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use soulscript::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Remote guidance enabled: {}", config.remote_configured()),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let data_dir_str = non_blank_var(ENV_VAR_SOULSCRIPT_DIR).unwrap_or_else(|| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        let seed = match non_blank_var(ENV_VAR_SOULSCRIPT_SEED) {
            Some(raw) => Some(raw.parse::<u64>().map_err(|e| {
                AppError::Config(format!(
                    "{} must be an unsigned integer, got '{}': {}",
                    ENV_VAR_SOULSCRIPT_SEED, raw, e
                ))
            })?),
            None => None,
        };

        Ok(Config {
            data_dir,
            gemini_api_key: non_blank_var(ENV_VAR_GEMINI_API_KEY),
            gemini_model: non_blank_var(ENV_VAR_SOULSCRIPT_MODEL)
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_url: non_blank_var(ENV_VAR_SOULSCRIPT_API_URL)
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            seed,
        })
    }

    /// Whether a Gemini API key is available.
    pub fn remote_configured(&self) -> bool {
        self.gemini_api_key.is_some()
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty"
    /// - "Data directory must be an absolute path"
    /// - "Gemini model name is empty"
    /// - "Gemini API URL must start with http:// or https://"
    ///
    /// # Examples
    ///
    /// ```
    /// use soulscript::Config;
    /// use std::path::PathBuf;
    ///
    /// let valid_config = Config {
    ///     data_dir: PathBuf::from("/absolute/path"),
    ///     ..Config::default()
    /// };
    /// assert!(valid_config.validate().is_ok());
    ///
    /// let invalid_config = Config {
    ///     data_dir: PathBuf::from("relative/path"),
    ///     ..Config::default()
    /// };
    /// assert!(invalid_config.validate().is_err());
    /// ```
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        if self.gemini_model.trim().is_empty() {
            return Err(AppError::Config("Gemini model name is empty".to_string()));
        }

        if !(self.gemini_api_url.starts_with("http://")
            || self.gemini_api_url.starts_with("https://"))
        {
            return Err(AppError::Config(
                "Gemini API URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        ENV_VAR_SOULSCRIPT_DIR,
        ENV_VAR_GEMINI_API_KEY,
        ENV_VAR_SOULSCRIPT_MODEL,
        ENV_VAR_SOULSCRIPT_API_URL,
        ENV_VAR_SOULSCRIPT_SEED,
    ];

    /// Runs `f` with the soulscript variables cleared, restoring them afterwards.
    fn with_clean_env<F: FnOnce()>(f: F) {
        let saved: Vec<(&str, Option<String>)> =
            VARS.iter().map(|name| (*name, env::var(name).ok())).collect();
        for name in VARS {
            env::remove_var(name);
        }

        f();

        for (name, value) in saved {
            match value {
                Some(v) => env::set_var(name, v),
                None => env::remove_var(name),
            }
        }
    }

    #[test]
    fn test_debug_impl_redacts_sensitive_info() {
        let config = Config {
            data_dir: PathBuf::from("/home/someone/.soulscript"),
            gemini_api_key: Some("AIza-secret".to_string()),
            ..Config::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("AIza-secret"));
        assert!(!debug.contains("/home/someone"));
        assert!(debug.contains("[REDACTED_PATH]"));
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        with_clean_env(|| {
            let config = Config::load().unwrap();
            assert!(config.data_dir.ends_with(DEFAULT_DATA_SUBDIR));
            assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
            assert_eq!(config.gemini_api_url, DEFAULT_GEMINI_API_URL);
            assert!(!config.remote_configured());
            assert_eq!(config.seed, None);
        });
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        with_clean_env(|| {
            env::set_var(ENV_VAR_SOULSCRIPT_DIR, "/tmp/soul");
            env::set_var(ENV_VAR_GEMINI_API_KEY, "key");
            env::set_var(ENV_VAR_SOULSCRIPT_MODEL, "gemini-pro");
            env::set_var(ENV_VAR_SOULSCRIPT_SEED, "42");

            let config = Config::load().unwrap();
            assert_eq!(config.data_dir, PathBuf::from("/tmp/soul"));
            assert!(config.remote_configured());
            assert_eq!(config.gemini_model, "gemini-pro");
            assert_eq!(config.seed, Some(42));
        });
    }

    #[test]
    #[serial]
    fn test_blank_key_disables_remote() {
        with_clean_env(|| {
            env::set_var(ENV_VAR_GEMINI_API_KEY, "   ");
            let config = Config::load().unwrap();
            assert!(!config.remote_configured());
        });
    }

    #[test]
    #[serial]
    fn test_invalid_seed_is_rejected() {
        with_clean_env(|| {
            env::set_var(ENV_VAR_SOULSCRIPT_SEED, "not-a-number");
            let err = Config::load().unwrap_err();
            assert!(err.to_string().contains(ENV_VAR_SOULSCRIPT_SEED));
        });
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = Config {
            data_dir: PathBuf::from("/data"),
            gemini_api_url: "ftp://example.com".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
