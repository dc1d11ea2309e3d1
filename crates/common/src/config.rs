use crate::error::TextDigestError;
use crate::logger::parse_log_level;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// textdigest application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// File the rendered summary is written to (overwritten each run)
    pub output_path: PathBuf,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("output.txt"),
            log_dir: PathBuf::from("./log"),
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, TextDigestError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let config = Self {
            output_path: Self::get_env_path("OUTPUT_PATH").unwrap_or(defaults.output_path),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.validate()?;

        // Ensure required directories exist
        config.ensure_directories()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), TextDigestError> {
        let mut dirs = vec![self.log_dir.clone()];
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                dirs.push(parent.to_path_buf());
            }
        }

        for dir in dirs {
            if !dir.exists() {
                std::fs::create_dir_all(&dir).map_err(|e| {
                    TextDigestError::config(format!(
                        "Failed to create directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), TextDigestError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(TextDigestError::config("Output path cannot be empty"));
        }

        if self.output_path.is_dir() {
            return Err(TextDigestError::config(format!(
                "Output path {} is a directory",
                self.output_path.display()
            )));
        }

        if parse_log_level(&self.log_level).is_none() {
            return Err(TextDigestError::config(format!(
                "Unknown log level '{}'",
                self.log_level
            )));
        }

        Ok(())
    }
}
