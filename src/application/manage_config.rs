//! Config management use case

use crate::error::{JournalError, Result};
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};

pub const CONFIG_KEYS: [&str; 5] = [
    "content_dir",
    "concepts_dir",
    "dsa_problems_dir",
    "log_level",
    "created",
];

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "content_dir" => Ok(config.content_dir),
            "concepts_dir" => Ok(config.concepts_dir),
            "dsa_problems_dir" => Ok(config.dsa_problems_dir),
            "log_level" => Ok(config.log_level),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(JournalError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key,
                CONFIG_KEYS.join(", ")
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "content_dir" => config.content_dir = value.to_string(),
            "concepts_dir" => config.concepts_dir = value.to_string(),
            "dsa_problems_dir" => config.dsa_problems_dir = value.to_string(),
            "log_level" => config.log_level = value.to_lowercase(),
            "created" => {
                return Err(JournalError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(JournalError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key,
                    CONFIG_KEYS[..4].join(", ")
                )));
            }
        }

        config.check()?;
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
