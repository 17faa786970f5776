//! Configuration management

use crate::domain::Collection;
use crate::error::{JournalError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".cjournal";
pub const CONFIG_FILE: &str = "config.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn default_content_dir() -> String {
    "src/content".to_string()
}

fn default_concepts_dir() -> String {
    Collection::Concepts.as_str().to_string()
}

/// The site keeps problems under the collection key `dsaProblems`
fn default_dsa_problems_dir() -> String {
    "dsaProblems".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Content root, relative to the journal root
    #[serde(default = "default_content_dir")]
    pub content_dir: String,

    /// Directory name of the concepts collection inside `content_dir`
    #[serde(default = "default_concepts_dir")]
    pub concepts_dir: String,

    /// Directory name of the DSA problems collection inside `content_dir`
    #[serde(default = "default_dsa_problems_dir")]
    pub dsa_problems_dir: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            content_dir: default_content_dir(),
            concepts_dir: default_concepts_dir(),
            dsa_problems_dir: default_dsa_problems_dir(),
            log_level: default_log_level(),
            created: Utc::now(),
        }
    }

    /// Load config from .cjournal/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                JournalError::NotJournalDirectory(path.to_path_buf())
            } else {
                JournalError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| JournalError::Config(format!("Failed to parse config.toml: {}", e)))?;
        config.check()?;
        Ok(config)
    }

    /// Save config to .cjournal/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join(CONFIG_FILE);

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| JournalError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Directory holding a collection's documents, relative to the journal root
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        let name = match collection {
            Collection::Concepts => &self.concepts_dir,
            Collection::DsaProblems => &self.dsa_problems_dir,
        };
        Path::new(&self.content_dir).join(name)
    }

    /// Log level, with CJOURNAL_LOG taking precedence over the config file
    pub fn get_log_level(&self) -> String {
        std::env::var("CJOURNAL_LOG").unwrap_or_else(|_| self.log_level.clone())
    }

    /// Reject values a hand-edited config file could contain but a run can't use
    pub fn check(&self) -> Result<()> {
        for (key, value) in [
            ("content_dir", &self.content_dir),
            ("concepts_dir", &self.concepts_dir),
            ("dsa_problems_dir", &self.dsa_problems_dir),
        ] {
            if value.trim().is_empty() {
                return Err(JournalError::Config(format!("'{}' must not be empty", key)));
            }
            if Path::new(value).is_absolute() {
                return Err(JournalError::Config(format!(
                    "'{}' must be relative to the journal root, got '{}'",
                    key, value
                )));
            }
        }

        Self::check_log_level(&self.log_level)
    }

    pub fn check_log_level(level: &str) -> Result<()> {
        if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            Ok(())
        } else {
            Err(JournalError::Config(format!(
                "Invalid log level: '{}'. Valid levels are: {}",
                level,
                LOG_LEVELS.join(", ")
            )))
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
