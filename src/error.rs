//! Error types for cjournal

use crate::domain::ValidationReport;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cjournal
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Not a cjournal directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Content validation failed for {} document(s)", .0.len())]
    Validation(ValidationReport),

    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::NotJournalDirectory(_) => 2,
            JournalError::Validation(_) => 3,
            JournalError::UnknownCollection(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::NotJournalDirectory(path) => {
                format!(
                    "Not a cjournal directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'cjournal init' at the root of your site\n\
                    • Navigate to an existing journal directory\n\
                    • Set CJOURNAL_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JournalError::Validation(report) => {
                format!(
                    "{}\n\n{}\n\
                    Every document must pass its collection schema before the site builds.\n\
                    Run 'cjournal levels' to see valid difficulty levels.",
                    self, report
                )
            }
            JournalError::UnknownCollection(name) => {
                format!(
                    "Unknown collection: '{}'\n\n\
                    Valid collections: concepts, dsa-problems\n\
                    Example: cjournal list dsa-problems --all graph",
                    name
                )
            }
            JournalError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: cjournal config content_dir src/content",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
