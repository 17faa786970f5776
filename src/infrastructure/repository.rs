//! File system repository

use crate::domain::Collection;
use crate::error::{JournalError, Result};
use crate::infrastructure::config::{Config, CONFIG_DIR};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const CONTENT_EXTENSIONS: [&str; 2] = ["md", "mdx"];

/// A content file found on disk, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Absolute (or root-joined) path of the file
    pub path: PathBuf,
    /// Path relative to the collection directory
    pub relative: PathBuf,
}

/// Abstract repository for journal content
pub trait ContentRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .cjournal/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .cjournal/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Create .cjournal directory structure
    fn initialize(&self) -> Result<()>;

    /// Enumerate the content files of a collection, sorted by path
    fn list_documents(&self, config: &Config, collection: Collection) -> Result<Vec<SourceDocument>>;

    /// Read a content file
    fn read_document(&self, document: &SourceDocument) -> Result<String>;
}

/// File system implementation of ContentRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover journal root by walking up from current directory
    /// First checks CJOURNAL_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("CJOURNAL_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(JournalError::Config(format!(
                    "CJOURNAL_ROOT is set to '{}' but no .cjournal directory found. \
                    Run 'cjournal init' in that directory or unset CJOURNAL_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover journal root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config_dir(&current) {
                tracing::debug!(root = %current.display(), "found journal root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(JournalError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_config_dir(path: &Path) -> bool {
        path.join(CONFIG_DIR).is_dir()
    }

    /// Files and directories starting with `_` or `.` are drafts/hidden
    fn is_ignored(name: &str) -> bool {
        name.starts_with('_') || name.starts_with('.')
    }

    fn is_content_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| CONTENT_EXTENSIONS.contains(&ext))
    }

    /// Directories under the content directory that hold markdown but are not
    /// a configured collection. Their documents are never validated.
    pub fn unconfigured_directories(&self, config: &Config) -> Result<Vec<PathBuf>> {
        let content_dir = self.root.join(&config.content_dir);
        if !content_dir.is_dir() {
            return Ok(Vec::new());
        }

        let configured: Vec<PathBuf> = Collection::ALL
            .iter()
            .map(|c| self.root.join(config.collection_dir(*c)))
            .collect();

        let mut found = Vec::new();
        for entry in fs::read_dir(&content_dir)? {
            let path = entry?.path();
            let ignored = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_none_or(Self::is_ignored);
            if ignored || !path.is_dir() || configured.iter().any(|dir| dir.starts_with(&path)) {
                continue;
            }

            let has_content = WalkDir::new(&path)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .any(|entry| entry.file_type().is_file() && Self::is_content_file(entry.path()));
            if has_content {
                found.push(path);
            }
        }

        found.sort();
        Ok(found)
    }
}

impl ContentRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let config_dir = self.root.join(CONFIG_DIR);

        if config_dir.exists() {
            return Err(JournalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&config_dir)?;
        Ok(())
    }

    fn list_documents(&self, config: &Config, collection: Collection) -> Result<Vec<SourceDocument>> {
        let dir = self.root.join(config.collection_dir(collection));

        if !dir.is_dir() {
            tracing::warn!(
                collection = %collection,
                dir = %dir.display(),
                "collection directory does not exist"
            );
            return Ok(Vec::new());
        }

        let walker = WalkDir::new(&dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !Self::is_ignored(name))
            });

        let mut documents = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                JournalError::Io(
                    e.into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
                )
            })?;

            if !entry.file_type().is_file() || !Self::is_content_file(entry.path()) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(&dir) else {
                continue;
            };

            documents.push(SourceDocument {
                path: entry.path().to_path_buf(),
                relative: relative.to_path_buf(),
            });
        }

        tracing::debug!(collection = %collection, count = documents.len(), "listed documents");
        Ok(documents)
    }

    fn read_document(&self, document: &SourceDocument) -> Result<String> {
        fs::read_to_string(&document.path).map_err(JournalError::Io)
    }
}
