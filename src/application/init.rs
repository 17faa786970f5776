//! Initialize journal use case

use crate::domain::Collection;
use crate::error::Result;
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
///
/// Writes the default config and creates both collection directories.
pub fn init(path: &Path) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    for collection in Collection::ALL {
        let dir = path.join(config.collection_dir(collection));
        fs::create_dir_all(&dir)?;
        tracing::debug!(collection = %collection, dir = %dir.display(), "created collection directory");
    }

    tracing::info!(root = %path.display(), "initialized journal");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_layout() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");

        init(&root).unwrap();

        assert!(root.join(".cjournal/config.toml").is_file());
        assert!(root.join("src/content/concepts").is_dir());
        assert!(root.join("src/content/dsaProblems").is_dir());
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
