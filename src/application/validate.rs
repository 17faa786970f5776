//! Validate content use case

use crate::domain::schema::{validate_document, DocumentFailure, Schema};
use crate::domain::{ConceptEntry, Document, DsaProblemEntry, ValidationReport};
use crate::error::{JournalError, Result};
use crate::infrastructure::{Config, ContentRepository, FileSystemRepository};
use std::path::PathBuf;

/// Every validated entry of a journal
#[derive(Debug, Clone, Default)]
pub struct ContentIndex {
    pub concepts: Vec<Document<ConceptEntry>>,
    pub problems: Vec<Document<DsaProblemEntry>>,
    /// Content directories outside every configured collection, relative to the root
    pub unchecked_dirs: Vec<PathBuf>,
}

/// Service validating all content documents against their schemas
pub struct ValidateService {
    repository: FileSystemRepository,
}

impl ValidateService {
    /// Create a new validate service
    pub fn new(repository: FileSystemRepository) -> Self {
        ValidateService { repository }
    }

    /// Validate both collections.
    ///
    /// Every document is checked; if any fails, the whole run fails with a
    /// report naming each rejected document. No partial index is returned.
    pub fn execute(&self) -> Result<ContentIndex> {
        let config = self.repository.load_config()?;
        let mut report = ValidationReport::default();

        let concepts = self.load_collection::<ConceptEntry>(&config, &mut report)?;
        let problems = self.load_collection::<DsaProblemEntry>(&config, &mut report)?;

        if !report.is_empty() {
            tracing::error!(failed = report.len(), "content validation failed");
            return Err(JournalError::Validation(report));
        }

        let unchecked_dirs: Vec<PathBuf> = self
            .repository
            .unconfigured_directories(&config)?
            .into_iter()
            .map(|dir| self.relative_to_root(dir))
            .collect();
        for dir in &unchecked_dirs {
            tracing::warn!(dir = %dir.display(), "directory is not a configured collection");
        }

        tracing::info!(
            concepts = concepts.len(),
            problems = problems.len(),
            "content validated"
        );
        Ok(ContentIndex {
            concepts,
            problems,
            unchecked_dirs,
        })
    }

    /// Paths in reports are shown relative to the journal root
    fn relative_to_root(&self, path: PathBuf) -> PathBuf {
        match path.strip_prefix(self.repository.root()) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path,
        }
    }

    fn load_collection<T: Schema>(
        &self,
        config: &Config,
        report: &mut ValidationReport,
    ) -> Result<Vec<Document<T>>> {
        let sources = self.repository.list_documents(config, T::COLLECTION)?;
        let mut documents = Vec::with_capacity(sources.len());

        for source in sources {
            let content = self.repository.read_document(&source)?;
            let source_file = self.relative_to_root(source.path);
            match validate_document::<T>(&source_file, &source.relative, &content) {
                Ok(document) => documents.push(document),
                Err(error) => {
                    tracing::warn!(
                        file = %source_file.display(),
                        error = %error,
                        "document rejected"
                    );
                    report.push(DocumentFailure {
                        collection: T::COLLECTION,
                        source_file,
                        error,
                    });
                }
            }
        }

        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::DocumentError;
    use crate::domain::Collection;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn journal() -> TempDir {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        temp
    }

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join("src/content").join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn service(root: &Path) -> ValidateService {
        ValidateService::new(FileSystemRepository::new(root.to_path_buf()))
    }

    #[test]
    fn test_validate_empty_journal() {
        let temp = journal();
        let index = service(temp.path()).execute().unwrap();
        assert!(index.concepts.is_empty());
        assert!(index.problems.is_empty());
    }

    #[test]
    fn test_validate_all_valid() {
        let temp = journal();
        write(
            temp.path(),
            "concepts/paging.md",
            "---\ntitle: Paging\ntags: [os, memory]\n---\n\nBody\n",
        );
        write(
            temp.path(),
            "dsaProblems/two-sum.md",
            "---\ntitle: Two Sum\nlinks: [\"https://leetcode.com/problems/two-sum/\"]\nds: [array]\ntechniques: [hashing]\nlevel: 1\n---\n\nSolution\n",
        );

        let index = service(temp.path()).execute().unwrap();
        assert_eq!(index.concepts.len(), 1);
        assert_eq!(index.concepts[0].slug, "paging");
        assert_eq!(index.problems.len(), 1);
        assert_eq!(index.problems[0].entry.title, "Two Sum");
        assert_eq!(
            index.problems[0].source_file,
            PathBuf::from("src/content/dsaProblems/two-sum.md")
        );
        assert!(index.unchecked_dirs.is_empty());
    }

    #[test]
    fn test_validate_lists_unchecked_directories() {
        let temp = journal();
        write(
            temp.path(),
            "dsa-problems/bad.md",
            "---\ntitle: Bad\nlevel: 9\n---\n",
        );

        let index = service(temp.path()).execute().unwrap();
        assert!(index.problems.is_empty());
        assert_eq!(
            index.unchecked_dirs,
            vec![PathBuf::from("src/content/dsa-problems")]
        );
    }

    #[test]
    fn test_validate_one_bad_document_fails_whole_run() {
        let temp = journal();
        write(
            temp.path(),
            "concepts/good.md",
            "---\ntitle: Good\ntags: []\n---\n",
        );
        write(
            temp.path(),
            "dsaProblems/bad.md",
            "---\ntitle: Bad\nlinks: []\nds: [linkedlist]\ntechniques: []\nlevel: 5\n---\n",
        );

        let err = service(temp.path()).execute().unwrap_err();
        let JournalError::Validation(report) = err else {
            panic!("Expected validation error");
        };
        assert_eq!(report.len(), 1);
        let failure = &report.failures[0];
        assert_eq!(failure.collection, Collection::DsaProblems);
        assert_eq!(
            failure.source_file,
            PathBuf::from("src/content/dsaProblems/bad.md")
        );
        match &failure.error {
            DocumentError::Fields(fields) => {
                let names: Vec<&str> = fields.iter().map(|f| f.field.as_str()).collect();
                assert_eq!(names, vec!["ds[0]", "level"]);
            }
            other => panic!("Expected field errors, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_every_bad_document() {
        let temp = journal();
        write(temp.path(), "concepts/a.md", "no front matter\n");
        write(temp.path(), "concepts/b.md", "---\ntitle: B\n---\n");

        let err = service(temp.path()).execute().unwrap_err();
        let JournalError::Validation(report) = err else {
            panic!("Expected validation error");
        };
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_validate_requires_initialized_journal() {
        let temp = TempDir::new().unwrap();
        let err = service(temp.path()).execute().unwrap_err();
        assert!(matches!(err, JournalError::NotJournalDirectory(_)));
    }
}
