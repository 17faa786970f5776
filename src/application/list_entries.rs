//! List entries use case

use crate::application::validate::{ContentIndex, ValidateService};
use crate::domain::{ConceptEntry, Difficulty, Document, DsaProblemEntry, TagFilter, Tagged};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Keep documents matching the filter, sorted by slug
pub fn filter_documents<T: Tagged>(documents: Vec<Document<T>>, filter: &TagFilter) -> Vec<Document<T>> {
    let mut matching: Vec<Document<T>> = documents
        .into_iter()
        .filter(|doc| filter.matches(doc))
        .collect();
    matching.sort_by(|a, b| a.slug.cmp(&b.slug));
    matching
}

/// Service listing validated entries of a collection
pub struct ListEntriesService {
    validator: ValidateService,
}

impl ListEntriesService {
    /// Create a new list entries service
    pub fn new(repository: FileSystemRepository) -> Self {
        Self {
            validator: ValidateService::new(repository),
        }
    }

    /// Concept notes matching the tag filter
    pub fn concepts(&self, filter: &TagFilter) -> Result<Vec<Document<ConceptEntry>>> {
        let ContentIndex { concepts, .. } = self.validator.execute()?;
        Ok(filter_documents(concepts, filter))
    }

    /// DSA problems matching the tag filter and, when given, the difficulty
    pub fn problems(
        &self,
        filter: &TagFilter,
        level: Option<Difficulty>,
    ) -> Result<Vec<Document<DsaProblemEntry>>> {
        let ContentIndex { problems, .. } = self.validator.execute()?;
        let mut matching = filter_documents(problems, filter);
        if let Some(level) = level {
            matching.retain(|doc| doc.entry.level == level);
        }
        tracing::debug!(count = matching.len(), "problems matched");
        Ok(matching)
    }
}
