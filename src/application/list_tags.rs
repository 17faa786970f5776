//! List tags use case

use crate::application::validate::ValidateService;
use crate::domain::tags::count_tags;
use crate::domain::Collection;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::collections::BTreeMap;

/// Service for listing tag usage across validated entries.
pub struct ListTagsService {
    validator: ValidateService,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self {
            validator: ValidateService::new(repository),
        }
    }

    /// Count entries per tag, for one collection or both.
    pub fn execute(&self, collection: Option<Collection>) -> Result<BTreeMap<String, usize>> {
        let index = self.validator.execute()?;

        let mut counts = BTreeMap::new();
        if collection.is_none_or(|c| c == Collection::Concepts) {
            merge(&mut counts, count_tags(&index.concepts));
        }
        if collection.is_none_or(|c| c == Collection::DsaProblems) {
            merge(&mut counts, count_tags(&index.problems));
        }

        Ok(counts)
    }
}

fn merge(into: &mut BTreeMap<String, usize>, from: BTreeMap<String, usize>) {
    for (tag, count) in from {
        *into.entry(tag).or_insert(0) += count;
    }
}
