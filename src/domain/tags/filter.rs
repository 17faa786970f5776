//! Tag predicates and entry filtering
//!
//! # Examples
//!
//! ```
//! use cjournal::domain::tags::{contains_all_tags, contains_some_tag};
//!
//! assert!(contains_all_tags(&["dp", "graph"], &["dp"]));
//! assert!(!contains_all_tags(&["dp", "graph"], &["dp", "bfs"]));
//! assert!(contains_some_tag(&["dp", "graph"], &["bfs", "graph"]));
//! ```

use crate::domain::entry::{ConceptEntry, Document, DsaProblemEntry};
use std::collections::HashSet;

/// True iff every query tag appears in the entry tags.
///
/// An empty query is vacuously satisfied.
pub fn contains_all_tags<E, Q>(entry_tags: &[E], query_tags: &[Q]) -> bool
where
    E: AsRef<str>,
    Q: AsRef<str>,
{
    let tag_set: HashSet<&str> = entry_tags.iter().map(AsRef::as_ref).collect();
    query_tags.iter().all(|tag| tag_set.contains(tag.as_ref()))
}

/// True iff at least one query tag appears in the entry tags.
///
/// An empty query never matches.
pub fn contains_some_tag<E, Q>(entry_tags: &[E], query_tags: &[Q]) -> bool
where
    E: AsRef<str>,
    Q: AsRef<str>,
{
    let tag_set: HashSet<&str> = entry_tags.iter().map(AsRef::as_ref).collect();
    query_tags.iter().any(|tag| tag_set.contains(tag.as_ref()))
}

/// Anything exposing a list of tag names
pub trait Tagged {
    fn tag_names(&self) -> Vec<&str>;
}

impl Tagged for ConceptEntry {
    fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }
}

/// Problems are tagged by their data structures followed by their techniques
impl Tagged for DsaProblemEntry {
    fn tag_names(&self) -> Vec<&str> {
        self.data_structures
            .iter()
            .map(|ds| ds.as_str())
            .chain(self.techniques.iter().map(|t| t.as_str()))
            .collect()
    }
}

impl<T: Tagged> Tagged for Document<T> {
    fn tag_names(&self) -> Vec<&str> {
        self.entry.tag_names()
    }
}

/// Query tags an entry must carry.
///
/// `all` tags must all be present; when `some` is non-empty at least one of
/// them must be present too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter {
    pub all: Vec<String>,
    pub some: Vec<String>,
}

impl TagFilter {
    /// Build a filter, dropping a leading `#` from each query tag
    pub fn new<A, S>(all: A, some: S) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        TagFilter {
            all: normalize(all),
            some: normalize(some),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.some.is_empty()
    }

    pub fn matches<T: Tagged + ?Sized>(&self, item: &T) -> bool {
        let tags = item.tag_names();
        contains_all_tags(&tags, &self.all)
            && (self.some.is_empty() || contains_some_tag(&tags, &self.some))
    }
}

fn normalize<I>(tags: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| {
            let tag = tag.as_ref().trim();
            tag.strip_prefix('#').unwrap_or(tag).to_string()
        })
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
#[allow(clippy::useless_vec)]
mod tests {
    use super::*;
    use crate::domain::difficulty::Difficulty;
    use crate::domain::vocabulary::{DataStructure, Technique};
    use std::collections::BTreeSet;

    const EMPTY: [&str; 0] = [];

    fn samples() -> Vec<Vec<&'static str>> {
        vec![
            vec![],
            vec!["dp"],
            vec!["dp", "graph"],
            vec!["graph", "dp", "bfs"],
        ]
    }

    #[test]
    fn test_all_tags_empty_query_is_true() {
        for tags in samples() {
            assert!(contains_all_tags(&tags, &EMPTY));
        }
    }

    #[test]
    fn test_some_tag_empty_query_is_false() {
        for tags in samples() {
            assert!(!contains_some_tag(&tags, &EMPTY));
        }
    }

    #[test]
    fn test_tags_against_themselves() {
        for tags in samples() {
            assert!(contains_all_tags(&tags, &tags));
            assert_eq!(contains_some_tag(&tags, &tags), !tags.is_empty());
        }
    }

    #[test]
    fn test_all_tags_examples() {
        assert!(contains_all_tags(&["dp", "graph"], &["dp"]));
        assert!(!contains_all_tags(&["dp", "graph"], &["dp", "bfs"]));
        assert!(!contains_all_tags(&EMPTY, &["dp"]));
    }

    #[test]
    fn test_some_tag_examples() {
        assert!(contains_some_tag(&["dp", "graph"], &["bfs", "graph"]));
        assert!(!contains_some_tag(&["dp"], &["bfs"]));
    }

    #[test]
    fn test_predicates_are_order_independent() {
        assert!(contains_all_tags(&["graph", "dp"], &["dp", "graph"]));
        assert!(contains_all_tags(&["dp", "graph"], &["graph", "dp"]));
        assert!(contains_some_tag(&["graph", "dp"], &["bfs", "dp"]));
    }

    #[test]
    fn test_predicates_accept_owned_strings() {
        let entry = vec!["dp".to_string(), "graph".to_string()];
        let query = vec!["graph".to_string()];
        assert!(contains_all_tags(&entry, &query));
        assert!(contains_some_tag(&entry, &query));
    }

    #[test]
    fn test_predicates_are_case_sensitive() {
        assert!(!contains_all_tags(&["DP"], &["dp"]));
    }

    fn concept(tags: &[&str]) -> ConceptEntry {
        ConceptEntry {
            title: "Concept".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn problem() -> DsaProblemEntry {
        DsaProblemEntry {
            title: "Course Schedule".to_string(),
            links: vec![],
            data_structures: BTreeSet::from([DataStructure::Graph]),
            techniques: BTreeSet::from([Technique::BreadthFirstSearch, Technique::DepthFirstSearch]),
            level: Difficulty::Medium,
        }
    }

    #[test]
    fn test_problem_tag_names() {
        assert_eq!(problem().tag_names(), vec!["graph", "dfs", "bfs"]);
    }

    #[test]
    fn test_filter_empty_matches_everything() {
        let filter = TagFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&concept(&[])));
        assert!(filter.matches(&problem()));
    }

    #[test]
    fn test_filter_all_and_some() {
        let filter = TagFilter::new(["graph"], ["bfs", "dp"]);
        assert!(filter.matches(&problem()));

        let filter = TagFilter::new(["graph"], ["dp"]);
        assert!(!filter.matches(&problem()));

        let filter = TagFilter::new(["graph", "heap"], EMPTY);
        assert!(!filter.matches(&problem()));
    }

    #[test]
    fn test_filter_strips_hash_prefix() {
        let filter = TagFilter::new(["#os", " memory "], EMPTY);
        assert_eq!(filter.all, vec!["os".to_string(), "memory".to_string()]);
        assert!(filter.matches(&concept(&["os", "memory", "paging"])));
    }
}
