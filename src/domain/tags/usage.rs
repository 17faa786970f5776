//! Tag usage counting across entries

use crate::domain::tags::filter::Tagged;
use std::collections::BTreeMap;

/// Count how many items carry each tag, sorted by tag name
pub fn count_tags<'a, T, I>(items: I) -> BTreeMap<String, usize>
where
    T: Tagged + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut counts = BTreeMap::new();
    for item in items {
        let mut names = item.tag_names();
        names.sort_unstable();
        names.dedup();
        for name in names {
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::ConceptEntry;

    fn concept(tags: &[&str]) -> ConceptEntry {
        ConceptEntry {
            title: "c".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_count_tags_sorted_and_counted() {
        let items = vec![concept(&["os", "memory"]), concept(&["os"]), concept(&[])];
        let counts = count_tags(&items);
        assert_eq!(
            counts.into_iter().collect::<Vec<_>>(),
            vec![("memory".to_string(), 1), ("os".to_string(), 2)]
        );
    }

    #[test]
    fn test_count_tags_empty() {
        let items: Vec<ConceptEntry> = vec![];
        assert!(count_tags(&items).is_empty());
    }
}
