//! Output formatting utilities

use crate::application::ContentIndex;
use crate::domain::{ConceptEntry, Difficulty, Document, DsaProblemEntry, Tagged};
use std::collections::BTreeMap;

/// Format concept notes for display
pub fn format_concept_list(concepts: &[Document<ConceptEntry>]) -> String {
    if concepts.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for doc in concepts {
        output.push_str(&format!(
            "{}  {}  [{}]\n",
            doc.slug,
            doc.entry.title,
            doc.tag_names().join(", ")
        ));
    }
    output
}

/// Format DSA problems for display, prefixed with their difficulty
pub fn format_problem_list(problems: &[Document<DsaProblemEntry>]) -> String {
    if problems.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for doc in problems {
        let level = doc.entry.level;
        output.push_str(&format!(
            "{} {:<6}  {}  {}  [{}]\n",
            level.icon(),
            level.label(),
            doc.slug,
            doc.entry.title,
            doc.tag_names().join(", ")
        ));
    }
    output
}

/// Format tag usage counts for display.
pub fn format_tag_counts(counts: &BTreeMap<String, usize>) -> String {
    if counts.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for (tag, count) in counts {
        output.push_str(&format!("#{} ({})\n", tag, count));
    }

    output
}

/// Format the difficulty table
pub fn format_levels() -> String {
    let mut output = String::new();
    for level in Difficulty::ALL {
        output.push_str(&format!(
            "{}  {}  {:<6}  {}\n",
            level.level(),
            level.icon(),
            level.label(),
            level.color()
        ));
    }
    output
}

/// Warnings for content directories that validation skipped
pub fn format_unchecked_dirs(index: &ContentIndex) -> String {
    let mut output = String::new();
    for dir in &index.unchecked_dirs {
        output.push_str(&format!(
            "warning: {} is not a configured collection; its documents were not validated\n",
            dir.display()
        ));
    }
    output
}

pub fn format_validation_summary(index: &ContentIndex) -> String {
    format!(
        "OK: {} concepts, {} problems",
        index.concepts.len(),
        index.problems.len()
    )
}
