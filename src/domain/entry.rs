//! Content collections and validated entries

use crate::domain::difficulty::Difficulty;
use crate::domain::vocabulary::{DataStructure, Technique};
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;
use url::Url;

/// The two typed content collections of a journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Collection {
    Concepts,
    DsaProblems,
}

impl Collection {
    pub const ALL: [Collection; 2] = [Collection::Concepts, Collection::DsaProblems];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Concepts => "concepts",
            Collection::DsaProblems => "dsa-problems",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "concepts" | "concept" => Ok(Collection::Concepts),
            "dsa-problems" | "dsaproblems" | "problems" | "dsa" => Ok(Collection::DsaProblems),
            _ => Err(s.to_string()),
        }
    }
}

/// A concept note: a title and free-form tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConceptEntry {
    pub title: String,
    pub tags: BTreeSet<String>,
}

/// A DSA problem record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DsaProblemEntry {
    pub title: String,
    /// Problem statement / solution links, in document order
    pub links: Vec<Url>,
    pub data_structures: BTreeSet<DataStructure>,
    pub techniques: BTreeSet<Technique>,
    pub level: Difficulty,
}

/// A validated entry together with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Document<T> {
    pub collection: Collection,
    pub slug: String,
    pub source_file: PathBuf,
    /// Markdown body with the front matter removed
    pub body: String,
    pub entry: T,
}

fn slug_separator_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[\s_]+").unwrap())
}

fn slug_strip_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^\p{L}\p{N}\-]").unwrap())
}

/// Build a URL slug from a document path relative to its collection directory.
///
/// Each path segment is lowercased, whitespace and underscores become `-`,
/// and any other punctuation is dropped. The extension is removed.
///
/// ```
/// use cjournal::domain::entry::slug_from_relative_path;
/// use std::path::Path;
///
/// assert_eq!(slug_from_relative_path(Path::new("Graphs/Two Sum.md")), "graphs/two-sum");
/// ```
pub fn slug_from_relative_path(rel: &Path) -> String {
    let without_ext = rel.with_extension("");
    without_ext
        .iter()
        .filter_map(|part| part.to_str())
        .map(|part| {
            let lowered = part.to_lowercase();
            let dashed = slug_separator_regex().replace_all(lowered.trim(), "-");
            slug_strip_regex().replace_all(&dashed, "").into_owned()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}
