//! Front matter schemas for the content collections
//!
//! Each collection declares the shape its documents' front matter must have.
//! Validation walks the raw mapping field by field and collects every
//! violation instead of stopping at the first one, so a failing document
//! reports all of its problems at once. Nothing is coerced or defaulted.
//!
//! # Examples
//!
//! ```
//! use cjournal::domain::schema::validate_document;
//! use cjournal::domain::DsaProblemEntry;
//! use std::path::Path;
//!
//! let doc = "---\ntitle: Two Sum\nlinks: [\"https://leetcode.com/problems/two-sum/\"]\nds: [array]\ntechniques: [hashing]\nlevel: 1\n---\n";
//! let parsed = validate_document::<DsaProblemEntry>(Path::new("two-sum.md"), Path::new("two-sum.md"), doc).unwrap();
//! assert_eq!(parsed.entry.title, "Two Sum");
//! ```

use crate::domain::difficulty::Difficulty;
use crate::domain::entry::{slug_from_relative_path, Collection, ConceptEntry, Document, DsaProblemEntry};
use crate::domain::front_matter::split_front_matter;
use crate::domain::vocabulary::{DataStructure, Technique};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("required field is missing")]
    Missing,

    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("malformed URL '{value}': {message}")]
    MalformedUrl { value: String, message: String },

    #[error("'{value}' is not one of: {}", .allowed.join(", "))]
    UnknownVariant {
        value: String,
        allowed: Vec<&'static str>,
    },

    #[error("{value} is out of range {min}..={max}")]
    OutOfRange { value: String, min: i64, max: i64 },

    #[error("conflicts with `{with}`; use only one")]
    Conflict { with: &'static str },
}

/// A validation failure tied to a field path such as `links[1]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub reason: ValidationReason,
}

impl FieldError {
    pub fn new(field: impl Into<String>, reason: ValidationReason) -> Self {
        FieldError {
            field: field.into(),
            reason,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Why a whole document was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("missing front matter block")]
    MissingFrontMatter,

    #[error("{0}")]
    FrontMatter(String),

    #[error("{} invalid field(s)", .0.len())]
    Fields(Vec<FieldError>),
}

/// One rejected document in a validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    pub collection: Collection,
    pub source_file: PathBuf,
    pub error: DocumentError,
}

/// All documents rejected by a validation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub failures: Vec<DocumentFailure>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn push(&mut self, failure: DocumentFailure) {
        self.failures.push(failure);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for failure in &self.failures {
            writeln!(
                f,
                "[{}] {}",
                failure.collection,
                failure.source_file.display()
            )?;
            match &failure.error {
                DocumentError::Fields(fields) => {
                    for field in fields {
                        writeln!(f, "  - {}", field)?;
                    }
                }
                other => writeln!(f, "  - {}", other)?,
            }
        }
        Ok(())
    }
}

/// A collection entry type that can be built from validated front matter
pub trait Schema: Sized {
    const COLLECTION: Collection;

    /// Validate a front matter mapping, reporting every offending field
    fn from_front_matter(fields: &Mapping) -> Result<Self, Vec<FieldError>>;
}

impl Schema for ConceptEntry {
    const COLLECTION: Collection = Collection::Concepts;

    fn from_front_matter(fields: &Mapping) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = require_string(fields, "title", &mut errors);
        let tags = require_array(fields, "tags", &mut errors).map(|items| {
            collect_items(items, "tags", &mut errors, |value| Ok(value.to_string()))
                .into_iter()
                .collect::<BTreeSet<String>>()
        });

        match (title, tags) {
            (Some(title), Some(tags)) if errors.is_empty() => Ok(ConceptEntry { title, tags }),
            _ => Err(errors),
        }
    }
}

impl Schema for DsaProblemEntry {
    const COLLECTION: Collection = Collection::DsaProblems;

    fn from_front_matter(fields: &Mapping) -> Result<Self, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = require_string(fields, "title", &mut errors);

        let links = require_array(fields, "links", &mut errors).map(|items| {
            collect_items(items, "links", &mut errors, |value| {
                Url::parse(value).map_err(|e| ValidationReason::MalformedUrl {
                    value: value.to_string(),
                    message: e.to_string(),
                })
            })
        });

        // `dataStructures` is accepted as a long-form alias of `ds`
        let ds_key = match (fields.contains_key("ds"), fields.contains_key("dataStructures")) {
            (true, true) => {
                errors.push(FieldError::new(
                    "dataStructures",
                    ValidationReason::Conflict { with: "ds" },
                ));
                "ds"
            }
            (false, true) => "dataStructures",
            _ => "ds",
        };
        let data_structures = require_array(fields, ds_key, &mut errors).map(|items| {
            collect_items(items, ds_key, &mut errors, |value| {
                parse_variant::<DataStructure>(value, DataStructure::vocabulary())
            })
            .into_iter()
            .collect::<BTreeSet<_>>()
        });

        let techniques = require_array(fields, "techniques", &mut errors).map(|items| {
            collect_items(items, "techniques", &mut errors, |value| {
                parse_variant::<Technique>(value, Technique::vocabulary())
            })
            .into_iter()
            .collect::<BTreeSet<_>>()
        });

        let level = require_level(fields, "level", &mut errors);

        match (title, links, data_structures, techniques, level) {
            (Some(title), Some(links), Some(data_structures), Some(techniques), Some(level))
                if errors.is_empty() =>
            {
                Ok(DsaProblemEntry {
                    title,
                    links,
                    data_structures,
                    techniques,
                    level,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Validate a raw markdown document against the schema of `T`.
///
/// `source_file` is kept for reporting; `relative_path` (relative to the
/// collection directory) determines the slug.
pub fn validate_document<T: Schema>(
    source_file: &Path,
    relative_path: &Path,
    content: &str,
) -> Result<Document<T>, DocumentError> {
    let (front_matter, body) =
        split_front_matter(content).ok_or(DocumentError::MissingFrontMatter)?;
    let fields = front_matter.parse().map_err(DocumentError::FrontMatter)?;

    for key in fields.keys() {
        if let Some(name) = key.as_str() {
            if !is_known_field(T::COLLECTION, name) {
                tracing::debug!(
                    file = %source_file.display(),
                    field = name,
                    "ignoring unknown front matter field"
                );
            }
        }
    }

    let entry = T::from_front_matter(&fields).map_err(DocumentError::Fields)?;

    Ok(Document {
        collection: T::COLLECTION,
        slug: slug_from_relative_path(relative_path),
        source_file: source_file.to_path_buf(),
        body: body.to_string(),
        entry,
    })
}

fn is_known_field(collection: Collection, name: &str) -> bool {
    match collection {
        Collection::Concepts => matches!(name, "title" | "tags"),
        Collection::DsaProblems => matches!(
            name,
            "title" | "links" | "ds" | "dataStructures" | "techniques" | "level"
        ),
    }
}

/// Human readable kind of a YAML value, used in type mismatch reports
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) => "object",
        Value::Tagged(_) => "tagged value",
    }
}

fn require<'a>(fields: &'a Mapping, key: &str, errors: &mut Vec<FieldError>) -> Option<&'a Value> {
    let value = fields.get(key);
    if value.is_none() {
        errors.push(FieldError::new(key, ValidationReason::Missing));
    }
    value
}

fn require_string(fields: &Mapping, key: &str, errors: &mut Vec<FieldError>) -> Option<String> {
    match require(fields, key, errors)? {
        Value::String(s) => Some(s.clone()),
        other => {
            errors.push(FieldError::new(
                key,
                ValidationReason::TypeMismatch {
                    expected: "string",
                    found: kind_of(other),
                },
            ));
            None
        }
    }
}

fn require_array<'a>(
    fields: &'a Mapping,
    key: &str,
    errors: &mut Vec<FieldError>,
) -> Option<&'a [Value]> {
    match require(fields, key, errors)? {
        Value::Sequence(items) => Some(items.as_slice()),
        other => {
            errors.push(FieldError::new(
                key,
                ValidationReason::TypeMismatch {
                    expected: "array",
                    found: kind_of(other),
                },
            ));
            None
        }
    }
}

/// Validate each string item of an array field, recording failures by index
fn collect_items<T>(
    items: &[Value],
    key: &str,
    errors: &mut Vec<FieldError>,
    mut parse: impl FnMut(&str) -> Result<T, ValidationReason>,
) -> Vec<T> {
    let mut parsed = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let field = format!("{}[{}]", key, index);
        match item {
            Value::String(value) => match parse(value) {
                Ok(v) => parsed.push(v),
                Err(reason) => errors.push(FieldError::new(field, reason)),
            },
            other => errors.push(FieldError::new(
                field,
                ValidationReason::TypeMismatch {
                    expected: "string",
                    found: kind_of(other),
                },
            )),
        }
    }
    parsed
}

fn parse_variant<T: FromStr>(value: &str, allowed: Vec<&'static str>) -> Result<T, ValidationReason> {
    value
        .parse::<T>()
        .map_err(|_| ValidationReason::UnknownVariant {
            value: value.to_string(),
            allowed,
        })
}

fn require_level(fields: &Mapping, key: &str, errors: &mut Vec<FieldError>) -> Option<Difficulty> {
    let value = require(fields, key, errors)?;

    let Value::Number(number) = value else {
        errors.push(FieldError::new(
            key,
            ValidationReason::TypeMismatch {
                expected: "integer",
                found: kind_of(value),
            },
        ));
        return None;
    };

    let level = match number.as_i64() {
        Some(level) => Some(level),
        // Integral floats such as `2.0` still count as integers
        None => number
            .as_f64()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64),
    };

    let Some(level) = level else {
        let is_integral = number.is_u64()
            || number.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0);
        let reason = if is_integral {
            ValidationReason::OutOfRange {
                value: number.to_string(),
                min: Difficulty::MIN_LEVEL,
                max: Difficulty::MAX_LEVEL,
            }
        } else {
            ValidationReason::TypeMismatch {
                expected: "integer",
                found: "number",
            }
        };
        errors.push(FieldError::new(key, reason));
        return None;
    };

    let difficulty = Difficulty::from_level(level);
    if difficulty.is_none() {
        errors.push(FieldError::new(
            key,
            ValidationReason::OutOfRange {
                value: level.to_string(),
                min: Difficulty::MIN_LEVEL,
                max: Difficulty::MAX_LEVEL,
            },
        ));
    }
    difficulty
}
