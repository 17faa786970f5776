//! Domain layer - Content schemas, vocabularies and tag filtering

pub mod difficulty;
pub mod entry;
pub mod front_matter;
pub mod schema;
pub mod tags;
pub mod vocabulary;

pub use difficulty::Difficulty;
pub use entry::{Collection, ConceptEntry, Document, DsaProblemEntry};
pub use schema::{DocumentError, FieldError, Schema, ValidationReason, ValidationReport};
pub use tags::{contains_all_tags, contains_some_tag, TagFilter, Tagged};
pub use vocabulary::{DataStructure, Technique};
