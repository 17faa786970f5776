//! cjournal - Content schema and tag filtering for a code journal
//!
//! Validates markdown content collections (concept notes and DSA problems)
//! against their front-matter schemas and filters validated entries by tags.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::JournalError;
