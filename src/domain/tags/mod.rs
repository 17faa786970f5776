//! Tag system

pub mod filter;
pub mod usage;

// Re-export main types
pub use filter::{contains_all_tags, contains_some_tag, TagFilter, Tagged};
pub use usage::count_tags;
