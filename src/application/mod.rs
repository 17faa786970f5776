//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_entries;
pub mod list_tags;
pub mod manage_config;
pub mod validate;

pub use list_entries::ListEntriesService;
pub use list_tags::ListTagsService;
pub use manage_config::ConfigService;
pub use validate::{ContentIndex, ValidateService};
