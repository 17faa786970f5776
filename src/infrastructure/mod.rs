//! Infrastructure layer - External I/O, configuration and logging

pub mod config;
pub mod logging;
pub mod repository;

pub use config::Config;
pub use logging::init_logging;
pub use repository::{ContentRepository, FileSystemRepository, SourceDocument};
