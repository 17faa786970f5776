//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cjournal")]
#[command(about = "Validate and filter code journal content", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Validate every content document against its collection schema
    Validate,

    /// List validated entries of a collection
    List {
        /// Collection to list (concepts, dsa-problems)
        collection: String,

        /// Entries must carry every one of these tags (repeatable, comma separated)
        #[arg(long = "all", value_name = "TAG", value_delimiter = ',')]
        all: Vec<String>,

        /// Entries must carry at least one of these tags (repeatable, comma separated)
        #[arg(long = "some", value_name = "TAG", value_delimiter = ',')]
        some: Vec<String>,

        /// Only problems of this difficulty (0-4 or basic/easy/medium/hard/expert)
        #[arg(short, long)]
        level: Option<String>,
    },

    /// List tags with the number of entries using them
    Tags {
        /// Restrict to one collection (concepts, dsa-problems)
        collection: Option<String>,
    },

    /// Show the difficulty levels
    Levels,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_with_tags() {
        let cli = Cli::parse_from([
            "cjournal",
            "list",
            "dsa-problems",
            "--all",
            "graph,bfs",
            "--all",
            "dp",
            "--some",
            "tree",
            "-l",
            "2",
        ]);
        match cli.command {
            Commands::List {
                collection,
                all,
                some,
                level,
            } => {
                assert_eq!(collection, "dsa-problems");
                assert_eq!(all, vec!["graph", "bfs", "dp"]);
                assert_eq!(some, vec!["tree"]);
                assert_eq!(level.as_deref(), Some("2"));
            }
            other => panic!("Expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["cjournal", "validate", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Validate));
    }

    #[test]
    fn test_clap_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
