use cjournal::application::{
    init::init, ConfigService, ListEntriesService, ListTagsService, ValidateService,
};
use cjournal::cli::{self, Cli, Commands};
use cjournal::domain::{Collection, Difficulty, TagFilter};
use cjournal::error::JournalError;
use cjournal::infrastructure::{init_logging, Config, ContentRepository, FileSystemRepository};
use clap::Parser;
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Set up logging from the journal config when one can be found
fn setup_logging(verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        FileSystemRepository::discover()
            .and_then(|repo| repo.load_config())
            .map(|config| config.get_log_level())
            .unwrap_or_else(|_| Config::new().get_log_level())
    };
    init_logging(&level);
}

fn parse_collection(name: &str) -> Result<Collection, JournalError> {
    Collection::from_str(name).map_err(JournalError::UnknownCollection)
}

fn run(cli: Cli) -> Result<(), JournalError> {
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Init { path } => {
            let config = init(&path)?;
            println!("Initialized cjournal at {}", path.display());
            println!("Content directory: {}", config.content_dir);
            Ok(())
        }
        Commands::Validate => {
            let repo = FileSystemRepository::discover()?;
            let index = ValidateService::new(repo).execute()?;
            eprint!("{}", cli::format_unchecked_dirs(&index));
            println!("{}", cli::format_validation_summary(&index));
            Ok(())
        }
        Commands::List {
            collection,
            all,
            some,
            level,
        } => {
            let collection = parse_collection(&collection)?;
            let level = level
                .map(|l| Difficulty::from_str(&l).map_err(JournalError::Config))
                .transpose()?;
            let filter = TagFilter::new(all, some);

            let repo = FileSystemRepository::discover()?;
            let service = ListEntriesService::new(repo);

            match collection {
                Collection::Concepts => {
                    if level.is_some() {
                        return Err(JournalError::Config(
                            "--level only applies to dsa-problems".to_string(),
                        ));
                    }
                    let concepts = service.concepts(&filter)?;
                    println!("{}", cli::format_concept_list(&concepts).trim_end());
                }
                Collection::DsaProblems => {
                    let problems = service.problems(&filter, level)?;
                    println!("{}", cli::format_problem_list(&problems).trim_end());
                }
            }
            Ok(())
        }
        Commands::Tags { collection } => {
            let collection = collection.as_deref().map(parse_collection).transpose()?;
            let repo = FileSystemRepository::discover()?;
            let counts = ListTagsService::new(repo).execute(collection)?;
            println!("{}", cli::format_tag_counts(&counts).trim_end());
            Ok(())
        }
        Commands::Levels => {
            print!("{}", cli::format_levels());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("content_dir = {}", config.content_dir);
                println!("concepts_dir = {}", config.concepts_dir);
                println!("dsa_problems_dir = {}", config.dsa_problems_dir);
                println!("log_level = {}", config.log_level);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: cjournal config [--list | <key> [<value>]]");
                println!("Valid keys: content_dir, concepts_dir, dsa_problems_dir, log_level, created");
                Ok(())
            }
        }
    }
}
