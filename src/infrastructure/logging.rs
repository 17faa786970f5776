//! Log subscriber setup

use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to stderr.
///
/// `level` comes from config or `--verbose`; RUST_LOG still overrides it.
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(level: &str) {
    let default = format!("{level},cjournal={level}");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging("debug");
        init_logging("warn");
        tracing::debug!("logging initialised");
    }
}
