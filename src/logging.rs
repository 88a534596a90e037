//! Logging setup for the `kata` binary
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job. Logs go to stderr so a JSON report on stdout stays parseable.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used by `--verbose`
pub const VERBOSE_FILTER: &str = "katas=debug,info";

/// Pick the filter: `RUST_LOG` wins, then `--verbose`, then the configured level.
pub fn build_filter(verbose: bool, config_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = if verbose { VERBOSE_FILTER } else { config_level };
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"))
    })
}

/// Install the global subscriber: compact text, or JSON lines with `json`.
pub fn init_logging(verbose: bool, json: bool, config_level: &str) -> Result<(), TryInitError> {
    let filter = build_filter(verbose, config_level);
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_falls_back() {
        // An unparsable directive must not panic
        let filter = build_filter(false, "katas=[");
        let _ = filter.to_string();
    }

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init_logging(false, false, "warn");
        assert!(init_logging(false, true, "warn").is_err());
    }
}
