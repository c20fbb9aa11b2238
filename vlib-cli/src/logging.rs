// ============================================================================
// vlib-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger initialisation for the CLI
//
// The CLI uses the standard `log` crate with `env_logger` as the backend.
// Logs always go to stderr; stdout is reserved for command output so that
// `library.cp` prints nothing but the new item id.
//
// USAGE:
// - RUST_LOG unset: warnings and errors only
// - --verbose: debug output from vlib-core (paths resolved, ids chosen)
// - RUST_LOG=trace: raw REST responses as well
//
// AI-ASSISTANT-INFO: Logging initialisation for the CLI

use crate::config::{DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER};

use env_logger::{Env, Target};

/// Returns the filter to use when RUST_LOG is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Initialises env_logger on stderr.
///
/// An explicit RUST_LOG always wins over `verbose`. Calling this twice is
/// harmless; the second call is ignored.
pub fn init(verbose: bool) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init();
    log::debug!("Logger initialized (verbose: {})", verbose);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_default_filter() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(default_filter(true), "debug");
    }
}
