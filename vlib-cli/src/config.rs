// vlib-cli/src/config.rs
//
// Defines default configuration constants for the `vlib-cli` application.

/// Overall deadline for a single command invocation.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Log filter used when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter used with --verbose.
pub const VERBOSE_LOG_FILTER: &str = "debug";
