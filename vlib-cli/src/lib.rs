// vlib-cli/src/lib.rs
//
// Library portion of the vlib CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, ClientArgs, Commands, CopyArgs};
pub use commands::copy::run_copy;
