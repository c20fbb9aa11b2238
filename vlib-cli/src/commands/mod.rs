//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `library.cp` command.
/// This command copies a library item into another library.
pub mod copy;
