// ============================================================================
// vlib-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reports vlib-core's errors unchanged. This module adds a result
// alias, a context extension for wrapping lower-level failures, and the
// hint printed under an error when the fix is obvious.
//
// AI-ASSISTANT-INFO: CLI error handling utilities

// ---- Internal crate imports ----
use vlib_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Extension trait for adding context to errors in the CLI.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| {
            let core_error: CoreError = e.into();
            CoreError::OperationFailed(format!("{}: {}", context, core_error))
        })
    }
}

impl<T> CliErrorContext<T> for Option<T> {
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.ok_or_else(|| CoreError::OperationFailed(context.to_string()))
    }
}

/// A short hint for errors the user can fix from the command line.
pub fn suggestion_for(error: &CoreError) -> Option<&'static str> {
    match error {
        CoreError::AmbiguousMatch { count: 0, .. } => {
            Some("check the path; names are matched exactly and case-sensitively")
        }
        CoreError::AmbiguousMatch { .. } => {
            Some("the name is not unique; use a more specific path")
        }
        CoreError::WrongKind { .. } => {
            Some("SRC must be a /library/item path and DST a /library path")
        }
        CoreError::Config(_) | CoreError::Session(_) => {
            Some("set --url with --username/--password or --session (or the VLIB_* variables)")
        }
        CoreError::DeadlineExceeded => Some("raise --timeout"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_wraps_core_error() {
        let result: Result<(), CoreError> = Err(CoreError::Cancelled);
        let err = result.cli_context("resolving /content-A").unwrap_err();
        assert_eq!(err.to_string(), "Operation failed: resolving /content-A: operation cancelled");
    }

    #[test]
    fn context_on_none() {
        let err = None::<u8>.cli_context("missing URL").unwrap_err();
        assert!(matches!(err, CoreError::OperationFailed(ref m) if m == "missing URL"));
    }

    #[test]
    fn suggestions_distinguish_missing_and_ambiguous() {
        let missing = CoreError::AmbiguousMatch {
            kind: "library".to_string(),
            path: "/x".to_string(),
            count: 0,
        };
        let ambiguous = CoreError::AmbiguousMatch {
            kind: "library".to_string(),
            path: "/x".to_string(),
            count: 2,
        };
        assert_ne!(suggestion_for(&missing), suggestion_for(&ambiguous));
        assert_eq!(suggestion_for(&CoreError::Cancelled), None);
    }
}
