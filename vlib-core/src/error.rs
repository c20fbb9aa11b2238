// ============================================================================
// vlib-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error types for the vlib core library
//
// All fallible operations in vlib-core return `CoreResult<T>`. The variants
// fall into two groups: resolution failures raised by the copy orchestration
// (`AmbiguousMatch`, `WrongKind`) and upstream failures coming from the
// finder, the REST session or the transport.
//
// AI-ASSISTANT-INFO: Core error taxonomy

// ---- External crate imports ----
use thiserror::Error;

/// Errors produced by vlib-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A path resolved to zero or several objects where exactly one was required.
    #[error("path \"{path}\" resolves to {count} {kind} objects, expected 1")]
    AmbiguousMatch {
        /// Label of the kind that was expected (e.g. "library-item")
        kind: String,
        /// The path as supplied by the caller
        path: String,
        /// Number of objects the path resolved to
        count: usize,
    },

    /// A path resolved to exactly one object of the wrong kind.
    #[error("\"{path}\" is a {actual}")]
    WrongKind { path: String, actual: String },

    /// The finder found nothing for a path.
    #[error("no match for \"{path}\"")]
    NoMatch { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("operation cancelled")]
    Cancelled,

    #[error("operation deadline exceeded")]
    DeadlineExceeded,

    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for vlib-core operations.
pub type CoreResult<T> = std::result::Result<T, CoreError>;
