//! Error types for the word ladder library.
//!
//! All fallible operations return [`LadderError`] through the crate-wide
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use wordladder::error::{LadderError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LadderError::malformed_input("words must share the same length"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for word ladder operations.
#[derive(Error, Debug)]
pub enum LadderError {
    /// The end word cannot be reached from the start word.
    #[error("There is no possible transformation sequence between {start} and {end}")]
    NoPath { start: String, end: String },

    /// Input violating the dictionary preconditions (length, duplicates, empty words).
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Invalid argument or configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A harness correctness check did not hold
    #[error("Check failed: {0}")]
    CheckFailed(String),

    /// I/O errors (fixture and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LadderError.
pub type Result<T> = std::result::Result<T, LadderError>;

impl LadderError {
    /// Create a new no-path error for the given endpoints.
    pub fn no_path<S: Into<String>, E: Into<String>>(start: S, end: E) -> Self {
        LadderError::NoPath {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Create a new malformed input error.
    pub fn malformed_input<S: Into<String>>(msg: S) -> Self {
        LadderError::MalformedInput(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LadderError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LadderError::InvalidArgument(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new check failure.
    pub fn check_failed<S: Into<String>>(msg: S) -> Self {
        LadderError::CheckFailed(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LadderError::Other(msg.into())
    }

    /// Whether this error reports an unreachable end word.
    pub fn is_no_path(&self) -> bool {
        matches!(self, LadderError::NoPath { .. })
    }
}
