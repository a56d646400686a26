//! Error types for Hobby Form
//!
//! Centralized error handling using snafu for ergonomic error definitions.
//! Validation failures are not errors: they live in `ValidationResult`.

use snafu::Snafu;

/// Main error type for the application
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (file operations, etc.)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// Hobby index does not exist in the list
    #[snafu(display("Hobby index {index} out of range (len {len})"))]
    HobbyIndexOutOfRange { index: usize, len: usize },

    /// Hobby entry is pinned by the first-entry policy
    #[snafu(display("Hobby at index {index} cannot be removed"))]
    HobbyPinned { index: usize },

    /// The hobby list must keep at least one entry
    #[snafu(display("The last remaining hobby cannot be removed"))]
    LastHobby,

    /// Submission collaborator rejected the form
    #[snafu(display("Submission failed: {message}"))]
    Submission { message: String },

    /// Timeout error
    #[snafu(display("Timeout: {message}"))]
    Timeout { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
