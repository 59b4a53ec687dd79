//! Error types for htmlcmp.

use thiserror::Error;

/// Result type alias for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a node tree.
#[derive(Error, Debug)]
pub enum Error {
    /// Markup broke an HTML tree construction rule, reported in strict mode.
    #[error("HTML parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by the validation helpers.
///
/// Variants are checked in declaration order: a parse failure hides a missing
/// node, which hides a text mismatch.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// The input document could not be parsed.
    #[error("parsing: {0}")]
    Parsing(#[source] Error),

    /// No element with the requested tag name exists.
    #[error("findtag: tag {0} not found")]
    TagNotFound(String),

    /// No node equal to the template exists.
    #[error("findnode: node {0} not found.")]
    NodeNotFound(String),

    /// The node was found but its text differs from the expected one.
    #[error("texts differ: got {got}, want {want}")]
    TextsDiffer { got: String, want: String },
}

impl ValidationError {
    /// Returns true for the two lookup failures.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ValidationError::TagNotFound(_) | ValidationError::NodeNotFound(_)
        )
    }
}
