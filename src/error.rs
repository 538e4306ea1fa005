//! Error types for figmap library.

use std::io;
use thiserror::Error;

/// Result type alias for figmap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the conversion layer.
///
/// The converters themselves never fail; missing source data degrades to
/// documented defaults. Errors come only from loading documents, looking up
/// nodes and serializing output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a valid design document.
    #[error("Invalid document: {0}")]
    Json(#[from] serde_json::Error),

    /// Error while serializing converted output.
    #[error("Rendering error: {0}")]
    Render(String),

    /// No page with the requested id.
    #[error("Page not found: {0}")]
    PageNotFound(String),

    /// No node with the requested id.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// The node exists but cannot be represented in the target schema.
    #[error("Node {0} has a kind that cannot be converted")]
    Unconvertible(String),

    /// The node is hidden, directly or through an ancestor, and hidden
    /// shapes are excluded.
    #[error("Node {0} is hidden")]
    Hidden(String),

    /// Invalid depth specification.
    #[error("Invalid depth: {0}")]
    InvalidDepth(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NodeNotFound("1:23".to_string());
        assert_eq!(err.to_string(), "Node not found: 1:23");

        let err = Error::Unconvertible("4:5".to_string());
        assert_eq!(err.to_string(), "Node 4:5 has a kind that cannot be converted");

        let err = Error::Hidden("6:7".to_string());
        assert_eq!(err.to_string(), "Node 6:7 is hidden");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("Invalid document:"));
    }
}
