use std::{fmt, io, path::PathBuf, result};

use thiserror::Error;

use crate::format::Format;

/// Error types for the transmogrify tool.
///
/// Every variant is terminal for the invocation that produced it: the
/// binary reports the message on stderr and exits non-zero.
#[derive(Error, Debug)]
pub enum TransmogrifyError {
    /// A format identifier or file extension did not name a known format
    #[error("unknown format '{0}' (expected one of: {formats})", formats = Format::joined())]
    UnknownFormat(String),

    /// The command line could not be parsed
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Neither an explicit format nor a recognised extension was available
    #[error("could not determine {role} format for '{path}'; pass --{role}-format")]
    FormatResolution {
        /// Which side of the conversion failed ("input" or "output")
        role: &'static str,
        /// Path that was inspected for an extension
        path: String,
    },

    /// The source document is malformed for its declared format
    #[error("failed to parse {format} input: {details}")]
    Parse {
        /// Format the input was parsed as
        format: Format,
        /// Underlying parser message
        details: String,
    },

    /// The document contains a shape the target format cannot represent
    #[error("failed to serialize as {format}: {details}")]
    Serialize {
        /// Format the document was being written as
        format: Format,
        /// Underlying serializer message
        details: String,
    },

    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    IoError {
        /// Path where I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Standard I/O operation error, used for the process streams
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// `get-key` was asked for a key the document does not contain
    #[error("key '{key}' not found")]
    KeyNotFound {
        /// The key that was looked up
        key: String,
    },

    /// `get-key` was run against a document whose root is not a mapping
    #[error("expected a mapping at the document root, found {found}")]
    NotAMapping {
        /// Type name of the root value that was found
        found: &'static str,
    },
}

/// A specialized `Result` type for transmogrify operations.
pub type Result<T> = result::Result<T, TransmogrifyError>;

impl TransmogrifyError {
    /// Creates a parse error carrying the underlying cause.
    pub fn parse(format: Format, error: impl fmt::Display) -> Self {
        TransmogrifyError::Parse {
            format,
            details: error.to_string(),
        }
    }

    /// Creates a serialization error carrying the underlying cause.
    pub fn serialize(format: Format, error: impl fmt::Display) -> Self {
        TransmogrifyError::Serialize {
            format,
            details: error.to_string(),
        }
    }

    /// Creates an I/O error with file path context.
    pub fn io(error: impl fmt::Display, path: impl Into<PathBuf>) -> Self {
        TransmogrifyError::IoError {
            path: path.into(),
            details: error.to_string(),
        }
    }
}
