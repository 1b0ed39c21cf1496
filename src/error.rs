//! Error types for csv-sieve.
//!
//! Every variant's `Display` text is the message shown to the user, so the
//! viewer and the CLI can print errors as-is.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the input collaborator (reading a file into a [`Grid`]).
///
/// [`Grid`]: crate::data::model::Grid
#[derive(Error, Debug)]
pub enum LoadError {
    /// The text was empty or whitespace-only; nothing was decoded.
    #[error("CSV file is empty")]
    Empty,

    /// Decoding produced no rows or a header row without fields.
    #[error("Failed to parse CSV file")]
    Parse,

    /// The bytes could not be read or are not valid UTF-8.
    #[error("Failed to read CSV file")]
    Read {
        path: PathBuf,
        #[source]
        source: ReadSource,
    },
}

/// Underlying cause of a [`LoadError::Read`].
#[derive(Error, Debug)]
pub enum ReadSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// The requested column is outside `[0, header.len())`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Column index {index} exceeds available columns ({count})")]
pub struct ColumnIndexError {
    pub index: usize,
    pub count: usize,
}

/// Operator text that names none of the seven filter operators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator: {0}")]
pub struct ParseOperatorError(pub String);

/// The quoting encoder could not produce its output.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("CSV writer error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer flush failed: {0}")]
    Flush(String),

    #[error("encoded CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Writing the results file failed.
#[derive(Error, Debug)]
#[error("Failed to write {}: {source}", .path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
