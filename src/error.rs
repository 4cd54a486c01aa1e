//! Error types for apogee-csv
//!
//! Every stage of the pipeline reports failures through [`Error`]. Nothing is
//! retried or recovered: an error ends the run and is returned from `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for apogee-csv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for apogee-csv
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure talking to the remote server
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("HTTP error fetching {url}: {status}")]
    HttpStatus {
        /// Status code returned by the server
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The URL could not be parsed or has no file name to save under
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL
        url: String,
        /// Why the URL was rejected
        reason: String,
    },

    /// A compressed payload could not be decompressed
    #[error("failed to decompress {name}: {source}")]
    Decompress {
        /// File name of the compressed resource
        name: String,
        /// Underlying decoder error
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// cfitsio could not open or read the FITS file
    #[error("FITS error in {path}: {source}")]
    Fits {
        /// File being read
        path: PathBuf,
        /// Error reported by the FITS library
        #[source]
        source: fitsio::errors::Error,
    },

    /// The selected HDU holds an image rather than a table
    #[error("HDU {hdu} of {path} is not a table")]
    NotATable {
        /// File being read
        path: PathBuf,
        /// Zero-based HDU index
        hdu: usize,
    },

    /// A byte-string value is not valid UTF-8
    #[error("column '{column}' row {row} is not valid UTF-8: {source}")]
    Decode {
        /// Column holding the value
        column: String,
        /// Zero-based row index
        row: usize,
        /// Decoder error
        #[source]
        source: std::str::Utf8Error,
    },

    /// A column with array-valued cells cannot be written as a single CSV field
    #[error("column '{0}' is not scalar and cannot be exported")]
    NonScalarColumn(String),

    /// A column's length disagrees with the table's row count
    #[error("column '{column}' has {actual} rows, table has {expected}")]
    ColumnLength {
        /// Column being added
        column: String,
        /// Row count of the table
        expected: usize,
        /// Row count of the column
        actual: usize,
    },

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
