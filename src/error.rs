//! Error Types Module
//!
//! Structured error type shared by the whole crate. `thiserror` supplies
//! the automatic conversions and message formatting.

use thiserror::Error;

/// Error type used throughout the vendorboard crate.
///
/// Covers reading the delimited input, locating and validating the header
/// row, strict-mode value coercion, configuration validation, and report
/// rendering.
///
/// # Example
///
/// ```rust,no_run
/// use vendorboard::ReportError;
/// use std::fs::File;
///
/// fn open_input(path: &str) -> Result<(), ReportError> {
///     let _file = File::open(path)?; // io::Error converts automatically
///     Ok(())
/// }
/// ```
#[derive(Error, Debug)]
pub enum ReportError {
    /// I/O failure while reading the input table or writing the report.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited-text reader rejected the input.
    #[error("Failed to read input table: {0}")]
    Csv(#[from] csv::Error),

    /// No row carried the header sentinels. The header anchors the column
    /// layout for every subsequent row, so extraction cannot start.
    #[error("Header row not found: expected sentinels '{first}' and '{second}' in the first two columns")]
    HeaderNotFound {
        /// Sentinel expected in the first column.
        first: String,
        /// Sentinel expected in the second column.
        second: String,
    },

    /// The header row is narrower than the declared layout requires.
    ///
    /// Raised instead of silently truncating vendor columns when the
    /// declared prefix plus roster does not fit the actual header.
    #[error("Row layout mismatch: header has {found} columns, layout requires {expected}")]
    LayoutMismatch {
        /// Columns required by the declared layout (prefix + roster).
        expected: usize,
        /// Columns actually present in the header row.
        found: usize,
    },

    /// A numeric cell failed to parse while strict coercion was enabled.
    #[error("Unparsable numeric value '{cell}' at row {row}, column {column}")]
    Value {
        /// Zero-based row index in the input table.
        row: usize,
        /// Zero-based column index in the input table.
        column: usize,
        /// The offending cell text.
        cell: String,
    },

    /// Builder or catalog validation failed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A renderer failed to serialize the extracted model.
    #[error("Render error: {0}")]
    Render(String),
}
