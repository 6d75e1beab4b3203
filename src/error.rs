//! Error types for the overlap engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that stops ingestion or configuration loading.

use std::fmt;

use thiserror::Error;

/// One of the two date columns of an assignment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// The `DateFrom` column.
    DateFrom,
    /// The `DateTo` column.
    DateTo,
}

impl DateField {
    /// Returns the column name as it appears in the header row.
    pub fn column(&self) -> &'static str {
        match self {
            DateField::DateFrom => "DateFrom",
            DateField::DateTo => "DateTo",
        }
    }
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// A row-level validation failure.
///
/// Row numbers count the header as row 1, so the first data row is row 2.
///
/// # Example
///
/// ```
/// use overlap_engine::error::{DateField, RowError};
///
/// let error = RowError::MissingDate {
///     row: 2,
///     field: DateField::DateTo,
/// };
/// assert_eq!(error.to_string(), "DateTo is required at row 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// `EmpID` or `ProjectID` was missing or not an integer.
    #[error("Invalid EmpID or ProjectID at row {row}")]
    InvalidIdentifier {
        /// The 1-based row number.
        row: usize,
    },

    /// A date column was missing or blank.
    #[error("{field} is required at row {row}")]
    MissingDate {
        /// The 1-based row number.
        row: usize,
        /// The blank column.
        field: DateField,
    },

    /// A date column held text that no supported format accepts.
    #[error("Invalid {field} at row {row}: \"{text}\"")]
    InvalidDate {
        /// The 1-based row number.
        row: usize,
        /// The offending column.
        field: DateField,
        /// The raw cell text.
        text: String,
    },
}

impl RowError {
    /// Returns the row that failed.
    pub fn row(&self) -> usize {
        match self {
            RowError::InvalidIdentifier { row }
            | RowError::MissingDate { row, .. }
            | RowError::InvalidDate { row, .. } => *row,
        }
    }
}

/// The main error type for the overlap engine.
///
/// # Example
///
/// ```
/// use overlap_engine::error::EngineError;
///
/// let error = EngineError::MissingHeaders {
///     names: vec!["DateTo".to_string()],
/// };
/// assert_eq!(error.to_string(), "Missing required header(s): DateTo");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No supported date format accepted the text.
    #[error("Unsupported date format: {text}")]
    UnsupportedFormat {
        /// The trimmed input text.
        text: String,
    },

    /// One or more required columns are absent from the header row.
    #[error("Missing required header(s): {}", .names.join(", "))]
    MissingHeaders {
        /// The absent column names, in canonical order.
        names: Vec<String>,
    },

    /// A data row failed validation.
    #[error(transparent)]
    Row(#[from] RowError),

    /// The uploaded file is not a CSV file.
    #[error("File must be a CSV.")]
    UnsupportedFileType {
        /// The declared file name.
        file_name: String,
        /// The declared media type.
        media_type: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns the row number for row-level failures.
    pub fn row_number(&self) -> Option<usize> {
        match self {
            EngineError::Row(err) => Some(err.row()),
            _ => None,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
