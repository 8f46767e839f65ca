//! Error types for the ferrel application.
//!
//! This module defines a comprehensive error enum that covers all possible
//! error conditions in the application.

use thiserror::Error;

/// The main error type for ferrel operations.
#[derive(Error, Debug)]
pub enum FerrelError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Spreadsheet (xlsx) read errors
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    /// Requested worksheet does not exist in the workbook
    #[error("Worksheet not found: {name}")]
    SheetNotFound { name: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// A data row carried a token that could not be parsed as a number
    #[error("Non-numeric token {token:?} in data row for variable {variable:?}")]
    NumericParse { token: String, variable: String },

    /// CSV output errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with FerrelError
pub type Result<T> = std::result::Result<T, FerrelError>;
