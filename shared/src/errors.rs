//! Contract error types for the roster dashboard core
//!
//! All variants are recoverable, user-facing outcomes. The presentation
//! shell maps each one to its own message; none of them is a panic path.

use thiserror::Error;

/// Why an uploaded spreadsheet could not become a record store
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Spreadsheet could not be parsed: {message}")]
    ParseFailure { message: String },

    #[error("Spreadsheet is missing required columns: {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },
}

/// Why a national-id lookup produced no record
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search query is empty")]
    InvalidQuery,

    #[error("No record matches the queried national id")]
    NotFound,
}
