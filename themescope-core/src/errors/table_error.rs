//! Tabular persistence errors.

use super::error_code::{self, ThemeErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("CSV error in {path}: {reason}")]
    Csv { path: String, reason: String },

    #[error("missing column {column:?} in {path}")]
    MissingColumn { path: String, column: String },

    #[error("invalid value {value:?} for column {column:?} at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
}

impl ThemeErrorCode for TableError {
    fn error_code(&self) -> &'static str {
        error_code::TABLE_ERROR
    }
}
