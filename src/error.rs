//! Error types for the Personal Data Manager.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Record-field validation errors live in [`crate::domain::errors`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while serializing or deserializing records.
#[derive(Error, Debug)]
pub enum SerializeError {
    /// Serialize was called with no records
    #[error("no records found to serialize")]
    NoRecords,

    /// Deserialize was called with empty or blank input
    #[error("no records found to deserialize")]
    EmptyInput,

    /// A required field is absent from the serialized data
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The input structure cannot be parsed
    #[error("malformed data: {0}")]
    Malformed(String),

    /// Invalid JSON input
    #[error("invalid JSON data: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid YAML input
    #[error("invalid YAML data: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Invalid CSV input
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// A deserialized field failed record validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors raised by the format selectors.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The requested format name is outside the recognized set
    #[error("unsupported format '{name}'; supported formats are: {}", .supported.join(", "))]
    Unsupported {
        name: String,
        supported: &'static [&'static str],
    },
}

/// Errors that can occur while accessing the record store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying SQLite failure
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to create the database directory
    #[error("failed to prepare database directory: {0}")]
    Io(#[from] std::io::Error),

    /// The requested filter field is not a column of the store
    #[error("invalid field '{0}'; valid fields are: name, address, phone_number")]
    InvalidField(String),

    /// A stored row failed record validation
    #[error("invalid record in store: {0}")]
    InvalidRecord(#[from] ValidationError),
}

/// Errors that can occur while writing converted output files.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The target directory does not exist
    #[error("the directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),

    /// Writing the output file failed (permissions, disk, ...)
    #[error("failed to save serialized data: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with SerializeError
pub type SerializeResult<T> = Result<T, SerializeError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;
