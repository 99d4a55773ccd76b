use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures building a record from untyped answers.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("field '{field}' expects a {expected} value, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: String,
    },

    #[error("'{value}' is not a valid choice for '{field}' (one of: {choices})")]
    InvalidChoice {
        field: String,
        value: String,
        choices: String,
    },

    #[error("answers must be a JSON object keyed by field name")]
    NotAnObject,

    #[error("record needs {expected} values, got {found}")]
    WrongLength { expected: usize, found: usize },
}

impl RecordError {
    pub(crate) fn invalid_choice(field: &str, value: &str, choices: &[&str]) -> Self {
        RecordError::InvalidChoice {
            field: field.to_string(),
            value: value.to_string(),
            choices: choices.join(", "),
        }
    }
}

/// Failures of the plan store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not write trading plan to {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no trading plan at {}", .0.display())]
    NotFound(PathBuf),

    #[error("trading plan file {} has no data row", .0.display())]
    Empty(PathBuf),

    #[error("{0}")]
    CorruptFormat(String),
}

impl StoreError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::WriteFailure {
            path: path.into(),
            source,
        }
    }
}
