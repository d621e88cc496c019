use crate::model::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected header in phonebook file: expected [{expected}], found [{found}]")]
    HeaderMismatch { expected: String, found: String },

    #[error("Corrupt phonebook file at row {row}: {reason}")]
    Corrupt { row: usize, reason: String },

    #[error("{field} is {width} characters long, the maximum is {max}")]
    Validation {
        field: Field,
        width: usize,
        max: usize,
    },

    #[error("Record {id} not found (the phonebook holds {len} records)")]
    NotFound { id: usize, len: usize },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl PhonebookError {
    /// True for failures of the backing file itself (unreadable, unwritable, corrupt).
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            PhonebookError::Io(_)
                | PhonebookError::Csv(_)
                | PhonebookError::HeaderMismatch { .. }
                | PhonebookError::Corrupt { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
