use thiserror::Error;

use crate::table::errors::TableError;

#[derive(Debug, Error, PartialEq)]
pub enum CheckError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown column(s): {}.", .0.join(", "))]
    UnknownColumn(Vec<String>),
}

impl From<TableError> for CheckError {
    fn from(err: TableError) -> Self {
        CheckError::InvalidInput(err.to_string())
    }
}
