use thiserror::Error;

use crate::table::errors::TableError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("File error: {0}.")]
    FileError(String),

    #[error("Parse error: {0}.")]
    ParseError(String),

    #[error("Unsupported table format: {0}.")]
    UnsupportedFormat(String),

    #[error("Sheet not found: {0}.")]
    SheetNotFound(String),

    #[error(transparent)]
    Table(#[from] TableError),
}
