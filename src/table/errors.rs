use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("Not a table: {0}.")]
    NotATable(String),

    #[error("Duplicate column name: {0}.")]
    DuplicateColumn(String),

    #[error("Row {row} has {found} cells, expected {expected}.")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Record {row} keys do not match the table columns.")]
    RecordKeys { row: usize },

    #[error("Unsupported cell value: {0}.")]
    UnsupportedCell(String),
}
