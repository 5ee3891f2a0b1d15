use crate::table::errors::TableError;
use crate::table::{CellValue, Table};

pub const SAMPLE_COLUMNS: [&str; 4] = ["col_1", "col_2", "col_3", "col_4"];

/// Column selections the demo runs, widening one column at a time.
pub const SAMPLE_SELECTIONS: [&[&str]; 3] = [
    &["col_1"],
    &["col_1", "col_2"],
    &["col_1", "col_2", "col_3"],
];

const SAMPLE_ROWS: [(&str, &str, &str, i64); 7] = [
    ("A", "a", "x", 1),
    ("A", "b", "x", 1),
    ("A", "c", "x", 1),
    ("B", "a", "x", 1),
    ("B", "b", "x", 1),
    ("B", "c", "x", 1),
    ("A", "a", "y", 1),
];

pub fn sample_table() -> Result<Table, TableError> {
    Table::from_rows(
        SAMPLE_COLUMNS,
        SAMPLE_ROWS
            .iter()
            .map(|&(c1, c2, c3, c4)| vec![c1.into(), c2.into(), c3.into(), CellValue::Int(c4)]),
    )
}
