use indexmap::IndexMap;
use serde::Deserialize;

use super::errors::TableError;
use super::{CellValue, Table};

/// Deserialized form of a table file before schema validation.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawTable {
    Split {
        columns: Vec<String>,
        #[serde(default)]
        data: Vec<Vec<CellValue>>,
    },
    Records(Vec<IndexMap<String, CellValue>>),
}

impl TryFrom<RawTable> for Table {
    type Error = TableError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        match raw {
            RawTable::Split { columns, data } => Table::from_rows(columns, data),
            RawTable::Records(records) => Table::from_records(records),
        }
    }
}
