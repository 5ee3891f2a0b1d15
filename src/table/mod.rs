pub mod errors;
mod raw;
pub mod value;

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashSet;

use errors::TableError;
pub use raw::RawTable;
pub use value::CellValue;

/// An ordered set of rows sharing one schema.
///
/// The schema is explicit so that a table with no rows still knows its
/// columns. Rows are stored positionally against `columns`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    #[serde(rename = "data")]
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Result<Self, TableError> {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();

        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(TableError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    pub fn from_rows<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: impl IntoIterator<Item = Vec<CellValue>>,
    ) -> Result<Self, TableError> {
        let mut table = Self::new(columns)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Builds a table from records. Every record must carry exactly the keys
    /// of the first one; the first record's key order becomes the schema.
    pub fn from_records(records: Vec<IndexMap<String, CellValue>>) -> Result<Self, TableError> {
        let Some(first) = records.first() else {
            return Self::new(Vec::<String>::new());
        };

        let mut table = Self::new(first.keys().cloned())?;
        for (idx, mut record) in records.into_iter().enumerate() {
            if record.len() != table.columns.len() {
                return Err(TableError::RecordKeys { row: idx });
            }
            let mut row = Vec::with_capacity(table.columns.len());
            for name in &table.columns {
                let cell = record
                    .swap_remove(name)
                    .ok_or(TableError::RecordKeys { row: idx })?;
                row.push(cell);
            }
            table.rows.push(row);
        }
        Ok(table)
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowWidth {
                row: self.rows.len(),
                found: row.len(),
                expected: self.columns.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(index))
    }

    /// Rows as column-name keyed records, in schema order.
    pub fn to_records(&self) -> Vec<IndexMap<&str, &CellValue>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(String::as_str)
                    .zip(row.iter())
                    .collect()
            })
            .collect()
    }

    /// Validates an untyped value as a table.
    ///
    /// Accepts either a split object (`{"columns": [...], "data": [[...]]}`)
    /// or an array of records sharing one key set.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, TableError> {
        use serde_json::Value;

        match value {
            Value::Object(map) if map.contains_key("columns") => {
                let Some(Value::Array(columns)) = map.get("columns") else {
                    return Err(TableError::NotATable(
                        "'columns' must be a list of column names".to_string(),
                    ));
                };
                let names = columns
                    .iter()
                    .map(|c| {
                        c.as_str().map(str::to_string).ok_or_else(|| {
                            TableError::NotATable(format!("column name {c} is not a string"))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                let mut table = Self::new(names)?;
                match map.get("data") {
                    None | Some(Value::Null) => {}
                    Some(Value::Array(rows)) => {
                        for row in rows {
                            let Value::Array(cells) = row else {
                                return Err(TableError::NotATable(format!(
                                    "row {row} is not a list of cells"
                                )));
                            };
                            let cells = cells
                                .iter()
                                .map(CellValue::from_json)
                                .collect::<Result<Vec<_>, _>>()?;
                            table.push_row(cells)?;
                        }
                    }
                    Some(other) => {
                        return Err(TableError::NotATable(format!(
                            "'data' must be a list of rows, found {}",
                            json_kind(other)
                        )));
                    }
                }
                Ok(table)
            }
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    let Value::Object(fields) = item else {
                        return Err(TableError::NotATable(format!(
                            "record {idx} is {}, expected an object",
                            json_kind(item)
                        )));
                    };
                    let record = fields
                        .iter()
                        .map(|(k, v)| Ok((k.clone(), CellValue::from_json(v)?)))
                        .collect::<Result<IndexMap<_, _>, TableError>>()?;
                    records.push(record);
                }
                Self::from_records(records)
            }
            other => Err(TableError::NotATable(format!(
                "expected a split object or a list of records, found {}",
                json_kind(other)
            ))),
        }
    }
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
