//! Duplicate detection over a column selection.
//!
//! Rows are grouped by the tuple of their values in the selected columns.
//! Every group is counted, and groups seen more than once are reported
//! together with the count in an appended column.
//!
//! ```
//! use dupcheck::checker::check_duplicates;
//! use dupcheck::table::{CellValue, Table};
//!
//! let row = |name: &str, city: &str| vec![CellValue::from(name), CellValue::from(city)];
//! let table = Table::from_rows(
//!     ["name", "city"],
//!     [row("ann", "oslo"), row("bob", "rome"), row("ann", "oslo")],
//! )
//! .unwrap();
//!
//! let report = check_duplicates(&table, &["name"]).unwrap();
//! assert_eq!(report.duplicate_group_count, 1);
//! assert_eq!(
//!     report.duplicate_groups.get(0, "number_of_duplicates"),
//!     Some(&CellValue::Int(2))
//! );
//! ```

pub mod args;
pub mod diagnostics;
pub mod errors;

use indexmap::IndexMap;
use log::Level;
use std::collections::HashSet;

use crate::table::{CellValue, Table, json_kind};
use diagnostics::{Diagnostics, LogDiagnostics};
use errors::CheckError;

pub const DEFAULT_COUNT_COLUMN: &str = "number_of_duplicates";

/// Order in which groups appear in a summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum GroupOrder {
    /// Ascending by group key.
    #[default]
    Sorted,
    /// In the order each key first appears in the input.
    FirstSeen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOptions {
    pub count_column: String,
    pub order: GroupOrder,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            count_column: DEFAULT_COUNT_COLUMN.to_string(),
            order: GroupOrder::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateReport {
    /// Number of distinct keys occurring more than once.
    pub duplicate_group_count: usize,
    /// Selected columns plus the count column, one row per duplicate key.
    pub duplicate_groups: Table,
    /// Input row positions of each duplicate group, parallel to `duplicate_groups`.
    pub row_indices: Vec<Vec<usize>>,
    pub total_rows: usize,
}

struct Group {
    key: Vec<CellValue>,
    rows: Vec<usize>,
}

pub struct DuplicateChecker<D = LogDiagnostics> {
    options: CheckOptions,
    diagnostics: D,
}

impl DuplicateChecker {
    pub fn new(options: CheckOptions) -> Self {
        Self::with_diagnostics(options, LogDiagnostics)
    }
}

impl Default for DuplicateChecker {
    fn default() -> Self {
        Self::new(CheckOptions::default())
    }
}

impl<D: Diagnostics> DuplicateChecker<D> {
    pub fn with_diagnostics(options: CheckOptions, diagnostics: D) -> Self {
        Self {
            options,
            diagnostics,
        }
    }

    pub fn check<S: AsRef<str>>(
        &self,
        table: &Table,
        columns: &[S],
    ) -> Result<DuplicateReport, CheckError> {
        let indices = self.validate_selection(table, columns)?;
        let summary_columns = self.summary_columns(columns);

        if table.is_empty() {
            self.diagnostics.emit(
                Level::Debug,
                format_args!("table has no rows; returning an empty summary"),
            );
            return Ok(DuplicateReport {
                duplicate_group_count: 0,
                duplicate_groups: Table::new(summary_columns)?,
                row_indices: Vec::new(),
                total_rows: 0,
            });
        }

        let (duplicates, singles): (Vec<Group>, Vec<Group>) = self
            .group_rows(table, &indices)
            .into_iter()
            .partition(|g| g.rows.len() > 1);

        let mut duplicate_groups = Table::new(summary_columns)?;
        let mut row_indices = Vec::with_capacity(duplicates.len());
        for group in duplicates {
            duplicate_groups.push_row(summary_row(&group))?;
            row_indices.push(group.rows);
        }

        self.diagnostics.emit(
            Level::Info,
            format_args!(
                "found {} duplicate group(s) and {} unique key(s) over [{}] in {} row(s)",
                duplicate_groups.row_count(),
                singles.len(),
                join_names(columns),
                table.row_count()
            ),
        );

        Ok(DuplicateReport {
            duplicate_group_count: duplicate_groups.row_count(),
            duplicate_groups,
            row_indices,
            total_rows: table.row_count(),
        })
    }

    /// Validates untyped arguments, then checks them like [`Self::check`].
    pub fn check_value(
        &self,
        table: &serde_json::Value,
        columns: &serde_json::Value,
    ) -> Result<DuplicateReport, CheckError> {
        self.diagnostics
            .emit(Level::Debug, format_args!("validating table argument"));
        let table = Table::from_json(table)?;

        self.diagnostics
            .emit(Level::Debug, format_args!("validating columns argument"));
        let serde_json::Value::Array(items) = columns else {
            return Err(CheckError::InvalidInput(format!(
                "columns must be a list of column names, found {}.",
                json_kind(columns)
            )));
        };
        let names = items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    CheckError::InvalidInput(format!(
                        "column names must be strings, found {} at position {}.",
                        json_kind(item),
                        idx
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.check(&table, &names)
    }

    /// Every group with its size, duplicates and singletons alike.
    pub fn summarize<S: AsRef<str>>(
        &self,
        table: &Table,
        columns: &[S],
    ) -> Result<Table, CheckError> {
        let indices = self.validate_selection(table, columns)?;
        let mut summary = Table::new(self.summary_columns(columns))?;
        for group in self.group_rows(table, &indices) {
            summary.push_row(summary_row(&group))?;
        }
        Ok(summary)
    }

    fn validate_selection<S: AsRef<str>>(
        &self,
        table: &Table,
        columns: &[S],
    ) -> Result<Vec<usize>, CheckError> {
        self.diagnostics.emit(
            Level::Debug,
            format_args!("validating column selection [{}]", join_names(columns)),
        );

        if columns.is_empty() {
            return Err(CheckError::InvalidInput(
                "at least one column must be selected.".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for name in columns {
            if !seen.insert(name.as_ref()) {
                return Err(CheckError::InvalidInput(format!(
                    "column '{}' is selected more than once.",
                    name.as_ref()
                )));
            }
        }

        let mut indices = Vec::with_capacity(columns.len());
        let mut missing = Vec::new();
        for name in columns {
            match table.column_index(name.as_ref()) {
                Some(index) => indices.push(index),
                None => missing.push(name.as_ref().to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(CheckError::UnknownColumn(missing));
        }

        if seen.contains(self.options.count_column.as_str()) {
            return Err(CheckError::InvalidInput(format!(
                "count column '{}' collides with a selected column.",
                self.options.count_column
            )));
        }

        Ok(indices)
    }

    fn summary_columns<S: AsRef<str>>(&self, columns: &[S]) -> Vec<String> {
        columns
            .iter()
            .map(|c| c.as_ref().to_string())
            .chain(std::iter::once(self.options.count_column.clone()))
            .collect()
    }

    fn group_rows(&self, table: &Table, indices: &[usize]) -> Vec<Group> {
        let mut groups: IndexMap<Vec<CellValue>, Vec<usize>> = IndexMap::new();
        for (position, row) in table.rows().iter().enumerate() {
            let key = indices.iter().map(|&i| row[i].clone()).collect();
            groups.entry(key).or_default().push(position);
        }

        let mut groups: Vec<Group> = groups
            .into_iter()
            .map(|(key, rows)| Group { key, rows })
            .collect();
        if self.options.order == GroupOrder::Sorted {
            groups.sort_by(|a, b| a.key.cmp(&b.key));
        }
        groups
    }
}

fn summary_row(group: &Group) -> Vec<CellValue> {
    let mut row = group.key.clone();
    row.push(CellValue::Int(group.rows.len() as i64));
    row
}

fn join_names<S: AsRef<str>>(columns: &[S]) -> String {
    columns
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks `table` with default options, logging through the `log` facade.
pub fn check_duplicates<S: AsRef<str>>(
    table: &Table,
    columns: &[S],
) -> Result<DuplicateReport, CheckError> {
    DuplicateChecker::default().check(table, columns)
}

pub fn check_duplicates_value(
    table: &serde_json::Value,
    columns: &serde_json::Value,
) -> Result<DuplicateReport, CheckError> {
    DuplicateChecker::default().check_value(table, columns)
}

pub fn summarize_groups<S: AsRef<str>>(
    table: &Table,
    columns: &[S],
    options: &CheckOptions,
) -> Result<Table, CheckError> {
    DuplicateChecker::new(options.clone()).summarize(table, columns)
}
