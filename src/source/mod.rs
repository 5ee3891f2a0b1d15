pub mod args;
mod delimited;
pub mod errors;
mod sheet;
mod structured;

use std::path::Path;

use crate::table::Table;
use errors::SourceError;

pub use delimited::parse_csv;
pub use structured::{parse_json, parse_toml, parse_yaml};

pub fn load_table(args: &args::SourceArgs) -> Result<Table, SourceError> {
    load_table_from_path(&args.file, args.sheet.as_deref())
}

/// Loads a table, picking the reader from the file extension.
pub fn load_table_from_path(path: &str, sheet: Option<&str>) -> Result<Table, SourceError> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    log::debug!("loading table from '{}' as '{}'", path, ext);

    let table = match ext.as_str() {
        "csv" => delimited::read_csv(path)?,
        "xlsx" | "xlsm" | "xls" | "ods" => sheet::read_sheet(path, sheet)?,
        "json" => parse_json(&read_text(path)?)?,
        "yaml" | "yml" => parse_yaml(&read_text(path)?)?,
        "toml" => parse_toml(&read_text(path)?)?,
        _ => return Err(SourceError::UnsupportedFormat(path.to_string())),
    };

    log::info!(
        "loaded {} row(s) with columns [{}] from '{}'",
        table.row_count(),
        table.columns().join(", "),
        path
    );
    Ok(table)
}

fn read_text(path: &str) -> Result<String, SourceError> {
    std::fs::read_to_string(path)
        .map_err(|e| SourceError::FileError(format!("failed to read {}: {}", path, e)))
}
