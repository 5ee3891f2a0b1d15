use calamine::{Data, Range, Reader, open_workbook_auto};

use super::errors::SourceError;
use crate::table::{CellValue, Table};

pub fn read_sheet(path: &str, sheet: Option<&str>) -> Result<Table, SourceError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SourceError::FileError(format!("failed to open workbook {}: {}", path, e)))?;

    let sheet_name = select_sheet(&workbook.sheet_names(), sheet, path)?;

    let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
        SourceError::ParseError(format!("failed to read sheet '{}': {}", sheet_name, e))
    })?;

    range_to_table(&range, &sheet_name)
}

/// Resolves the requested sheet against the workbook, defaulting to the first.
pub(crate) fn select_sheet(
    available: &[String],
    requested: Option<&str>,
    path: &str,
) -> Result<String, SourceError> {
    match requested {
        Some(name) if available.iter().any(|s| s == name) => Ok(name.to_string()),
        Some(name) => Err(SourceError::SheetNotFound(format!(
            "'{}'. Available sheets: {}",
            name,
            available.join(", ")
        ))),
        None => available
            .first()
            .cloned()
            .ok_or_else(|| SourceError::SheetNotFound(format!("'{}' has no sheets", path))),
    }
}

/// Converts a sheet range into a table using its first row as the header.
///
/// Blank header cells past the last named column are dropped together with
/// any data beneath them. Trailing blank rows are dropped; interior blank
/// rows are kept as all-empty rows.
pub(crate) fn range_to_table(range: &Range<Data>, sheet: &str) -> Result<Table, SourceError> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(SourceError::ParseError(format!(
            "sheet '{}' has no header row",
            sheet
        )));
    };

    let width = header
        .iter()
        .rposition(|cell| !cell_is_empty(cell))
        .map_or(0, |last| last + 1);
    if width == 0 {
        return Err(SourceError::ParseError(format!(
            "sheet '{}' has an empty header row",
            sheet
        )));
    }

    let mut names = Vec::with_capacity(width);
    for (idx, cell) in header[..width].iter().enumerate() {
        if cell_is_empty(cell) {
            return Err(SourceError::ParseError(format!(
                "sheet '{}' has an empty header in column {}",
                sheet,
                idx + 1
            )));
        }
        names.push(cell.to_string().trim().to_string());
    }

    let mut table = Table::new(names)?;
    let mut pending_blank = 0usize;
    for row in rows {
        let cells = &row[..width.min(row.len())];
        if cells.iter().all(cell_is_empty) {
            pending_blank += 1;
            continue;
        }
        for _ in 0..pending_blank {
            table.push_row(vec![CellValue::Empty; width])?;
        }
        pending_blank = 0;

        let cells = (0..width)
            .map(|i| cells.get(i).map(convert_cell).unwrap_or(CellValue::Empty))
            .collect();
        table.push_row(cells)?;
    }

    Ok(table)
}

fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.trim().is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Str(s.to_owned()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::Str(other.to_string()),
    }
}

fn cell_is_empty(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
