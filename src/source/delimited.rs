use std::fs::File;
use std::io::Read;

use super::errors::SourceError;
use crate::table::{CellValue, Table};

pub fn read_csv(path: &str) -> Result<Table, SourceError> {
    let file = File::open(path)
        .map_err(|e| SourceError::FileError(format!("failed to open {}: {}", path, e)))?;
    parse_csv(file)
}

/// Reads comma separated text with a header row; cells are typed by content.
pub fn parse_csv<R: Read>(reader: R) -> Result<Table, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| SourceError::ParseError(format!("invalid header row: {}", e)))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();

    let mut table = Table::new(headers)?;
    for record in reader.records() {
        let record = record.map_err(|e| SourceError::ParseError(e.to_string()))?;
        table.push_row(record.iter().map(CellValue::parse_text).collect())?;
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_cells_and_keeps_header_order() {
        let text = "id,name,score,flag\n1,ann,2.5,true\n2,,3,false\n";
        let table = parse_csv(text.as_bytes()).unwrap();

        assert_eq!(table.columns(), ["id", "name", "score", "flag"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, "score"), Some(&CellValue::Float(2.5)));
        assert_eq!(table.get(1, "name"), Some(&CellValue::Empty));
        assert_eq!(table.get(1, "score"), Some(&CellValue::Int(3)));
        assert_eq!(table.get(1, "flag"), Some(&CellValue::Bool(false)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let text = "a,b\n1,2\n3\n";
        assert!(matches!(
            parse_csv(text.as_bytes()),
            Err(SourceError::ParseError(_))
        ));
    }

    #[test]
    fn header_only_gives_empty_table() {
        let table = parse_csv("col_1,col_2\n".as_bytes()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns(), ["col_1", "col_2"]);
    }
}
