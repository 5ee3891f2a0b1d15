use serde_json::{Map, Value};

use crate::table::{CellValue, Table};

/// Floats keep a decimal point so `1.0` never reads like the integer `1`.
pub fn format_cell(cell: &CellValue) -> String {
    match cell {
        CellValue::Empty => "<empty>".to_string(),
        CellValue::Str(s) => s.clone(),
        CellValue::Float(f) => format!("{f:?}"),
        other => other.to_string(),
    }
}

/// JSON has no NaN or infinity, so those are written as `"NaN"`, `"inf"`
/// and `"-inf"` rather than collapsing into `null` next to empty cells.
pub fn cell_to_json(cell: &CellValue) -> Value {
    match cell {
        CellValue::Empty => Value::Null,
        CellValue::Bool(b) => Value::Bool(*b),
        CellValue::Int(i) => Value::from(*i),
        CellValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(format!("{f:?}"))),
        CellValue::Str(s) => Value::String(s.clone()),
    }
}

pub fn table_to_records(table: &Table) -> Value {
    table
        .to_records()
        .into_iter()
        .map(|record| {
            record
                .into_iter()
                .map(|(name, cell)| (name.to_string(), cell_to_json(cell)))
                .collect::<Map<_, _>>()
        })
        .map(Value::Object)
        .collect()
}

/// Row positions as 1-based numbers, comma separated.
pub fn format_row_positions(rows: &[usize]) -> String {
    rows.iter()
        .map(|r| (r + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn format_share(part: usize, whole: usize) -> String {
    if whole == 0 {
        "0.0%".to_string()
    } else {
        format!("{:.1}%", (part as f64 / whole as f64) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_positions_are_one_based() {
        assert_eq!(format_row_positions(&[0, 6]), "1, 7");
        assert_eq!(format_row_positions(&[]), "");
    }

    #[test]
    fn share_handles_empty_input() {
        assert_eq!(format_share(0, 0), "0.0%");
        assert_eq!(format_share(2, 7), "28.6%");
    }

    #[test]
    fn empty_cells_are_visible() {
        assert_eq!(format_cell(&CellValue::Empty), "<empty>");
        assert_eq!(format_cell(&CellValue::Float(1.5)), "1.5");
    }

    #[test]
    fn floats_render_apart_from_ints() {
        assert_eq!(format_cell(&CellValue::Float(1.0)), "1.0");
        assert_eq!(format_cell(&CellValue::Int(1)), "1");
        assert_eq!(format_cell(&CellValue::Float(f64::NAN)), "NaN");
    }

    #[test]
    fn non_finite_floats_stay_distinct_from_empty_in_json() {
        assert_eq!(cell_to_json(&CellValue::Float(f64::NAN)), Value::from("NaN"));
        assert_eq!(cell_to_json(&CellValue::Float(f64::INFINITY)), Value::from("inf"));
        assert_eq!(
            cell_to_json(&CellValue::Float(f64::NEG_INFINITY)),
            Value::from("-inf")
        );
        assert_eq!(cell_to_json(&CellValue::Empty), Value::Null);
        assert_eq!(cell_to_json(&CellValue::Float(2.5)), Value::from(2.5));
    }

    #[test]
    fn records_keep_column_order() {
        let table = Table::from_rows(
            ["b", "a"],
            [vec![CellValue::Float(f64::NAN), CellValue::Empty]],
        )
        .unwrap();
        let records = table_to_records(&table);
        let first = records[0].as_object().unwrap();
        assert_eq!(first.keys().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(first["b"], Value::from("NaN"));
        assert_eq!(first["a"], Value::Null);
    }
}
