pub mod args;
mod formatters;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde_json::{Value, json};

use crate::checker::DuplicateReport;
use args::{OutputArgs, ReportFormat};
use formatters::{format_cell, format_row_positions, format_share, table_to_records};

pub fn print_report(
    columns: &[String],
    report: &DuplicateReport,
    args: &OutputArgs,
) -> Result<(), serde_json::Error> {
    match args.format {
        ReportFormat::Table => {
            println!("{}", render_summary(columns, report));
            if report.duplicate_group_count > 0 {
                println!("{}", render_groups(report, args.rows));
            }
        }
        ReportFormat::Json => {
            let value = report_to_json(columns, report, args.rows);
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

pub fn render_summary(columns: &[String], report: &DuplicateReport) -> String {
    let duplicated_rows: usize = report.row_indices.iter().map(Vec::len).sum();
    format!(
        "✓ [{}]: {} duplicate group(s) covering {} of {} rows ({})",
        columns.join(", "),
        report.duplicate_group_count,
        duplicated_rows,
        report.total_rows,
        format_share(duplicated_rows, report.total_rows)
    )
}

pub fn render_groups(report: &DuplicateReport, show_rows: bool) -> Table {
    let groups = &report.duplicate_groups;

    let mut header: Vec<Cell> = groups
        .columns()
        .iter()
        .map(|c| Cell::new(c).add_attribute(Attribute::Bold))
        .collect();
    if show_rows {
        header.push(Cell::new("Rows").add_attribute(Attribute::Bold));
    }

    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);

    for (idx, row) in groups.rows().iter().enumerate() {
        let mut cells: Vec<Cell> = row.iter().map(|v| Cell::new(format_cell(v))).collect();
        if let Some(count) = cells.last_mut() {
            *count = count.clone().set_alignment(CellAlignment::Right);
        }
        if show_rows {
            let positions = report
                .row_indices
                .get(idx)
                .map(|r| format_row_positions(r))
                .unwrap_or_default();
            cells.push(Cell::new(positions));
        }
        table.add_row(cells);
    }

    table
}

pub fn report_to_json(columns: &[String], report: &DuplicateReport, show_rows: bool) -> Value {
    let mut value = json!({
        "columns": columns,
        "total_rows": report.total_rows,
        "duplicate_group_count": report.duplicate_group_count,
        "duplicate_groups": table_to_records(&report.duplicate_groups),
    });
    if show_rows {
        value["row_indices"] = json!(report.row_indices);
    }
    value
}
