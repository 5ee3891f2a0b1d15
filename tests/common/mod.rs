#![allow(dead_code)]

use std::cell::RefCell;
use std::fmt;
use std::io::Write;

use dupcheck::checker::diagnostics::Diagnostics;
use dupcheck::table::{CellValue, Table};
use tempfile::NamedTempFile;

pub const SAMPLE_CSV: &str = "\
col_1,col_2,col_3,col_4
A,a,x,1
A,b,x,1
A,c,x,1
B,a,x,1
B,b,x,1
B,c,x,1
A,a,y,1
";

pub fn sample_table() -> Table {
    dupcheck::commands::sample::sample_table().expect("sample table builds")
}

/// Builds a table of text cells; `""` becomes an empty cell.
pub fn text_table(columns: &[&str], rows: &[&[&str]]) -> Table {
    Table::from_rows(
        columns.iter().copied(),
        rows.iter()
            .map(|r| r.iter().map(|c| CellValue::parse_text(c)).collect()),
    )
    .expect("well-formed table")
}

pub fn write_temp(ext: &str, contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{}", ext))
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

pub fn path_str(file: &NamedTempFile) -> String {
    file.path().to_str().expect("utf-8 temp path").to_string()
}

/// Collects checker messages instead of logging them.
#[derive(Default)]
pub struct Recorder {
    pub messages: RefCell<Vec<(log::Level, String)>>,
}

impl Diagnostics for Recorder {
    fn emit(&self, level: log::Level, message: fmt::Arguments<'_>) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}
