pub mod args;
pub mod checker;
pub mod commands;
pub mod error;
pub mod logging;
pub mod source;
pub mod table;
pub mod visuals;

pub use checker::{
    CheckOptions, DuplicateChecker, DuplicateReport, GroupOrder, check_duplicates,
    check_duplicates_value, summarize_groups,
};
pub use error::DupError;
pub use table::{CellValue, Table};
