use super::{CheckOptions, DEFAULT_COUNT_COLUMN, GroupOrder};
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[arg(
        short = 'c',
        long = "column",
        value_name = "NAME",
        required = true,
        value_delimiter = ',',
        help = "Column(s) to group rows by; repeat the flag or separate names with commas"
    )]
    pub columns: Vec<String>,

    #[arg(
        long,
        value_name = "NAME",
        default_value = DEFAULT_COUNT_COLUMN,
        help = "Name of the appended group size column"
    )]
    pub count_column: String,

    #[arg(
        long,
        value_enum,
        default_value_t = GroupOrder::Sorted,
        help = "Order of the reported groups"
    )]
    pub order: GroupOrder,
}

impl CheckArgs {
    pub fn options(&self) -> CheckOptions {
        CheckOptions {
            count_column: self.count_column.clone(),
            order: self.order,
        }
    }
}
