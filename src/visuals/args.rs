use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Table,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    #[arg(
        long,
        value_enum,
        default_value_t = ReportFormat::Table,
        help = "How to print the report"
    )]
    pub format: ReportFormat,

    #[arg(long, help = "List the input rows belonging to each duplicate group")]
    pub rows: bool,
}
