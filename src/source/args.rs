use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    #[arg(
        value_name = "FILE",
        help = "Table file to check (csv, xlsx/xls/ods, json, yaml or toml)"
    )]
    pub file: String,

    #[arg(
        long,
        value_name = "NAME",
        help = "Worksheet to read from a spreadsheet; defaults to the first sheet"
    )]
    pub sheet: Option<String>,
}
