use crate::checker::args::CheckArgs;
use crate::source::args::SourceArgs;
use crate::visuals::args::OutputArgs;
use clap::{ArgAction, Parser, Subcommand};

// Top-level CLI parser. Sub-sections are flattened from sub-Args structs.
#[derive(Parser, Debug)]
#[command(author, version, about = "Find duplicate rows in a table by a subset of columns")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log detail (-v debug, -vv trace)"
    )]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only log errors")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a table file for duplicate rows.
    Check(CheckCommand),
    /// Run the checker over the built-in sample table.
    Demo(DemoCommand),
}

#[derive(clap::Args, Debug, Clone)]
pub struct CheckCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub check: CheckArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DemoCommand {
    #[command(flatten)]
    pub output: OutputArgs,
}
