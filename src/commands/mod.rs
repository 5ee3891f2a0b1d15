pub mod demo;
pub mod sample;

use crate::args::{Args, CheckCommand, Command};
use crate::checker::{DuplicateChecker, DuplicateReport};
use crate::error::DupError;
use crate::source;
use crate::visuals;

pub fn run(args: &Args) -> Result<(), DupError> {
    match &args.command {
        Command::Check(cmd) => check_file(cmd).map(|_| ()),
        Command::Demo(cmd) => demo::run_demo(&cmd.output).map(|_| ()),
    }
}

pub fn check_file(cmd: &CheckCommand) -> Result<DuplicateReport, DupError> {
    let table = source::load_table(&cmd.source).map_err(|e| DupError::InSource {
        path: cmd.source.file.clone(),
        source: Box::new(e.into()),
    })?;

    let checker = DuplicateChecker::new(cmd.check.options());
    let report = checker.check(&table, &cmd.check.columns)?;

    visuals::print_report(&cmd.check.columns, &report, &cmd.output)
        .map_err(|e| DupError::Output(e.to_string()))?;

    Ok(report)
}
