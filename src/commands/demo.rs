use super::sample::{SAMPLE_SELECTIONS, sample_table};
use crate::checker::{DuplicateChecker, DuplicateReport};
use crate::error::DupError;
use crate::visuals;
use crate::visuals::args::OutputArgs;

/// Checks the sample table under each sample selection and prints every report.
pub fn run_demo(output: &OutputArgs) -> Result<Vec<DuplicateReport>, DupError> {
    let table = sample_table()?;
    let checker = DuplicateChecker::default();

    let mut reports = Vec::with_capacity(SAMPLE_SELECTIONS.len());
    for selection in SAMPLE_SELECTIONS {
        let columns: Vec<String> = selection.iter().map(|c| c.to_string()).collect();
        let report = checker.check(&table, &columns)?;
        visuals::print_report(&columns, &report, output)
            .map_err(|e| DupError::Output(e.to_string()))?;
        reports.push(report);
    }
    Ok(reports)
}
