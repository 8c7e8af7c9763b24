use loc_tally_compare::TallyReport;

use crate::application::ports::Reporter;

/// Prints the report to standard output, one metric per line.
pub struct StdoutReporter;

impl Reporter for StdoutReporter {
    fn emit(&self, report: &TallyReport) -> anyhow::Result<()> {
        println!("total distance: {}", report.distance);
        if let Some(similarity) = report.similarity {
            println!("total similarity: {similarity}");
        }
        Ok(())
    }
}
