use loc_tally_compare::TallyReport;

use super::ports::{Loader, Reporter};

/// The main application service that orchestrates a reconciliation run.
/// It is generic over the Loader and Reporter traits, allowing for
/// dependency injection.
pub struct TallyService<L: Loader, R: Reporter> {
    loader: L,
    reporter: R,
    similarity: bool,
}

impl<L: Loader, R: Reporter> TallyService<L, R> {
    pub fn new(loader: L, reporter: R, similarity: bool) -> Self {
        Self {
            loader,
            reporter,
            similarity,
        }
    }

    /// Executes the whole pipeline: load, sort, reduce, report.
    pub fn run(&self) -> anyhow::Result<()> {
        let lists = self.loader.load()?;
        tracing::info!("Loaded {} location id pairs", lists.len());

        // The one-time sort. The metrics assume it already happened.
        let lists = lists.into_sorted();

        let report = TallyReport::compute(&lists, self.similarity);
        tracing::debug!(?report, "Reduced both lists");

        self.reporter.emit(&report)?;
        Ok(())
    }
}
