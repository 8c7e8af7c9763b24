use loc_tally_compare::TallyReport;
use loc_tally_model::lists::LocationLists;

/// A contract for producing the raw location lists from the input source.
pub trait Loader {
    fn load(&self) -> anyhow::Result<LocationLists>;
}

/// A contract for delivering a finished report.
pub trait Reporter {
    fn emit(&self, report: &TallyReport) -> anyhow::Result<()>;
}
