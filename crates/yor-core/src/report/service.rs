use crate::accumulator::ChangeAccumulator;
use crate::model::TaggedBlock;
use crate::report::builder::build_report;
use crate::report::Report;

/// Owns the most recently built report.
#[derive(Debug, Default)]
pub struct ReportService {
    report: Report,
}

impl ReportService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds the report from scratch, replacing whatever was held before.
    pub fn create_report<B: TaggedBlock>(&mut self, changes: &ChangeAccumulator<B>) -> &Report {
        self.report = build_report(changes);
        &self.report
    }

    pub fn report(&self) -> &Report {
        &self.report
    }
}
