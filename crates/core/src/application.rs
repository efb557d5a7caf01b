use crate::ports::{ReportSource, ReportWriter, Result};
use log::info;

/// Application service for loading a tech report and formatting it
pub struct ReportServiceImpl {
    report_source: Box<dyn ReportSource>,
    report_writer: Box<dyn ReportWriter>,
}

impl ReportServiceImpl {
    /// Creates a new ReportServiceImpl with the given dependencies
    pub fn new(report_source: Box<dyn ReportSource>, report_writer: Box<dyn ReportWriter>) -> Self {
        Self {
            report_source,
            report_writer,
        }
    }

    /// Executes the report process: loads the report and writes it once
    pub fn execute_report(&self) -> Result<()> {
        let report = self.report_source.load_report()?;
        info!(
            "Formatting tech report with {} repositories",
            report.repositories.len()
        );
        self.report_writer.write(&report)?;
        Ok(())
    }
}
