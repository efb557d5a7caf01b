use crate::domain::TechReport;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading or writing a tech report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tech report: {0}")]
    Parse(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Port for the upstream process that produces a `TechReport`
pub trait ReportSource {
    fn load_report(&self) -> Result<TechReport>;
}

/// Trait for writing a formatted report
/// This is a port (interface) that defines how the core communicates with output adapters
pub trait ReportWriter: Send + Sync {
    fn write(&self, report: &TechReport) -> Result<()>;
}
