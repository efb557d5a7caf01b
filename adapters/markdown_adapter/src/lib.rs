mod markdown_file;
mod observer;
mod table;

pub use markdown_file::MarkdownFile;
pub use observer::{LogTableObserver, TableObserver};
pub use table::render_pipe_table;

use log::info;
use report_core::config::ReportConfig;
use report_core::domain::TechReport;
use report_core::ports::{ReportError, ReportWriter, Result};

/// Builds the markdown document for `report` without touching the disk.
///
/// Section order is fixed: title, legend, summary table, then one
/// subsection per repository in input order.
pub fn build_report_document(report: &TechReport, config: &ReportConfig) -> MarkdownFile {
    let mut markdown_file =
        MarkdownFile::new(config.output_path.clone()).with_observer(LogTableObserver);

    markdown_file.add_header(1, "Tech Report");
    markdown_file.add_paragraph(&config.legend);
    markdown_file.add_header(2, "Summary");
    markdown_file.add_table(&report.summary);
    markdown_file.add_header(2, "Repositories");
    for repository in &report.repositories {
        markdown_file.add_header(3, &repository.project_name);
        markdown_file.add_table(&repository.technologies_and_frameworks);
    }

    markdown_file
}

/// Formats `report` and writes it to the configured output path
pub fn write_output_file(report: &TechReport, config: &ReportConfig) -> Result<()> {
    let markdown_file = build_report_document(report, config);
    markdown_file
        .write()
        .map_err(|source| ReportError::Write {
            path: config.output_path.clone(),
            source,
        })?;
    info!("Wrote tech report to {}", config.output_path.display());
    Ok(())
}

/// Markdown writer adapter implementation
pub struct MarkdownReportWriter {
    config: ReportConfig,
}

impl MarkdownReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }
}

impl ReportWriter for MarkdownReportWriter {
    fn write(&self, report: &TechReport) -> Result<()> {
        write_output_file(report, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;
    use report_core::domain::{CellValue, Repository, Table};
    use std::fs;

    fn sample_report() -> TechReport {
        TechReport {
            summary: Table::from_records(vec![vec![
                ("Language", CellValue::from("Python")),
                ("Lines", CellValue::Integer(10)),
            ]]),
            repositories: vec![Repository {
                project_name: "demo".to_string(),
                technologies_and_frameworks: Table::from_records(vec![vec![(
                    "Tech",
                    CellValue::from("X"),
                )]]),
            }],
        }
    }

    #[test]
    fn test_build_report_document_layout() {
        let config = ReportConfig::new("tech_report.md").with_legend("Legend");
        let document = build_report_document(&sample_report(), &config);

        let expected = indoc! {"
            # Tech Report

            Legend

            ## Summary

            | Language | Lines |
            |:---------|------:|
            | Python   |    10 |

            ## Repositories

            ### demo

            | Tech |
            |:-----|
            | X    |

"};
        assert_eq!(document.render(), expected);
    }

    #[test]
    fn test_build_report_document_uses_default_legend() {
        let config = ReportConfig::default();
        let document = build_report_document(&sample_report(), &config);
        assert_eq!(document.lines()[2], report_core::config::DEFAULT_LEGEND);
    }

    #[test]
    fn test_build_report_document_section_order() {
        let report = TechReport {
            summary: Table::default(),
            repositories: vec![
                Repository {
                    project_name: "first".to_string(),
                    technologies_and_frameworks: Table::default(),
                },
                Repository {
                    project_name: "second".to_string(),
                    technologies_and_frameworks: Table::default(),
                },
            ],
        };
        let document = build_report_document(&report, &ReportConfig::default());

        let headers: Vec<&str> = document
            .lines()
            .iter()
            .filter(|line| line.starts_with('#'))
            .map(String::as_str)
            .collect();
        assert_eq!(
            headers,
            vec!["# Tech Report", "## Summary", "## Repositories", "### first", "### second"]
        );
    }

    #[test]
    fn test_empty_repositories_still_emit_section() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path().join("tech_report.md")).with_legend("Legend");
        let report = TechReport {
            summary: sample_report().summary,
            repositories: Vec::new(),
        };

        write_output_file(&report, &config).unwrap();

        let written = fs::read_to_string(&config.output_path).unwrap();
        assert!(written.ends_with("## Repositories\n\n"));
        assert!(!written.contains("### "));
    }

    #[test]
    fn test_markdown_report_writer_writes_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.md");
        let writer = MarkdownReportWriter::new(ReportConfig::new(&path));

        writer.write(&sample_report()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Tech Report\n\n"));
        assert!(written.contains("| Python   |    10 |"));
        assert!(written.contains("### demo\n\n| Tech |"));
    }

    #[test]
    fn test_write_output_file_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("tech_report.md");
        let config = ReportConfig::new(&path);

        let err = write_output_file(&sample_report(), &config).unwrap_err();
        match err {
            ReportError::Write { path: failed, source } => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
