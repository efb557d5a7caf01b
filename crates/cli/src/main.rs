use clap::Parser;
use json_adapter::JsonReportSource;
use markdown_adapter::MarkdownReportWriter;
use report_core::config::{ReportConfig, DEFAULT_OUTPUT_FILE};
use report_core::ports::{ReportSource, ReportWriter, Result};
use std::path::PathBuf;

/// CLI tool to format a scanner tech report as Markdown
#[derive(Parser, Debug)]
#[command(name = "tech-report")]
#[command(about = "Formats a tech report JSON document as a Markdown file")]
struct Cli {
    /// Path to the tech report JSON produced by the scanner
    #[arg(short = 'i', long = "input", required = true)]
    input: PathBuf,

    /// Path where the Markdown report will be written
    #[arg(short = 'o', long = "output-file", default_value = DEFAULT_OUTPUT_FILE)]
    output_file: PathBuf,

    /// File whose contents replace the default legend paragraph
    #[arg(short = 'l', long = "legend-file")]
    legend_file: Option<PathBuf>,
}

impl Cli {
    fn report_config(&self) -> Result<ReportConfig> {
        let config = ReportConfig::new(self.output_file.clone());
        match &self.legend_file {
            Some(path) => config.with_legend_file(path),
            None => Ok(config),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.report_config()?;

    // Instantiate concrete implementations of secondary adapters
    let report_source: Box<dyn ReportSource> = Box::new(JsonReportSource::new(cli.input.clone()));
    let report_writer: Box<dyn ReportWriter> = Box::new(MarkdownReportWriter::new(config));

    let service = report_core::application::ReportServiceImpl::new(report_source, report_writer);
    service.execute_report()
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {
            println!("Successfully wrote tech report to {}", cli.output_file.display());
        }
        Err(e) => {
            eprintln!("Error during report generation: {}", e);
            std::process::exit(1);
        }
    }
}
