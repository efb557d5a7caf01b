use crate::ports::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Output file used when no path is configured
pub const DEFAULT_OUTPUT_FILE: &str = "tech_report.md";

/// Legend paragraph emitted below the report title
pub const DEFAULT_LEGEND: &str = "\
| Priority apples | Second priority | Third priority |
|-------|--------|---------|
| ambrosia | gala | red delicious |
| pink lady | jazz | macintosh |
| honeycrisp | granny smith | fuji |";

/// Settings for producing one report document
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub output_path: PathBuf,
    pub legend: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            legend: DEFAULT_LEGEND.to_string(),
        }
    }
}

impl ReportConfig {
    /// Creates a config writing to `output_path` with the default legend
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }

    pub fn with_legend(mut self, legend: impl Into<String>) -> Self {
        self.legend = legend.into();
        self
    }

    /// Replaces the legend with the contents of a UTF-8 template file
    pub fn with_legend_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let legend = fs::read_to_string(path)?;
        Ok(self.with_legend(legend))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ReportError;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.output_path, PathBuf::from("tech_report.md"));
        assert_eq!(config.legend, DEFAULT_LEGEND);
    }

    #[test]
    fn test_new_keeps_default_legend() {
        let config = ReportConfig::new("/tmp/out.md");
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.md"));
        assert_eq!(config.legend, DEFAULT_LEGEND);
    }

    #[test]
    fn test_with_legend_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "![build](badge.svg)").unwrap();

        let config = ReportConfig::default().with_legend_file(file.path()).unwrap();
        assert_eq!(config.legend, "![build](badge.svg)");
    }

    #[test]
    fn test_with_legend_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = ReportConfig::default().with_legend_file(dir.path().join("absent.md"));
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
