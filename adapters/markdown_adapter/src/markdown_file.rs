use crate::observer::TableObserver;
use crate::table::render_pipe_table;
use log::debug;
use report_core::domain::Table;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// In-memory markdown document, flushed to `file_path` by `write`
pub struct MarkdownFile {
    file_path: PathBuf,
    lines_of_content: Vec<String>,
    observer: Option<Box<dyn TableObserver>>,
}

impl MarkdownFile {
    /// Creates an empty document bound to `file_path`. Nothing touches the disk yet.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            lines_of_content: Vec::new(),
            observer: None,
        }
    }

    /// Notifies `observer` with each rendered table
    pub fn with_observer(mut self, observer: impl TableObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn lines(&self) -> &[String] {
        &self.lines_of_content
    }

    fn last_line_is_empty(&self) -> bool {
        self.lines_of_content
            .last()
            .map_or(true, |line| line.is_empty())
    }

    /// Appends `level` hash marks and the title, separated from previous
    /// content by exactly one blank line and always followed by one.
    pub fn add_header(&mut self, level: usize, title: &str) {
        if !self.last_line_is_empty() {
            self.lines_of_content.push(String::new());
        }
        self.lines_of_content
            .push(format!("{} {}", "#".repeat(level), title));
        self.lines_of_content.push(String::new());
    }

    /// Appends `paragraph` verbatim as a single entry
    pub fn add_paragraph(&mut self, paragraph: &str) {
        self.lines_of_content.push(paragraph.to_string());
    }

    /// Appends the pipe-table rendering of `table` followed by a blank line
    pub fn add_table(&mut self, table: &Table) {
        let rendered = render_pipe_table(table);
        if let Some(observer) = &self.observer {
            observer.on_table_rendered(&rendered);
        }
        self.lines_of_content.push(rendered);
        self.lines_of_content.push(String::new());
    }

    /// Document text: every entry terminated by a single newline
    pub fn render(&self) -> String {
        self.lines_of_content
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }

    /// Creates or truncates the target file and writes the whole buffer
    pub fn write(&self) -> io::Result<()> {
        fs::write(&self.file_path, self.render())?;
        debug!(
            "Wrote {} entries to {}",
            self.lines_of_content.len(),
            self.file_path.display()
        );
        Ok(())
    }
}
