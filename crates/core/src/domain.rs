use std::fmt;

/// A single scalar cell of tabular data
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Missing,
}

impl CellValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Float(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(text) => f.write_str(text),
            CellValue::Integer(value) => write!(f, "{}", value),
            CellValue::Float(value) => write!(f, "{}", value),
            CellValue::Boolean(value) => write!(f, "{}", value),
            CellValue::Missing => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

/// Ordered rows of named columns
///
/// Every row holds exactly one cell per column, in column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Builds a table from records of `(column, value)` pairs.
    ///
    /// Columns are collected in first-seen order across all records. A record
    /// that lacks a column gets `CellValue::Missing` in that position.
    pub fn from_records<R, K>(records: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = (K, CellValue)>,
        K: Into<String>,
    {
        let mut columns: Vec<String> = Vec::new();
        let mut sparse_rows: Vec<Vec<(usize, CellValue)>> = Vec::new();

        for record in records {
            let mut row = Vec::new();
            for (key, value) in record {
                let key: String = key.into();
                let index = match columns.iter().position(|column| *column == key) {
                    Some(index) => index,
                    None => {
                        columns.push(key);
                        columns.len() - 1
                    }
                };
                row.push((index, value));
            }
            sparse_rows.push(row);
        }

        let rows = sparse_rows
            .into_iter()
            .map(|sparse| {
                let mut row = vec![CellValue::Missing; columns.len()];
                for (index, value) in sparse {
                    row[index] = value;
                }
                row
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterates over the cells of one column, top to bottom
    pub fn column_cells(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// A column is numeric when it has at least one value and every value is a number
    pub fn is_numeric_column(&self, index: usize) -> bool {
        let mut values = self.column_cells(index).filter(|cell| !cell.is_missing()).peekable();
        values.peek().is_some() && values.all(CellValue::is_numeric)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub project_name: String,
    pub technologies_and_frameworks: Table,
}

/// Detected technologies per scanned repository plus an aggregate summary
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TechReport {
    pub summary: Table,
    pub repositories: Vec<Repository>,
}
