use log::debug;
use report_core::domain::{CellValue, Repository, Table, TechReport};
use report_core::ports::{ReportError, ReportSource, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

type RawRow = Map<String, Value>;

#[derive(Deserialize)]
struct RawTechReport {
    summary: Vec<RawRow>,
    repositories: Vec<RawRepository>,
}

#[derive(Deserialize)]
struct RawRepository {
    project_name: String,
    technologies_and_frameworks: Vec<RawRow>,
}

/// Loads a `TechReport` from the JSON document written by the scanner
pub struct JsonReportSource {
    input_path: PathBuf,
}

impl JsonReportSource {
    /// Creates a new JsonReportSource reading from the given path
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
        }
    }
}

impl ReportSource for JsonReportSource {
    fn load_report(&self) -> Result<TechReport> {
        let json = fs::read_to_string(&self.input_path)?;
        debug!(
            "Read {} bytes of report data from {}",
            json.len(),
            self.input_path.display()
        );
        parse_tech_report(&json)
    }
}

/// Parses a tech report document. Row key order becomes column order.
pub fn parse_tech_report(json: &str) -> Result<TechReport> {
    let raw: RawTechReport =
        serde_json::from_str(json).map_err(|e| ReportError::Parse(e.to_string()))?;

    let repositories = raw
        .repositories
        .into_iter()
        .map(|repository| -> Result<Repository> {
            Ok(Repository {
                technologies_and_frameworks: rows_to_table(
                    repository.technologies_and_frameworks,
                )?,
                project_name: repository.project_name,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TechReport {
        summary: rows_to_table(raw.summary)?,
        repositories,
    })
}

fn rows_to_table(rows: Vec<RawRow>) -> Result<Table> {
    let records = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|(column, value)| -> Result<(String, CellValue)> {
                    let cell = value_to_cell(&column, value)?;
                    Ok((column, cell))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Table::from_records(records))
}

fn value_to_cell(column: &str, value: Value) -> Result<CellValue> {
    match value {
        Value::Null => Ok(CellValue::Missing),
        Value::Bool(flag) => Ok(CellValue::Boolean(flag)),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => Ok(CellValue::Integer(integer)),
            None => number
                .as_f64()
                .map(CellValue::Float)
                .ok_or_else(|| ReportError::Parse(format!("column `{}` holds {}", column, number))),
        },
        Value::String(text) => Ok(CellValue::Text(text)),
        Value::Array(_) | Value::Object(_) => Err(ReportError::Parse(format!(
            "column `{}` holds a nested value",
            column
        ))),
    }
}
