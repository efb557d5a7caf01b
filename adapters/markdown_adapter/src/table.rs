use report_core::domain::Table;
use std::iter;
use unicode_width::UnicodeWidthStr;

/// Renders a table as a markdown pipe table without an index column.
///
/// Numeric columns are right-aligned, everything else is left-aligned. Cell
/// content is emitted as-is. A table without columns renders as `""`.
pub fn render_pipe_table(table: &Table) -> String {
    if table.is_empty() {
        return String::new();
    }

    let header = table.columns().to_vec();
    let body: Vec<Vec<String>> = table
        .rows()
        .iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let right_aligned: Vec<bool> = (0..header.len())
        .map(|index| table.is_numeric_column(index))
        .collect();
    let widths: Vec<usize> = (0..header.len())
        .map(|index| {
            iter::once(&header[index])
                .chain(body.iter().map(|row| &row[index]))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0)
                .max(1)
        })
        .collect();

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format_row(&header, &widths, &right_aligned));
    lines.push(format_alignment_row(&widths, &right_aligned));
    for row in &body {
        lines.push(format_row(row, &widths, &right_aligned));
    }
    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize], right_aligned: &[bool]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .zip(right_aligned)
        .map(|((cell, &width), &right)| pad_cell(cell, width, right))
        .collect();
    format!("| {} |", padded.join(" | "))
}

fn format_alignment_row(widths: &[usize], right_aligned: &[bool]) -> String {
    let markers: Vec<String> = widths
        .iter()
        .zip(right_aligned)
        .map(|(&width, &right)| {
            let dashes = "-".repeat(width + 1);
            if right {
                format!("{}:", dashes)
            } else {
                format!(":{}", dashes)
            }
        })
        .collect();
    format!("|{}|", markers.join("|"))
}

fn pad_cell(cell: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    if right {
        format!("{}{}", fill, cell)
    } else {
        format!("{}{}", cell, fill)
    }
}
