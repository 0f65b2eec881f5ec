use std::fmt;

use crate::presentation::view_models::TableView;

/// Plain-text rendering of a table, columns separated by ` | `.
pub struct TableTextView<'a> {
    data: &'a TableView,
}

impl<'a> TableTextView<'a> {
    pub fn new(data: &'a TableView) -> Self {
        Self { data }
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .data
            .headers
            .iter()
            .map(|header| header.chars().count())
            .collect();

        for row in &self.data.rows {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

impl<'a> fmt::Display for TableTextView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.title)?;

        if self.data.rows.is_empty() {
            writeln!(f, "No records.")?;
            return Ok(());
        }

        let widths = self.column_widths();
        write_line(f, &self.data.headers, &widths)?;

        let separator: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        writeln!(f, "{}", separator.join("-+-"))?;

        for row in &self.data.rows {
            write_line(f, &row.cells, &widths)?;
        }

        Ok(())
    }
}

fn write_line(f: &mut fmt::Formatter, cells: &[String], widths: &[usize]) -> fmt::Result {
    let last = cells.len().saturating_sub(1);

    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index == last {
            write!(f, "{}", cell)?;
        } else {
            write!(f, "{:<width$} | ", cell, width = *width)?;
        }
    }
    writeln!(f)
}
