//! Report builders: typed records in, display tables with renamed columns and
//! a synthetic totals row out.

pub mod attendance;
pub mod history;
pub mod listing;

use serde::Serialize;
use serde_json::Value;

/// Columns in display order plus rows of JSON cells.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DisplayTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl DisplayTable {
    pub fn new(columns: &[&str]) -> Self {
        DisplayTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Fixed-width text rendering, used for log output.
    pub fn render(&self) -> String {
        let cells: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, header)| {
                cells
                    .iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        for (header, width) in self.columns.iter().zip(&widths) {
            out.push_str(&format!("{:<width$} ", header, width = width));
        }
        out.push('\n');
        for row in &cells {
            for (cell, width) in row.iter().zip(&widths) {
                out.push_str(&format!("{:<width$} ", cell, width = width));
            }
            out.push('\n');
        }
        out
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub hours: f64,
}

/// A display table whose last row is the synthetic totals row.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub table: DisplayTable,
    pub totals: Totals,
}
