//! Table rendering utilities for CLI outputs.

use super::text::{display_width, ellipsize, pad_right};

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Columns sized to fit headers and rows, each capped at `max_width`.
    pub fn fitted(headers: &[&str], rows: Vec<Vec<String>>, max_width: usize) -> Self {
        let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();

        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(display_width(cell));
                }
            }
        }

        let columns = headers
            .iter()
            .zip(widths)
            .map(|(h, w)| Column {
                header: h.to_string(),
                width: w.min(max_width),
            })
            .collect();

        Self { columns, rows }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_right(&col.header, col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_right(&ellipsize(cell, col.width), col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}
