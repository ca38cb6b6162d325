//! Column-labeled table drawing with bottom-threshold pagination.

use super::canvas::{CM, Canvas, Face};

/// Pages break once the cursor falls below this height.
pub const BOTTOM_THRESHOLD: f32 = 3.0 * CM;

/// Gap between the column header row and the first data row.
pub const HEADER_GAP: f32 = 0.5 * CM;

pub const TABLE_FONT_SIZE: f32 = 10.0;

/// Column positions and row height of one report table.
pub struct TableSpec<'a> {
    pub headers: &'a [&'a str],
    /// Horizontal offsets from the left margin, one per column
    pub offsets: &'a [f32],
    pub row_height: f32,
    /// Redraw the header row at the top of continuation pages
    pub repeat_header: bool,
}

/// Rows that fit on a page when the first one is drawn at `start_y`.
pub fn rows_per_page(start_y: f32, row_height: f32) -> usize {
    let mut y = start_y;
    let mut n = 0;
    while y >= BOTTOM_THRESHOLD {
        n += 1;
        y -= row_height;
    }
    n
}

/// Draw the header row at the cursor, then every row, breaking pages as
/// needed. The cursor is left below the last row.
pub fn draw_table(canvas: &mut Canvas, spec: &TableSpec<'_>, rows: &[Vec<String>]) {
    let left = canvas.geometry().margin;

    draw_header(canvas, spec, left);
    canvas.set_font(Face::Regular, TABLE_FONT_SIZE);

    for row in rows {
        if canvas.y < BOTTOM_THRESHOLD {
            canvas.show_page();
            if spec.repeat_header {
                draw_header(canvas, spec, left);
            }
            canvas.set_font(Face::Regular, TABLE_FONT_SIZE);
        }

        let y = canvas.y;
        for (cell, offset) in row.iter().zip(spec.offsets) {
            canvas.draw_string(left + offset, y, cell.as_str());
        }
        canvas.y -= spec.row_height;
    }
}

fn draw_header(canvas: &mut Canvas, spec: &TableSpec<'_>, left: f32) {
    canvas.set_font(Face::Bold, TABLE_FONT_SIZE);
    let y = canvas.y;
    for (label, offset) in spec.headers.iter().zip(spec.offsets) {
        canvas.draw_string(left + offset, y, *label);
    }
    canvas.y -= HEADER_GAP;
}

/// Signature placeholders at a fixed height above the bottom edge.
///
/// A table that filled the page down to its lowest slot leaves the cursor
/// below the threshold; the footer then goes on a fresh page so it never
/// overlaps the last row.
pub fn draw_signatures(canvas: &mut Canvas, lines: &[&str]) {
    let left = canvas.geometry().margin;
    if canvas.y < BOTTOM_THRESHOLD {
        canvas.show_page();
    }
    canvas.y = BOTTOM_THRESHOLD;
    for line in lines {
        let y = canvas.y;
        canvas.draw_string(left, y, format!("{line}: ______________________________"));
        canvas.y -= CM;
    }
}
