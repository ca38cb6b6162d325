//! Field diary ("Diário de Campo") layout.

use super::attendance::PageCapacity;
use super::canvas::{CM, Canvas, Face, PageGeometry, ReportLayout};
use super::table::{HEADER_GAP, TableSpec, draw_signatures, draw_table, rows_per_page};
use crate::config::ReportConfig;
use crate::models::{ActivityRecord, Record};
use crate::utils::text::truncate_chars;

pub const HEADERS: [&str; 3] = ["Data", "Atividade", "Ass. Supervisor"];
pub const OFFSETS: [f32; 3] = [0.0, 3.5 * CM, 14.0 * CM];
pub const ROW_HEIGHT: f32 = 0.7 * CM;

fn header_row_y(geometry: &PageGeometry) -> f32 {
    let mut y = geometry.top();
    y -= CM;
    y -= 1.2 * CM;
    y
}

pub fn capacity(geometry: &PageGeometry, repeat_header: bool) -> PageCapacity {
    let continuation_start = if repeat_header {
        geometry.top() - HEADER_GAP
    } else {
        geometry.top()
    };
    PageCapacity {
        first: rows_per_page(header_row_y(geometry) - HEADER_GAP, ROW_HEIGHT),
        continuation: rows_per_page(continuation_start, ROW_HEIGHT),
    }
}

/// Lay out one intern's field diary. Descriptions are cut, never wrapped.
pub fn layout(
    cfg: &ReportConfig,
    geometry: PageGeometry,
    subject: &str,
    records: &[ActivityRecord],
) -> ReportLayout {
    let mut c = Canvas::new(geometry);
    let margin = geometry.margin;

    c.set_font(Face::Bold, 12.0);
    let y = c.y;
    c.draw_centred_string(geometry.center_x(), y, cfg.diary_title.as_str());
    c.y -= CM;

    c.set_font(Face::Regular, 11.0);
    let y = c.y;
    c.draw_string(margin, y, format!("Nome do Estagiário: {subject}"));
    c.y -= 1.2 * CM;

    let rows: Vec<Vec<String>> = records
        .iter()
        .filter(|r| r.subject() == subject)
        .map(|r| {
            vec![
                r.date_str(),
                truncate_chars(&r.activity, cfg.truncate_activity),
                r.supervisor_signature.clone(),
            ]
        })
        .collect();

    let spec = TableSpec {
        headers: &HEADERS,
        offsets: &OFFSETS,
        row_height: ROW_HEIGHT,
        repeat_header: cfg.repeat_table_header,
    };
    draw_table(&mut c, &spec, &rows);

    draw_signatures(&mut c, &["Assinatura do Supervisor"]);

    c.finish()
}
