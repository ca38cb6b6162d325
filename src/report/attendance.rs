//! Attendance sheet ("Controle de Frequência") layout.

use super::canvas::{CM, Canvas, Face, ImageOp, PageGeometry, ReportLayout};
use super::table::{HEADER_GAP, TableSpec, draw_signatures, draw_table, rows_per_page};
use crate::config::ReportConfig;
use crate::config::report::MAX_LETTERHEAD_LINES;
use crate::models::{AttendanceRecord, Record};

pub const HEADERS: [&str; 6] = [
    "Data",
    "Entrada",
    "Saída",
    "Horas",
    "Ass. Estagiário",
    "Ass. Supervisor",
];
pub const OFFSETS: [f32; 6] = [0.0, 3.0 * CM, 6.0 * CM, 9.0 * CM, 11.0 * CM, 15.0 * CM];
pub const ROW_HEIGHT: f32 = 0.6 * CM;

const LETTERHEAD_OFFSETS: [f32; MAX_LETTERHEAD_LINES] = [0.3 * CM, 1.0 * CM, 1.7 * CM];
const LOGO_WIDTH: f32 = 4.0 * CM;

/// Row capacity of the first and of every continuation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCapacity {
    pub first: usize,
    pub continuation: usize,
}

impl PageCapacity {
    /// Pages needed for `rows` table rows plus the signature footer.
    ///
    /// A page filled to its last slot pushes the footer to one more page.
    pub fn pages_for(&self, rows: usize) -> usize {
        if rows < self.first {
            return 1;
        }
        2 + (rows - self.first) / self.continuation
    }
}

/// Cursor of the column header row on the first page.
fn header_row_y(geometry: &PageGeometry) -> f32 {
    let mut y = geometry.top();
    y -= 5.0 * CM;
    y -= 0.7 * CM;
    y -= 0.7 * CM;
    y -= 1.5 * CM;
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

/// Lay out one intern's attendance sheet.
///
/// `logo_size` is the pixel size of the configured logo, when one could be
/// loaded; it only drives the aspect ratio of the placed image.
pub fn layout(
    cfg: &ReportConfig,
    geometry: PageGeometry,
    subject: &str,
    records: &[AttendanceRecord],
    period: &str,
    logo_size: Option<(u32, u32)>,
) -> ReportLayout {
    let mut c = Canvas::new(geometry);
    let margin = geometry.margin;
    let cx = geometry.center_x();
    let top = c.y;

    if let Some((w, h)) = logo_size.filter(|(w, h)| *w > 0 && *h > 0) {
        let height = LOGO_WIDTH * h as f32 / w as f32;
        c.draw_image(ImageOp {
            x: margin,
            y: top - 3.0 * CM,
            width: LOGO_WIDTH,
            height,
        });
    }

    c.set_font(Face::Bold, 11.0);
    for (line, offset) in cfg.letterhead.iter().zip(LETTERHEAD_OFFSETS) {
        c.draw_centred_string(cx, top - offset, line.as_str());
    }

    c.set_font(Face::Bold, 14.0);
    c.draw_centred_string(cx, top - 3.3 * CM, cfg.attendance_title.as_str());

    c.set_font(Face::Regular, 11.0);
    c.y -= 5.0 * CM;
    let y = c.y;
    c.draw_string(margin, y, format!("Local do Estágio: {}", cfg.site));
    c.y -= 0.7 * CM;
    let y = c.y;
    c.draw_string(margin, y, format!("Nome do Estagiário: {subject}"));
    c.y -= 0.7 * CM;
    let y = c.y;
    c.draw_string(margin, y, format!("Período do Estágio: {period}"));
    c.y -= 1.5 * CM;

    let rows: Vec<Vec<String>> = records
        .iter()
        .filter(|r| r.subject() == subject)
        .map(|r| {
            vec![
                r.date_str(),
                r.time_in_str(),
                r.time_out_str(),
                r.hours_str(),
                r.intern_signature.clone(),
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

    draw_signatures(&mut c, &["Assinatura do Supervisor", "Assinatura do Professor"]);

    c.set_font(Face::Oblique, 8.0);
    c.draw_centred_string(cx, 1.5 * CM, cfg.footer_address.as_str());

    c.finish()
}
