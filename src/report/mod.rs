// src/report/mod.rs

pub mod attendance;
pub mod canvas;
pub mod diary;
mod fs_utils;
pub mod logo;
pub mod pdf;
pub mod period;
pub mod table;

pub use canvas::{PageGeometry, ReportLayout};
pub use fs_utils::ensure_writable;
pub use period::{derive_period, period_label};

use crate::config::ReportConfig;
use crate::models::{ActivityRecord, AttendanceRecord, RecordKind};
use crate::utils::path::expand_tilde;
use crate::utils::text::file_slug;
use logo::Logo;
use pdf::PdfManager;
use tracing::warn;

/// Media type of every generated report.
pub const REPORT_MEDIA_TYPE: &str = "application/pdf";

/// Render one intern's attendance sheet to PDF bytes.
///
/// Records of other interns are skipped. `period` falls back to the span of
/// the intern's dates when absent or blank.
pub fn render_attendance_report(
    cfg: &ReportConfig,
    subject: &str,
    records: &[AttendanceRecord],
    period: Option<&str>,
) -> Vec<u8> {
    let own: Vec<AttendanceRecord> = records
        .iter()
        .filter(|r| r.name == subject)
        .cloned()
        .collect();
    let label = period_label(period, &own);
    let logo = load_logo(cfg);

    let layout = attendance::layout(
        cfg,
        PageGeometry::a4(),
        subject,
        &own,
        &label,
        logo.as_ref().map(Logo::size),
    );
    write_pdf(&layout, logo.as_ref())
}

/// Render one intern's field diary to PDF bytes.
pub fn render_activity_report(
    cfg: &ReportConfig,
    subject: &str,
    records: &[ActivityRecord],
) -> Vec<u8> {
    let layout = diary::layout(cfg, PageGeometry::a4(), subject, records);
    write_pdf(&layout, None)
}

/// `controle_frequencia_Ana_Souza.pdf`, `diario_campo_Ana_Souza.pdf`
pub fn report_file_name(kind: RecordKind, subject: &str) -> String {
    let prefix = match kind {
        RecordKind::Attendance => "controle_frequencia",
        RecordKind::Diary => "diario_campo",
    };
    format!("{prefix}_{}.pdf", file_slug(subject))
}

fn write_pdf(layout: &ReportLayout, logo: Option<&Logo>) -> Vec<u8> {
    let mut pdf = PdfManager::new();
    if let Some(l) = logo {
        pdf.embed_logo(l);
    }
    pdf.write_layout(layout);
    pdf.finish()
}

/// A missing or unreadable logo is skipped, not fatal.
fn load_logo(cfg: &ReportConfig) -> Option<Logo> {
    let path = expand_tilde(cfg.logo_path.as_deref()?);
    if !path.exists() {
        return None;
    }
    match Logo::load(&path) {
        Ok(logo) => Some(logo),
        Err(e) => {
            warn!(error = %e, "logo skipped");
            None
        }
    }
}
