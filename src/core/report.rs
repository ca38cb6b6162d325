use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{ActivityRecord, AttendanceRecord, Record, RecordKind};
use crate::report::{
    REPORT_MEDIA_TYPE, ensure_writable, render_activity_report, render_attendance_report,
    report_file_name,
};
use crate::store::{RecordSet, Source, Store};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::PathBuf;
use tracing::info as log_info;

/// One report generation request.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub kind: RecordKind,
    pub subject: String,
    /// Explicit "Período do Estágio" label (attendance only)
    pub period: Option<String>,
    pub out_dir: PathBuf,
    pub force: bool,
    pub source: Source,
}

/// A written report.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub path: PathBuf,
    pub media_type: &'static str,
    pub size: usize,
}

pub struct ReportLogic;

impl ReportLogic {
    /// Generate and write the requested report.
    ///
    /// Returns `Ok(None)` when there is nothing to print: no records at all,
    /// or none for the selected intern.
    pub fn generate(
        store: &Store<'_>,
        cfg: &Config,
        req: &ReportRequest,
    ) -> AppResult<Option<ReportFile>> {
        let bytes = match req.kind {
            RecordKind::Attendance => {
                let set = store.load_from::<AttendanceRecord>(req.source)?;
                let Some(rows) = select_subject(&set, &req.subject) else {
                    return Ok(None);
                };
                render_attendance_report(&cfg.report, &req.subject, &rows, req.period.as_deref())
            }
            RecordKind::Diary => {
                let set = store.load_from::<ActivityRecord>(req.source)?;
                let Some(rows) = select_subject(&set, &req.subject) else {
                    return Ok(None);
                };
                render_activity_report(&cfg.report, &req.subject, &rows)
            }
        };

        let path = req
            .out_dir
            .join(report_file_name(req.kind, &req.subject));
        ensure_writable(&path, req.force)?;

        fs::create_dir_all(&req.out_dir)?;
        fs::write(&path, &bytes)?;

        log_info!(path = %path.display(), bytes = bytes.len(), "report written");
        success(format!(
            "{} report written: {} ({})",
            req.kind.label(),
            path.display(),
            REPORT_MEDIA_TYPE
        ));

        Ok(Some(ReportFile {
            path,
            media_type: REPORT_MEDIA_TYPE,
            size: bytes.len(),
        }))
    }
}

/// The intern's rows, or `None` after telling the user why there is nothing
/// to print.
fn select_subject<R: Record>(set: &RecordSet<R>, subject: &str) -> Option<Vec<R>> {
    if set.is_empty() {
        warning("No records found to generate the PDF.");
        return None;
    }

    let rows = set.for_subject(subject);
    if rows.is_empty() {
        info(format!("No records for '{subject}'."));
        let names = set.subjects();
        if !names.is_empty() {
            info(format!("Available interns: {}", names.join(", ")));
        }
        return None;
    }

    Some(rows)
}
