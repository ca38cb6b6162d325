//! "Período do Estágio" label of the attendance sheet.

use crate::models::AttendanceRecord;
use crate::utils::date::{format_br, parse_date};

/// `DD/MM/YYYY a DD/MM/YYYY` spanning the earliest and latest date.
///
/// Returns an empty string when there are no dates or when any of them
/// cannot be parsed; a missing period never blocks a report.
pub fn derive_period<I, S>(dates: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut bounds = None;

    for raw in dates {
        let Some(d) = parse_date(raw.as_ref()) else {
            return String::new();
        };
        bounds = match bounds {
            None => Some((d, d)),
            Some((lo, hi)) => Some((d.min(lo), d.max(hi))),
        };
    }

    match bounds {
        Some((lo, hi)) => format!("{} a {}", format_br(lo), format_br(hi)),
        None => String::new(),
    }
}

/// An explicit, non-blank label wins; otherwise derive it from the records.
pub fn period_label(explicit: Option<&str>, records: &[AttendanceRecord]) -> String {
    match explicit.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => p.to_string(),
        None => derive_period(records.iter().map(|r| r.date_str())),
    }
}
