use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Parse a date typed on the command line.
///
/// Accepts `YYYY-MM-DD` (the storage format) and `DD/MM/YYYY`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}

/// Brazilian short form used in printed reports: `13/08/2025`.
pub fn format_br(d: NaiveDate) -> String {
    d.format("%d/%m/%Y").to_string()
}
