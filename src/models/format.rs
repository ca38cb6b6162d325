//! Serde helpers for the value formats shared by the local mirror and the
//! remote store: dates as `YYYY-MM-DD`, times as `HH:MM:SS`.

use chrono::{NaiveDate, NaiveTime};

pub const DATE_FMT: &str = "%Y-%m-%d";
pub const TIME_FMT: &str = "%H:%M:%S";

/// Formats accepted when reading a time-of-day. Older mirrors and manual
/// edits often carry `HH:MM` only.
const TIME_INPUT_FMTS: &[&str] = &["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

pub fn parse_time_flexible(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    TIME_INPUT_FMTS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

pub fn parse_date_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// Hours as written in the mirror and shown in reports: `6.0`, `6.5`, `7.25`.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.1}", hours)
    } else {
        format!("{}", hours)
    }
}

pub mod date_format {
    use super::{DATE_FMT, parse_date_iso};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(DATE_FMT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        parse_date_iso(&raw).ok_or_else(|| D::Error::custom(format!("invalid date '{raw}'")))
    }
}

pub mod time_format {
    use super::{TIME_FMT, parse_time_flexible};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(TIME_FMT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_time_flexible(&raw).ok_or_else(|| D::Error::custom(format!("invalid time '{raw}'")))
    }
}
