use super::format::{DATE_FMT, TIME_FMT, date_format, format_hours, time_format};
use super::{Record, RecordKind};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One attendance-sheet line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Data", with = "date_format")]
    pub date: NaiveDate,
    #[serde(rename = "Entrada", with = "time_format")]
    pub time_in: NaiveTime,
    #[serde(rename = "Saída", with = "time_format")]
    pub time_out: NaiveTime,
    #[serde(rename = "Horas")]
    pub hours: f64,
    #[serde(rename = "Assinatura Estagiário")]
    pub intern_signature: String,
    #[serde(rename = "Assinatura Supervisor")]
    pub supervisor_signature: String,
}

impl AttendanceRecord {
    pub fn date_str(&self) -> String {
        self.date.format(DATE_FMT).to_string()
    }

    pub fn time_in_str(&self) -> String {
        self.time_in.format(TIME_FMT).to_string()
    }

    pub fn time_out_str(&self) -> String {
        self.time_out.format(TIME_FMT).to_string()
    }

    pub fn hours_str(&self) -> String {
        format_hours(self.hours)
    }
}

impl Record for AttendanceRecord {
    const KIND: RecordKind = RecordKind::Attendance;

    fn subject(&self) -> &str {
        &self.name
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn to_row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.date_str(),
            self.time_in_str(),
            self.time_out_str(),
            self.hours_str(),
            self.intern_signature.clone(),
            self.supervisor_signature.clone(),
        ]
    }
}
