use super::format::{DATE_FMT, date_format};
use super::{Record, RecordKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One field-diary line: what the intern did on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Data", with = "date_format")]
    pub date: NaiveDate,
    #[serde(rename = "Atividade")]
    pub activity: String,
    #[serde(rename = "Assinatura Supervisor")]
    pub supervisor_signature: String,
}

impl ActivityRecord {
    pub fn date_str(&self) -> String {
        self.date.format(DATE_FMT).to_string()
    }
}

impl Record for ActivityRecord {
    const KIND: RecordKind = RecordKind::Diary;

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
            self.activity.clone(),
            self.supervisor_signature.clone(),
        ]
    }
}
