use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, AttendanceRecord, Record};
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::{hours_between, parse_optional_time};
use chrono::NaiveTime;
use tracing::debug;

/// Raw attendance submission, as typed on the command line.
#[derive(Debug, Clone, Default)]
pub struct AttendanceInput {
    pub name: String,
    pub date: Option<String>,
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub hours: Option<f64>,
    pub intern_signature: String,
    pub supervisor_signature: String,
}

/// Raw field-diary submission.
#[derive(Debug, Clone, Default)]
pub struct ActivityInput {
    pub name: String,
    pub date: Option<String>,
    pub activity: String,
    pub supervisor_signature: String,
}

/// High-level business logic for the record-entry commands.
pub struct RecordLogic;

impl RecordLogic {
    /// Default shift of the internship: 07:00 → 13:00.
    pub fn default_time_in() -> NaiveTime {
        NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    pub fn default_time_out() -> NaiveTime {
        NaiveTime::from_hms_opt(13, 0, 0).unwrap_or(NaiveTime::MIN)
    }

    /// Validate an attendance submission.
    ///
    /// Missing date means today; missing hours are derived from the shift.
    pub fn build_attendance(input: &AttendanceInput) -> AppResult<AttendanceRecord> {
        let date = parse_date_or_today(input.date.as_deref())?;
        let time_in =
            parse_optional_time(input.time_in.as_ref())?.unwrap_or_else(Self::default_time_in);
        let time_out =
            parse_optional_time(input.time_out.as_ref())?.unwrap_or_else(Self::default_time_out);

        let hours = match input.hours {
            Some(h) => h,
            None => hours_between(time_in, time_out),
        };
        if !hours.is_finite() || hours < 0.0 {
            return Err(AppError::InvalidHours(format!(
                "{hours} (must be zero or more; check --in/--out or --hours)"
            )));
        }

        Ok(AttendanceRecord {
            name: input.name.trim().to_string(),
            date,
            time_in,
            time_out,
            hours,
            intern_signature: input.intern_signature.clone(),
            supervisor_signature: input.supervisor_signature.clone(),
        })
    }

    pub fn build_activity(input: &ActivityInput) -> AppResult<ActivityRecord> {
        let date = parse_date_or_today(input.date.as_deref())?;

        Ok(ActivityRecord {
            name: input.name.trim().to_string(),
            date,
            activity: input.activity.clone(),
            supervisor_signature: input.supervisor_signature.clone(),
        })
    }

    /// Persist to both sinks and confirm.
    pub fn save<R: Record>(store: &Store<'_>, record: &R) -> AppResult<()> {
        debug!(kind = R::KIND.as_str(), subject = record.subject(), "saving record");
        store.append(record)?;
        success(format!(
            "{} record saved for {} on {}.",
            R::KIND.label(),
            record.subject(),
            record.date()
        ));
        Ok(())
    }
}

fn parse_date_or_today(raw: Option<&str>) -> AppResult<chrono::NaiveDate> {
    match raw {
        None => Ok(date::today()),
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}
