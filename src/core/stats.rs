//! Aggregates behind the `stats` command: hours per intern and diary
//! validations per supervisor.

use crate::models::{ActivityRecord, AttendanceRecord};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq)]
pub struct InternHours {
    pub name: String,
    pub hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceSummary {
    pub total_hours: f64,
    /// Mean hours per attendance record
    pub mean_hours: f64,
    /// Sum of hours per intern, sorted by name
    pub per_intern: Vec<InternHours>,
    /// Intern owning the single longest record
    pub top_single: String,
    /// `None` when no record carries an intern name
    pub top_total: Option<InternHours>,
    pub bottom_total: Option<InternHours>,
}

impl AttendanceSummary {
    pub fn intern_count(&self) -> usize {
        self.per_intern.len()
    }

    /// Fraction of the total hours logged by `hours`.
    pub fn share(&self, hours: f64) -> f64 {
        if self.total_hours > 0.0 {
            hours / self.total_hours
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupervisorCount {
    pub supervisor: String,
    pub diaries: usize,
}

/// `None` when there is nothing to analyse.
///
/// Records with a blank name count towards totals and the mean but are not
/// attributed to any intern; with only blank names the per-intern part of
/// the summary is empty.
pub fn summarize_attendance(records: &[AttendanceRecord]) -> Option<AttendanceSummary> {
    let first = records.first()?;

    let total_hours: f64 = records.iter().map(|r| r.hours).sum();
    let mean_hours = total_hours / records.len() as f64;

    let mut top = first;
    for r in records {
        if r.hours > top.hours {
            top = r;
        }
    }

    let mut grouped: BTreeMap<&str, f64> = BTreeMap::new();
    for r in records {
        let name = r.name.trim();
        if !name.is_empty() {
            *grouped.entry(name).or_insert(0.0) += r.hours;
        }
    }

    let per_intern: Vec<InternHours> = grouped
        .into_iter()
        .map(|(name, hours)| InternHours {
            name: name.to_string(),
            hours,
        })
        .collect();

    // first of equal maxima / minima, in name order
    let mut top_total: Option<&InternHours> = None;
    let mut bottom_total: Option<&InternHours> = None;
    for ih in &per_intern {
        if top_total.is_none_or(|t| ih.hours > t.hours) {
            top_total = Some(ih);
        }
        if bottom_total.is_none_or(|b| ih.hours < b.hours) {
            bottom_total = Some(ih);
        }
    }
    let top_total = top_total.cloned();
    let bottom_total = bottom_total.cloned();

    Some(AttendanceSummary {
        total_hours,
        mean_hours,
        per_intern,
        top_single: top.name.clone(),
        top_total,
        bottom_total,
    })
}

/// Diary entries per supervisor, most active first. Unsigned entries are
/// not counted.
pub fn count_by_supervisor(records: &[ActivityRecord]) -> Vec<SupervisorCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        let sup = r.supervisor_signature.trim();
        if !sup.is_empty() {
            *counts.entry(sup).or_insert(0) += 1;
        }
    }

    let mut out: Vec<SupervisorCount> = counts
        .into_iter()
        .map(|(supervisor, diaries)| SupervisorCount {
            supervisor: supervisor.to_string(),
            diaries,
        })
        .collect();

    out.sort_by(|a, b| {
        b.diaries
            .cmp(&a.diaries)
            .then_with(|| a.supervisor.cmp(&b.supervisor))
    });
    out
}

/// Horizontal bar proportional to `value / max`, `width` cells at most.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "█".repeat(cells.clamp(1, width))
}
