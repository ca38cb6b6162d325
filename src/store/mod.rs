//! Record store adapter: the local CSV mirror plus the remote table.
//!
//! Reads prefer the mirror when it exists; writes go to both sinks
//! independently (mirror first, then remote) with no rollback between them.

pub mod mirror;
pub mod remote;

pub use remote::{RemoteStore, Row, SupabaseClient};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Record, RecordKind};
use clap::ValueEnum;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Where `load` reads from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Source {
    /// Local mirror if present, remote table otherwise
    #[default]
    Auto,
    /// Local mirror only
    Local,
    /// Remote table only
    Remote,
}

/// A loaded collection: the canonical column set plus typed rows.
///
/// The column set is always present, even when there are no rows.
#[derive(Debug, Clone)]
pub struct RecordSet<R> {
    columns: Vec<&'static str>,
    rows: Vec<R>,
}

impl<R: Record> RecordSet<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            columns: R::KIND.columns(),
            rows,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows of one intern, in stored order.
    pub fn for_subject(&self, subject: &str) -> Vec<R> {
        self.rows
            .iter()
            .filter(|r| r.subject() == subject)
            .cloned()
            .collect()
    }

    /// Distinct non-empty intern names, sorted.
    pub fn subjects(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|r| r.subject().trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

pub struct Store<'a> {
    cfg: &'a Config,
    remote: &'a dyn RemoteStore,
}

impl<'a> Store<'a> {
    pub fn new(cfg: &'a Config, remote: &'a dyn RemoteStore) -> Self {
        Self { cfg, remote }
    }

    /// Create any missing mirror file with its canonical header row.
    pub fn ensure_mirrors(&self) -> AppResult<()> {
        for kind in [RecordKind::Attendance, RecordKind::Diary] {
            let path = self.cfg.mirror_path(kind);
            if mirror::ensure(&path, kind)? {
                info!(kind = kind.as_str(), path = %path.display(), "created local mirror");
            }
        }
        Ok(())
    }

    pub fn load<R: Record>(&self) -> AppResult<RecordSet<R>> {
        self.load_from(Source::Auto)
    }

    pub fn load_from<R: Record>(&self, source: Source) -> AppResult<RecordSet<R>> {
        let kind = R::KIND;
        let path = self.cfg.mirror_path(kind);

        let use_mirror = match source {
            Source::Local => true,
            Source::Remote => false,
            Source::Auto => path.exists(),
        };

        if use_mirror {
            if !path.exists() {
                return Ok(RecordSet::empty());
            }
            let rows = mirror::read::<R>(&path)?;
            debug!(kind = kind.as_str(), rows = rows.len(), "loaded from local mirror");
            return Ok(RecordSet::new(rows));
        }

        let table = self.cfg.table(kind);
        let raw = self.remote.select_all(table)?;
        debug!(kind = kind.as_str(), table, rows = raw.len(), "loaded from remote store");

        let rows = raw
            .into_iter()
            .map(from_storage_row::<R>)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(RecordSet::new(rows))
    }

    /// Persist one record to the mirror, then to the remote table.
    ///
    /// A remote failure is returned after the mirror row has been written.
    pub fn append<R: Record>(&self, record: &R) -> AppResult<()> {
        let kind = R::KIND;

        let path = self.cfg.mirror_path(kind);
        mirror::append(&path, record)?;
        debug!(kind = kind.as_str(), path = %path.display(), "appended to local mirror");

        let payload = to_storage_row(record)?;
        let table = self.cfg.table(kind);
        self.remote.insert(table, &payload)?;
        info!(kind = kind.as_str(), table, subject = record.subject(), "record stored");

        Ok(())
    }
}

/// Display-schema record → storage-schema payload.
pub fn to_storage_row<R: Record>(record: &R) -> AppResult<Row> {
    let kind = R::KIND;
    let Value::Object(display) = serde_json::to_value(record)? else {
        return Err(AppError::Other(format!(
            "{} record did not serialize to an object",
            kind.as_str()
        )));
    };

    display
        .into_iter()
        .map(|(k, v)| match kind.to_storage(&k) {
            Some(storage) => Ok((storage.to_string(), v)),
            None => Err(AppError::Other(format!(
                "column '{k}' has no storage field for {}",
                kind.as_str()
            ))),
        })
        .collect()
}

/// Storage-schema row → display-schema record. Fields outside the mapping
/// (ids, timestamps added by the remote table) are dropped.
pub fn from_storage_row<R: Record>(row: Row) -> AppResult<R> {
    let kind = R::KIND;
    let display: Row = row
        .into_iter()
        .filter_map(|(k, v)| kind.to_display(&k).map(|d| (d.to_string(), v)))
        .collect();

    Ok(serde_json::from_value(Value::Object(display))?)
}
