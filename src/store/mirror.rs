//! Local CSV mirror: header row first, display column names.

use crate::errors::AppResult;
use crate::models::{Record, RecordKind};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Create the mirror with only its header row if it does not exist.
/// Returns `true` when the file was created.
pub fn ensure(path: &Path, kind: RecordKind) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(kind.columns())?;
    wtr.flush()?;
    Ok(true)
}

pub fn read<R: Record>(path: &Path) -> AppResult<Vec<R>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();

    for rec in rdr.deserialize() {
        rows.push(rec?);
    }

    Ok(rows)
}

/// Append a single row at the end of the mirror.
pub fn append<R: Record>(path: &Path, record: &R) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(path)?;

    let len = file.metadata()?.len();
    if len > 0 && !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if len == 0 {
        wtr.write_record(R::KIND.columns())?;
    }

    wtr.serialize(record)?;
    wtr.flush()?;
    Ok(())
}

/// Number of data rows (header excluded).
pub fn count_rows(path: &Path) -> AppResult<usize> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut n = 0;
    for rec in rdr.records() {
        rec?;
        n += 1;
    }
    Ok(n)
}

fn ends_with_newline(file: &mut File) -> AppResult<bool> {
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
