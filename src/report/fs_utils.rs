// src/report/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Answers accepted as "overwrite", in English and Portuguese.
const YES: [&str; 4] = ["y", "yes", "s", "sim"];

/// Make sure a report may be written at `path`.
///
/// A missing file, or `force`, is always fine. An existing report is only
/// replaced after the user confirms on stdin; anything else keeps it.
pub fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("Report '{}' is already there.", path.display()));
    print!("Replace it? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;

    if YES.contains(&answer.trim().to_lowercase().as_str()) {
        info("The previous report will be replaced.");
        return Ok(());
    }

    Err(AppError::Report(format!(
        "not overwritten: {}",
        path.display()
    )))
}
