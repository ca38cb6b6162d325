//! Path utilities: expand ~ and resolve output locations.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Output directory given on the command line, or the working directory.
pub fn output_dir(requested: Option<&str>) -> PathBuf {
    match requested {
        Some(dir) => expand_tilde(dir),
        None => PathBuf::from("."),
    }
}
