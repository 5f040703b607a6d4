use chrono::{Datelike, NaiveDate};
use directories::BaseDirs;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

pub const MONTH_FILE_EXTENSION: &str = "md";

/// `2024-03`
pub fn month_key(date: &impl Datelike) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// `2024-03.md`
pub fn month_file_name(date: &impl Datelike) -> String {
    format!("{}.{MONTH_FILE_EXTENSION}", month_key(date))
}

pub fn month_path(root: &Path, date: &impl Datelike) -> PathBuf {
    root.join(month_file_name(date))
}

/// Returns the `YYYY-MM` key of a monthly file, or `None` for any other file.
pub fn month_key_from_path(path: &Path) -> Option<String> {
    let is_md = path
        .extension()
        .and_then(OsStr::to_str)
        .map(|ext| ext.eq_ignore_ascii_case(MONTH_FILE_EXTENSION))
        .unwrap_or(false);
    if !is_md {
        return None;
    }
    let stem = path.file_stem().and_then(OsStr::to_str)?;
    NaiveDate::parse_from_str(&format!("{stem}-01"), "%Y-%m-%d")
        .ok()
        .filter(|date| month_key(date) == stem)
        .map(|_| stem.to_string())
}

/// Expands a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match BaseDirs::new() {
        Some(base) => base.home_dir().join(rest),
        None => path.to_path_buf(),
    }
}
