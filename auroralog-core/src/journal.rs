//! The core `Journal` struct: a directory of append-only monthly files.

use crate::config::Config;
use crate::entry::Entry;
use crate::error::{JournalError, Result};
use crate::parse_entries::parse_month_file;
use crate::paths::{month_key_from_path, month_path};
use crate::render::format_entry_block;
use chrono::Datelike;
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;
use tracing::debug;

/// The central struct for all journal operations.
///
/// Every entry of a calendar month lives in `{journal_dir}/YYYY-MM.md`, in the
/// order it was appended. Nothing is cached: reads always re-parse the file.
#[derive(Debug)]
pub struct Journal {
    pub config: Config,
}

impl Journal {
    /// Creates a new `Journal` instance with a specific `Config`.
    ///
    /// This also ensures that the journal's root directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.journal_dir)
            .map_err(|e| JournalError::io(&config.journal_dir, e))?;
        Ok(Self { config })
    }

    /// Path of the file holding the month of `date`.
    pub fn month_path(&self, date: &impl Datelike) -> PathBuf {
        month_path(&self.config.journal_dir, date)
    }

    /// Appends `entry` to its monthly file and returns that file's path.
    ///
    /// The file (and any missing parent directory) is created on demand;
    /// existing content is never rewritten. A file whose last line lacks its
    /// newline gets one first, so the new header starts its own line.
    pub fn append(&self, entry: &Entry) -> Result<PathBuf> {
        let path = self.month_path(&entry.timestamp);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| JournalError::io(parent, e))?;
        }

        let mut f = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)
            .map_err(|e| JournalError::io(&path, e))?;

        let mid_line = ends_mid_line(&mut f).map_err(|e| JournalError::io(&path, e))?;
        let separator = if mid_line { "\n" } else { "" };
        let block = format_entry_block(entry);
        writeln!(f, "{separator}{block}").map_err(|e| JournalError::io(&path, e))?;

        debug!(path = %path.display(), timestamp = %entry.timestamp, "appended entry");
        Ok(path)
    }

    /// Reads back every entry of the month containing `date`, in append order.
    ///
    /// A month without a file is empty, not an error. A malformed header fails
    /// the whole month.
    pub fn load(&self, date: &impl Datelike) -> Result<Vec<Entry>> {
        let path = self.month_path(date);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no file for month");
                return Ok(Vec::new());
            }
            Err(e) => return Err(JournalError::io(&path, e)),
        };

        let entries = parse_month_file(&content)?;
        debug!(path = %path.display(), count = entries.len(), "loaded entries");
        Ok(entries)
    }

    /// `YYYY-MM` keys of every monthly file under the root, oldest first.
    pub fn months(&self) -> Result<Vec<String>> {
        let root = &self.config.journal_dir;
        let dir = fs::read_dir(root).map_err(|e| JournalError::io(root, e))?;

        let mut months = Vec::new();
        for item in dir {
            let item = item.map_err(|e| JournalError::io(root, e))?;
            let p = item.path();
            if !p.is_file() {
                continue;
            }
            if let Some(key) = month_key_from_path(&p) {
                months.push(key);
            }
        }
        months.sort();
        Ok(months)
    }
}

/// True when the file is non-empty and its last byte isn't a newline.
fn ends_mid_line(f: &mut File) -> io::Result<bool> {
    if f.metadata()?.len() == 0 {
        return Ok(false);
    }
    let mut last = [0u8; 1];
    f.seek(SeekFrom::End(-1))?;
    f.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
