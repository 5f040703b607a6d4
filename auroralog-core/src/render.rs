//! Pure text rendering of entry blocks.
//!
//! Block:
//!   ### 2024-03-05T08:00:00
//!   Tags: calm, outside
//!   Body…
//!
//! Nothing is escaped. A body line starting with `### ` or `Tags:`, or a tag
//! containing a comma, will not survive a read-back.

use crate::dates::format_timestamp;
use crate::entry::{Entry, normalize_tags};

pub const HEADER_MARKER: &str = "### ";
pub const TAGS_MARKER: &str = "Tags:";
/// Written in place of an empty tag list.
pub const NO_TAGS: &str = "none";

/// `### 2024-03-05T08:00:00`
pub fn format_header(entry: &Entry) -> String {
    format!("{HEADER_MARKER}{}", format_timestamp(entry.timestamp))
}

/// `Tags: calm, outside` or `Tags: none`
pub fn format_tags_line(tags: &[String]) -> String {
    let tags = normalize_tags(tags);
    if tags.is_empty() {
        format!("{TAGS_MARKER} {NO_TAGS}")
    } else {
        format!("{TAGS_MARKER} {}", tags.join(", "))
    }
}

/// Render an entry block, terminated by a single newline.
pub fn format_entry_block(entry: &Entry) -> String {
    let header = format_header(entry);
    let tags = format_tags_line(&entry.tags);
    let body = entry.body.trim();
    format!("{header}\n{tags}\n{body}\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(body: &str, tags: &[&str]) -> Entry {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Entry::new(ts, body, tags.iter().copied())
    }

    #[test]
    fn block_with_tags_and_body() {
        let s = format_entry_block(&entry("  Walked outside.\n\n", &["calm"]));
        assert_eq!(s, "### 2024-03-05T08:00:00\nTags: calm\nWalked outside.\n");
    }

    #[test]
    fn block_without_tags_says_none() {
        let s = format_entry_block(&entry("Quiet.", &[]));
        assert!(s.contains("\nTags: none\n"));
    }

    #[test]
    fn tags_line_normalizes_raw_tags() {
        let raw: Vec<String> = vec![" work ".into(), " life".into(), "".into()];
        assert_eq!(format_tags_line(&raw), "Tags: work, life");
    }

    #[test]
    fn multi_line_body_keeps_inner_layout() {
        let s = format_entry_block(&entry("first\n\n  indented", &["a", "b"]));
        assert!(s.ends_with("Tags: a, b\nfirst\n\n  indented\n"));
    }
}
