//! Parses the content of a monthly journal file back into `Entry` objects.

use crate::dates::parse_timestamp;
use crate::entry::{Entry, parse_tags};
use crate::error::{JournalError, Result};
use crate::render::{HEADER_MARKER, NO_TAGS, TAGS_MARKER};
use chrono::NaiveDateTime;
use tracing::debug;

/// Entry being accumulated between two headers.
#[derive(Debug)]
struct PendingBlock {
    timestamp: NaiveDateTime,
    tags: Vec<String>,
    body_lines: Vec<String>,
}

impl PendingBlock {
    fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            tags: Vec::new(),
            body_lines: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        match line.strip_prefix(TAGS_MARKER) {
            Some(rest) => self.tags = parse_tags_value(rest),
            None => self.body_lines.push(line.trim_end().to_string()),
        }
    }

    fn finish(self) -> Entry {
        Entry {
            timestamp: self.timestamp,
            body: self.body_lines.join("\n").trim().to_string(),
            tags: self.tags,
        }
    }
}

#[derive(Debug)]
enum ParseState {
    OutsideBlock,
    InBlock(PendingBlock),
}

/// Parses the full content of a monthly file.
///
/// Blocks start at lines beginning with `### `; the rest of the header line is
/// the entry timestamp. Inside a block a `Tags:` line sets the tags and every
/// other line is body. Lines before the first header are dropped.
///
/// A header whose timestamp can't be parsed fails the whole file.
pub fn parse_month_file(content: &str) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();
    let mut state = ParseState::OutsideBlock;
    let mut discarded = 0usize;

    for (idx, line) in content.lines().enumerate() {
        if let Some(rest) = line.strip_prefix(HEADER_MARKER) {
            let timestamp = parse_timestamp(rest).ok_or_else(|| JournalError::InvalidTimestamp {
                line: idx + 1,
                value: rest.trim().to_string(),
            })?;
            let previous = std::mem::replace(
                &mut state,
                ParseState::InBlock(PendingBlock::new(timestamp)),
            );
            if let ParseState::InBlock(block) = previous {
                entries.push(block.finish());
            }
            continue;
        }

        match &mut state {
            ParseState::OutsideBlock => discarded += 1,
            ParseState::InBlock(block) => block.push_line(line),
        }
    }

    if let ParseState::InBlock(block) = state {
        entries.push(block.finish());
    }
    if discarded > 0 {
        debug!(lines = discarded, "discarded content before first header");
    }
    Ok(entries)
}

fn parse_tags_value(value: &str) -> Vec<String> {
    if value.trim() == NO_TAGS {
        Vec::new()
    } else {
        parse_tags(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn parse_valid_month_file() {
        let content = r#"### 2024-03-05T08:00:00
Tags: calm
Walked outside.

### 2024-03-06T21:30:00
Tags: work, life
Long day.
  Still thinking about it.   

"#;
        let entries = parse_month_file(content).unwrap();
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].timestamp, dt(5, 8, 0));
        assert_eq!(entries[0].tags, vec!["calm"]);
        assert_eq!(entries[0].body, "Walked outside.");

        assert_eq!(entries[1].timestamp, dt(6, 21, 30));
        assert_eq!(entries[1].tags, vec!["work", "life"]);
        assert_eq!(entries[1].body, "Long day.\n  Still thinking about it.");
    }

    #[test]
    fn empty_content_has_no_entries() {
        assert!(parse_month_file("").unwrap().is_empty());
    }

    #[test]
    fn content_without_header_is_dropped() {
        let entries = parse_month_file("just some notes\nTags: x\n").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn preamble_before_first_header_is_dropped() {
        let content = "stray line\n### 2024-03-05T08:00:00\nTags: none\nBody\n";
        let entries = parse_month_file(content).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].body, "Body");
    }

    #[test]
    fn none_tags_and_missing_tags_line_are_empty() {
        let content = "### 2024-03-05T08:00:00\nTags: none\nA\n\n### 2024-03-06T08:00:00\nB\n";
        let entries = parse_month_file(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].tags.is_empty());
        assert!(entries[1].tags.is_empty());
        assert_eq!(entries[1].body, "B");
    }

    #[test]
    fn header_only_block_at_eof_is_kept() {
        let content = "### 2024-03-05T08:00:00\nTags: a\nA\n\n### 2024-03-06T08:00:00";
        let entries = parse_month_file(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].timestamp, dt(6, 8, 0));
        assert!(entries[1].body.is_empty());
    }

    #[test]
    fn tags_line_is_not_body_and_last_one_wins() {
        let content = "### 2024-03-05T08:00:00\nTags: a\nText\nTags: b, c\n";
        let entries = parse_month_file(content).unwrap();
        assert_eq!(entries[0].tags, vec!["b", "c"]);
        assert_eq!(entries[0].body, "Text");
    }

    #[test]
    fn offset_header_is_read_as_local_time() {
        let content = "### 2024-03-05T08:00:00+01:00\nTags: calm\nWalked.\n\n### 2024-03-06T21:30:00Z\nTags: none\nLate.\n";
        let entries = parse_month_file(content).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].timestamp, dt(5, 8, 0));
        assert_eq!(entries[0].tags, vec!["calm"]);
        assert_eq!(entries[1].timestamp, dt(6, 21, 30));
    }

    #[test]
    fn lone_none_tag_reads_back_as_no_tags() {
        let content = "### 2024-03-05T08:00:00\nTags: none\nA\n\n### 2024-03-06T08:00:00\nTags: none, calm\nB\n";
        let entries = parse_month_file(content).unwrap();
        assert!(entries[0].tags.is_empty());
        assert_eq!(entries[1].tags, vec!["none", "calm"]);
    }

    #[test]
    fn malformed_header_fails_whole_file() {
        let content = "### 2024-03-05T08:00:00\nTags: a\nOk\n\n### not a date\nTags: b\n";
        let err = parse_month_file(content).unwrap_err();
        match err {
            JournalError::InvalidTimestamp { line, value } => {
                assert_eq!(line, 5);
                assert_eq!(value, "not a date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        let content = "### 2024-03-05T08:00:00\r\nTags: calm\r\nWalked.\r\n\r\n";
        let entries = parse_month_file(content).unwrap();
        assert_eq!(entries[0].tags, vec!["calm"]);
        assert_eq!(entries[0].body, "Walked.");
    }
}
