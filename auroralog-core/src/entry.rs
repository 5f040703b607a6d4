use chrono::NaiveDateTime;

/// One journaled reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub timestamp: NaiveDateTime,
    pub body: String,
    pub tags: Vec<String>,
}

impl Entry {
    /// Builds an entry, trimming each tag and dropping empty ones.
    /// Order and duplicates are kept as given.
    pub fn new<I, S>(timestamp: NaiveDateTime, body: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            timestamp,
            body: body.into(),
            tags: normalize_tags(tags),
        }
    }
}

/// Trims every tag and drops the empty ones.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Splits a comma separated tag list (`" work , life ,, "` -> `["work", "life"]`).
pub fn parse_tags(input: &str) -> Vec<String> {
    normalize_tags(input.split(','))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    #[test]
    fn parse_tags_trims_and_drops_empty_pieces() {
        assert_eq!(parse_tags(" work , life ,, "), vec!["work", "life"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn new_keeps_order_and_duplicates() {
        let e = Entry::new(ts(), "body", ["b", " a ", "", "b"]);
        assert_eq!(e.tags, vec!["b", "a", "b"]);
    }
}
