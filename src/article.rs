use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::collections::BTreeSet;

/// One saved-article row from the summaries CSV.
#[derive(Debug, Clone)]
pub struct Article {
    pub title: String,
    pub url: String,
    pub saved_at: NaiveDateTime,
    pub short_description: String,
    pub tags: String,
    pub summary: String,
}

impl Article {
    /// Derived tag sequence: split on commas, trim, drop empties.
    /// Order is preserved and duplicates within a record are kept.
    pub fn tag_list(&self) -> Vec<&str> {
        split_tags(&self.tags)
    }

    pub fn saved_date(&self) -> NaiveDate {
        self.saved_at.date()
    }
}

/// Raw CSV row shape. `tags` may be an empty field; everything else is
/// required by the schema (header row: title,url,saved_at,short_description,tags,summary).
#[derive(Debug, Deserialize)]
struct ArticleCsv {
    title: String,
    url: String,
    saved_at: String,
    short_description: String,
    #[serde(default)]
    tags: String,
    summary: String,
}

pub fn split_tags(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Sorted set-union of every record's tag sequence. Populates the
/// selectable tag filter options.
pub fn tag_vocabulary(articles: &[Article]) -> Vec<String> {
    let set: BTreeSet<&str> = articles.iter().flat_map(|a| a.tag_list()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Parse a saved_at cell. Accepts RFC 3339, `2024-01-05 13:30:00`, or a bare
/// date (midnight implied).
pub fn parse_saved_at(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d.and_hms_opt(0, 0, 0).unwrap_or_default());
    }
    anyhow::bail!("unrecognized saved_at timestamp: {:?}", raw)
}

/// Load the full dataset from a CSV body. Any malformed row is a load
/// failure, not a skip — the caller treats this as source-unavailable.
pub fn load_csv(body: &str) -> Result<Vec<Article>> {
    let mut reader = csv::Reader::from_reader(body.as_bytes());
    let mut articles = Vec::new();

    for (i, row) in reader.deserialize::<ArticleCsv>().enumerate() {
        let row = row.with_context(|| format!("malformed CSV record at row {}", i + 2))?;
        let saved_at = parse_saved_at(&row.saved_at)
            .with_context(|| format!("row {} ({})", i + 2, row.title))?;
        articles.push(Article {
            title: row.title,
            url: row.url,
            saved_at,
            short_description: row.short_description,
            tags: row.tags,
            summary: row.summary,
        });
    }

    tracing::debug!(count = articles.len(), "dataset loaded");
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_tags_trims_and_drops_empties() {
        assert_eq!(split_tags("a, b ,, c"), vec!["a", "b", "c"]);
        assert_eq!(split_tags(""), Vec::<&str>::new());
        assert_eq!(split_tags("  "), Vec::<&str>::new());
    }

    #[test]
    fn test_split_tags_keeps_duplicates_and_order() {
        assert_eq!(split_tags("ml, ops, ml"), vec!["ml", "ops", "ml"]);
    }

    #[test]
    fn test_parse_saved_at_formats() {
        assert!(parse_saved_at("2024-01-05T08:30:00Z").is_ok());
        assert!(parse_saved_at("2024-01-05 08:30:00").is_ok());
        let midnight = parse_saved_at("2024-01-05").unwrap();
        assert_eq!(midnight.time(), chrono::NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert!(parse_saved_at("Jan 5th").is_err());
    }

    #[test]
    fn test_load_csv_roundtrip() {
        let body = "\
title,url,saved_at,short_description,tags,summary
Rust Async,https://example.com/a,2024-02-01 10:00:00,intro,\"rust, async\",Deep dive into async Rust
Empty Tags,https://example.com/b,2024-01-05,short,,No labels here
";
        let articles = load_csv(body).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].tag_list(), vec!["rust", "async"]);
        assert!(articles[1].tag_list().is_empty());
        assert_eq!(tag_vocabulary(&articles), vec!["async", "rust"]);
    }

    #[test]
    fn test_load_csv_rejects_bad_timestamp() {
        let body = "\
title,url,saved_at,short_description,tags,summary
Bad,https://example.com,someday,short,,text
";
        assert!(load_csv(body).is_err());
    }
}
