use chrono::NaiveDate;
use std::collections::BTreeSet;

/// One query's worth of filters. Empty fields are inactive; active
/// criteria are combined with AND, selected tags with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub tags: BTreeSet<String>,
    pub keyword: Option<String>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl Criteria {
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && !self.keyword_active() && self.date_range.is_none()
    }

    /// A keyword of whitespace only counts as inactive.
    pub fn keyword_active(&self) -> bool {
        self.keyword
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Human-readable summary for the header line, e.g.
    /// `tags: ml, ops | keyword: "rust" | 2024-01-01..2024-02-01`.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
            parts.push(format!("tags: {}", tags.join(", ")));
        }
        if let Some(kw) = self.keyword.as_deref().filter(|k| !k.trim().is_empty()) {
            parts.push(format!("keyword: {:?}", kw.trim()));
        }
        if let Some((start, end)) = self.date_range {
            parts.push(format!("{}..{}", start, end));
        }
        if parts.is_empty() {
            "no filters".to_string()
        } else {
            parts.join(" | ")
        }
    }
}
