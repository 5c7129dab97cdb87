use crate::query::present::DisplayRow;
use crate::query::Criteria;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Engine-published state: the current filtered view of the dataset.
#[derive(Debug, Clone)]
pub struct AppState {
    pub rows: Vec<DisplayRow>,
    pub total: usize,
    pub criteria_summary: String,
    pub page_rows: usize,
}

impl AppState {
    pub fn new(total: usize, page_rows: usize) -> Self {
        Self {
            rows: Vec::new(),
            total,
            criteria_summary: "no filters".to_string(),
            page_rows,
        }
    }
}

/// Which sidebar pane owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Tags,
    Keyword,
    DateStart,
    DateEnd,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Tags => Focus::Keyword,
            Focus::Keyword => Focus::DateStart,
            Focus::DateStart => Focus::DateEnd,
            Focus::DateEnd => Focus::Results,
            Focus::Results => Focus::Tags,
        }
    }

    /// Panes that accept free-text input (so plain letters are not hotkeys).
    pub fn is_text(self) -> bool {
        matches!(self, Focus::Keyword | Focus::DateStart | Focus::DateEnd)
    }
}

/// Local input state for the filter sidebar. Lives in the TUI loop; the
/// engine only ever sees the `Criteria` built from it.
#[derive(Debug, Clone)]
pub struct FilterForm {
    pub vocab: Vec<String>,
    pub selected: BTreeSet<String>,
    pub tag_cursor: usize,
    pub keyword: String,
    pub date_start: String,
    pub date_end: String,
    pub focus: Focus,
    pub result_offset: usize,
}

impl FilterForm {
    pub fn new(vocab: Vec<String>) -> Self {
        Self {
            vocab,
            selected: BTreeSet::new(),
            tag_cursor: 0,
            keyword: String::new(),
            date_start: String::new(),
            date_end: String::new(),
            focus: Focus::Tags,
            result_offset: 0,
        }
    }

    pub fn cursor_up(&mut self) {
        self.tag_cursor = self.tag_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.tag_cursor + 1 < self.vocab.len() {
            self.tag_cursor += 1;
        }
    }

    pub fn toggle_current_tag(&mut self) {
        let Some(tag) = self.vocab.get(self.tag_cursor) else { return };
        if !self.selected.remove(tag) {
            self.selected.insert(tag.clone());
        }
    }

    /// Clear whichever field currently has focus.
    pub fn clear_focused(&mut self) {
        match self.focus {
            Focus::Tags => self.selected.clear(),
            Focus::Keyword => self.keyword.clear(),
            Focus::DateStart => self.date_start.clear(),
            Focus::DateEnd => self.date_end.clear(),
            Focus::Results => self.result_offset = 0,
        }
    }

    pub fn reset(&mut self) {
        self.selected.clear();
        self.keyword.clear();
        self.date_start.clear();
        self.date_end.clear();
        self.result_offset = 0;
    }

    fn parse_date(raw: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
    }

    /// A date buffer is "bad" when non-empty but unparseable (shown in red).
    pub fn date_invalid(raw: &str) -> bool {
        !raw.trim().is_empty() && Self::parse_date(raw).is_none()
    }

    /// Build the criteria for the engine. The date range only activates
    /// once both endpoints parse; a half-typed range filters nothing.
    pub fn criteria(&self) -> Criteria {
        let keyword = if self.keyword.trim().is_empty() {
            None
        } else {
            Some(self.keyword.clone())
        };
        let date_range =
            match (Self::parse_date(&self.date_start), Self::parse_date(&self.date_end)) {
                (Some(start), Some(end)) => Some((start, end)),
                _ => None,
            };
        Criteria {
            tags: self.selected.clone(),
            keyword,
            date_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FilterForm {
        FilterForm::new(vec!["async".to_string(), "ml".to_string(), "ops".to_string()])
    }

    #[test]
    fn test_toggle_tag() {
        let mut f = form();
        f.tag_cursor = 1;
        f.toggle_current_tag();
        assert!(f.selected.contains("ml"));
        f.toggle_current_tag();
        assert!(f.selected.is_empty());
    }

    #[test]
    fn test_criteria_needs_both_date_endpoints() {
        let mut f = form();
        f.date_start = "2024-01-01".to_string();
        assert!(f.criteria().date_range.is_none());
        f.date_end = "2024-02-01".to_string();
        assert!(f.criteria().date_range.is_some());
    }

    #[test]
    fn test_blank_keyword_not_sent() {
        let mut f = form();
        f.keyword = "  ".to_string();
        assert!(f.criteria().keyword.is_none());
        f.keyword = "rust".to_string();
        assert_eq!(f.criteria().keyword.as_deref(), Some("rust"));
    }

    #[test]
    fn test_focus_cycle_returns_to_start() {
        let mut focus = Focus::Tags;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Tags);
    }

    #[test]
    fn test_date_invalid_flags_garbage_only() {
        assert!(!FilterForm::date_invalid(""));
        assert!(!FilterForm::date_invalid("2024-01-05"));
        assert!(FilterForm::date_invalid("01/05/2024"));
    }
}
