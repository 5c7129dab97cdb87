use super::Criteria;
use crate::article::Article;
use std::cmp::Reverse;

/// Tag predicate: at least one selected tag appears in the record's
/// derived tag sequence.
fn matches_tags(article: &Article, criteria: &Criteria) -> bool {
    article.tag_list().iter().any(|t| criteria.tags.contains(*t))
}

/// Keyword predicate: case-insensitive substring over title or summary.
fn matches_keyword(article: &Article, keyword: &str) -> bool {
    let needle = keyword.trim().to_lowercase();
    article.title.to_lowercase().contains(&needle)
        || article.summary.to_lowercase().contains(&needle)
}

/// Date predicate: saved_at's date component inside [start, end], both ends
/// inclusive.
fn matches_date(article: &Article, start: chrono::NaiveDate, end: chrono::NaiveDate) -> bool {
    let d = article.saved_date();
    d >= start && d <= end
}

/// Whether a single record satisfies every active criterion.
pub fn matches(article: &Article, criteria: &Criteria) -> bool {
    if !criteria.tags.is_empty() && !matches_tags(article, criteria) {
        return false;
    }
    if let Some(kw) = criteria.keyword.as_deref() {
        if !kw.trim().is_empty() && !matches_keyword(article, kw) {
            return false;
        }
    }
    if let Some((start, end)) = criteria.date_range {
        if !matches_date(article, start, end) {
            return false;
        }
    }
    true
}

/// The filter pipeline: intersect the active predicates, then sort by
/// saved_at descending. The sort is stable, so equal timestamps keep their
/// input order. Pure — criteria that match nothing produce an empty vec,
/// never an error.
pub fn apply(articles: &[Article], criteria: &Criteria) -> Vec<Article> {
    let mut out: Vec<Article> = articles
        .iter()
        .filter(|a| matches(a, criteria))
        .cloned()
        .collect();
    out.sort_by_key(|a| Reverse(a.saved_at));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn article(title: &str, tags: &str, saved_at: &str) -> Article {
        Article {
            title: title.to_string(),
            url: format!("https://example.com/{}", title),
            saved_at: crate::article::parse_saved_at(saved_at).unwrap(),
            short_description: String::new(),
            tags: tags.to_string(),
            summary: format!("summary of {}", title),
        }
    }

    fn tag_set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_tag_filter_is_or_across_selected() {
        let data = vec![
            article("X", "ml,ops", "2024-01-05"),
            article("Y", "ml", "2024-02-01"),
        ];

        let ops_only = apply(
            &data,
            &Criteria { tags: tag_set(&["ops"]), ..Default::default() },
        );
        assert_eq!(ops_only.len(), 1);
        assert_eq!(ops_only[0].title, "X");

        let ml = apply(
            &data,
            &Criteria { tags: tag_set(&["ml"]), ..Default::default() },
        );
        let titles: Vec<&str> = ml.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["Y", "X"]); // Y newer, sorted first
    }

    #[test]
    fn test_keyword_case_insensitive_substring() {
        let data = vec![article("data pipeline", "", "2024-01-01")];
        let hits = apply(
            &data,
            &Criteria { keyword: Some("DATA".to_string()), ..Default::default() },
        );
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_keyword_searches_summary_too() {
        let mut a = article("Opaque Title", "", "2024-01-01");
        a.summary = "All about Borrow Checkers".to_string();
        assert!(matches(
            &a,
            &Criteria { keyword: Some("borrow".to_string()), ..Default::default() },
        ));
    }

    #[test]
    fn test_date_range_inclusive_single_day() {
        let data = vec![article("X", "", "2024-01-05 23:59:00")];
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let hits = apply(
            &data,
            &Criteria { date_range: Some((day, day)), ..Default::default() },
        );
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_criteria_are_intersected() {
        let data = vec![
            article("rust intro", "rust", "2024-01-05"),
            article("rust ops guide", "ops", "2024-01-05"),
        ];
        let c = Criteria {
            tags: tag_set(&["ops"]),
            keyword: Some("rust".to_string()),
            ..Default::default()
        };
        let hits = apply(&data, &c);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "rust ops guide");
    }

    #[test]
    fn test_no_criteria_keeps_everything_sorted() {
        let data = vec![
            article("old", "", "2024-01-01"),
            article("new", "", "2024-03-01"),
            article("mid", "", "2024-02-01"),
        ];
        let out = apply(&data, &Criteria::default());
        let titles: Vec<&str> = out.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let data = vec![
            article("first", "", "2024-01-01 12:00:00"),
            article("second", "", "2024-01-01 12:00:00"),
        ];
        let out = apply(&data, &Criteria::default());
        assert_eq!(out[0].title, "first");
        assert_eq!(out[1].title, "second");
    }

    #[test]
    fn test_empty_input_and_no_matches() {
        assert!(apply(&[], &Criteria::default()).is_empty());

        let data = vec![article("X", "ml", "2024-01-05")];
        let miss = Criteria { tags: tag_set(&["nonexistent"]), ..Default::default() };
        assert!(apply(&data, &miss).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let data = vec![
            article("X", "ml,ops", "2024-01-05"),
            article("Y", "ml", "2024-02-01"),
            article("Z", "ops", "2024-01-20"),
        ];
        let c = Criteria { tags: tag_set(&["ml", "ops"]), ..Default::default() };
        let once = apply(&data, &c);
        let twice = apply(&once, &c);
        let t1: Vec<&str> = once.iter().map(|a| a.title.as_str()).collect();
        let t2: Vec<&str> = twice.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(t1, t2);
    }
}
