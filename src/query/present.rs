use crate::article::Article;

/// Human-readable column labels for the results table.
pub const COLUMN_LABELS: [&str; 6] =
    ["Title", "Link", "Saved At", "Short", "Tags", "Summary"];

/// How the url column is rendered. The original dashboard shipped several
/// near-identical variants that differed only here, so it is a single
/// presentation contract with a pluggable style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStyle {
    #[default]
    Markdown,
    Html,
    Plain,
}

impl LinkStyle {
    /// Parse the config value; unknown values fall back to markdown.
    pub fn from_config(value: &str) -> Self {
        match value {
            "html" => LinkStyle::Html,
            "plain" => LinkStyle::Plain,
            _ => LinkStyle::Markdown,
        }
    }
}

/// One filtered record, relabeled and link-rendered for display. This is a
/// presentation concern kept out of the filter so the pipeline stays pure.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    pub title: String,
    pub link: String,
    pub saved_at: String,
    pub short: String,
    pub tags: String,
    pub summary: String,
}

pub fn render_link(article: &Article, style: LinkStyle) -> String {
    match style {
        LinkStyle::Markdown => format!("[{}]({})", article.title, article.url),
        LinkStyle::Html => format!("<a href=\"{}\" target=\"_blank\">Link</a>", article.url),
        LinkStyle::Plain => article.url.clone(),
    }
}

pub fn to_rows(articles: &[Article], style: LinkStyle) -> Vec<DisplayRow> {
    articles
        .iter()
        .map(|a| DisplayRow {
            title: a.title.clone(),
            link: render_link(a, style),
            saved_at: a.saved_at.format("%Y-%m-%d %H:%M").to_string(),
            short: a.short_description.clone(),
            tags: a.tags.clone(),
            summary: a.summary.clone(),
        })
        .collect()
}
