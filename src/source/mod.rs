pub mod drive;

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::Path;

/// Boundary contract for wherever the summaries CSV lives.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the raw CSV body.
    async fn fetch_csv(&self) -> Result<String>;
}

/// Explicit cache-check step: if `cache_path` already exists, read it and
/// skip the download entirely; otherwise fetch once and write the copy.
/// Any failure here means the dataset is unavailable — the caller must not
/// start the query engine on partial or stale data.
pub async fn ensure_local(source: &dyn ArticleSource, cache_path: &Path) -> Result<String> {
    if cache_path.exists() {
        tracing::debug!(path = %cache_path.display(), "local copy present, skipping download");
        return std::fs::read_to_string(cache_path)
            .with_context(|| format!("failed to read cached CSV: {}", cache_path.display()));
    }

    let body = source.fetch_csv().await?;
    std::fs::write(cache_path, &body)
        .with_context(|| format!("failed to write local copy: {}", cache_path.display()))?;
    tracing::warn!(path = %cache_path.display(), bytes = body.len(), "CSV downloaded");
    Ok(body)
}
