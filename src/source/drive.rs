use super::ArticleSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Google Drive direct-download source for a publicly shared file.
pub struct GoogleDrive {
    client: Client,
    base_url: String,
    file_id: String,
}

impl GoogleDrive {
    pub fn new(base_url: &str, file_id: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            file_id: file_id.to_string(),
        }
    }
}

#[async_trait]
impl ArticleSource for GoogleDrive {
    async fn fetch_csv(&self) -> Result<String> {
        let url = format!("{}/uc?export=download&id={}", self.base_url, self.file_id);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .context("drive download request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            anyhow::bail!("drive download failed ({}): {}", status, snippet);
        }

        resp.text().await.context("failed to read drive response body")
    }
}
