use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceConfig {
    /// Drive file identifier for the summaries CSV.
    #[serde(default = "default_file_id")]
    pub file_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Local copy; if this file already exists the download is skipped.
    #[serde(default = "default_cache_path")]
    pub cache_path: String,
}

fn default_file_id() -> String {
    "1-WuObYzPCvFMRc8E1fVg3XaGMZ1aQChp".to_string()
}

fn default_base_url() -> String {
    "https://drive.google.com".to_string()
}

fn default_cache_path() -> String {
    "pocket_summaries.csv".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            file_id: default_file_id(),
            base_url: default_base_url(),
            cache_path: default_cache_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// How the url column is rendered: "markdown", "html", or "plain".
    #[serde(default = "default_link_style")]
    pub link_style: String,
    /// Cap on rows handed to the results table per draw.
    #[serde(default = "default_page_rows")]
    pub page_rows: usize,
}

fn default_link_style() -> String {
    "markdown".to_string()
}

fn default_page_rows() -> usize {
    50
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            link_style: default_link_style(),
            page_rows: default_page_rows(),
        }
    }
}

impl Config {
    /// Load config.toml. The file is optional: a missing file yields the
    /// defaults, a present-but-broken file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))
            }
        };
        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }
}
