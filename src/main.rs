mod article;
mod config;
mod query;
mod source;
mod tui;

use anyhow::Result;
use config::Config;
use query::present::{self, LinkStyle};
use query::{filter, Criteria};
use source::drive::GoogleDrive;
use std::path::Path;
use tokio::sync::{mpsc, watch};
use tui::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // The TUI owns stdout, so logs go to a file.
    let log_file = std::fs::File::create("pocket-explorer.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("POCKET_EXPLORER_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pocket_explorer=debug")),
        )
        .with_writer(log_file)
        .init();

    let config = Config::load(Path::new("config.toml"))?;
    let link_style = LinkStyle::from_config(&config.display.link_style);

    // --- Phase 1: obtain the dataset (download once, reuse local copy) ---
    let drive = GoogleDrive::new(&config.source.base_url, &config.source.file_id);
    let body = match source::ensure_local(&drive, Path::new(&config.source.cache_path)).await {
        Ok(body) => body,
        Err(e) => {
            eprintln!("  Could not obtain the summaries CSV: {:#}", e);
            std::process::exit(1);
        }
    };

    let articles = match article::load_csv(&body) {
        Ok(articles) => articles,
        Err(e) => {
            eprintln!("  Could not load the summaries CSV: {:#}", e);
            std::process::exit(1);
        }
    };

    let vocab = article::tag_vocabulary(&articles);
    tracing::debug!(articles = articles.len(), tags = vocab.len(), "dataset ready");

    // --- Phase 2: channels and initial (unfiltered) view ---
    let (state_tx, state_rx) = watch::channel({
        let mut s = AppState::new(articles.len(), config.display.page_rows);
        let initial = filter::apply(&articles, &Criteria::default());
        s.rows = present::to_rows(&initial, link_style);
        s
    });
    let (cmd_tx, mut cmd_rx) = mpsc::channel::<tui::TuiCommand>(16);

    // --- Phase 3: query engine task. Owns the immutable dataset; reruns
    // the filter pipeline on every criteria change.
    tokio::spawn(async move {
        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                tui::TuiCommand::Apply(criteria) => {
                    let started = std::time::Instant::now();
                    let hits = filter::apply(&articles, &criteria);
                    tracing::debug!(
                        matched = hits.len(),
                        elapsed_us = started.elapsed().as_micros() as u64,
                        criteria = %criteria.describe(),
                        "query"
                    );
                    let rows = present::to_rows(&hits, link_style);
                    state_tx.send_modify(|s| {
                        s.rows = rows;
                        s.criteria_summary = criteria.describe();
                    });
                }
                tui::TuiCommand::Quit => return,
            }
        }
    });

    // --- Phase 4: run TUI (blocks until quit) ---
    tui::run_tui(state_rx, cmd_tx, vocab).await?;

    tracing::debug!("shutting down");
    Ok(())
}
