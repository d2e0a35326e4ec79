use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use asksfu::catalog::Catalog;
use asksfu::config::AppConfig;
use asksfu::llm::OpenAIClient;
use asksfu::matcher::ClubMatcher;
use asksfu::scrape::PageFetcher;
use asksfu::web::{start_web_server, AppState};
use asksfu::logger;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    logger::init();

    let cfg = AppConfig::parse();
    cfg.validate()?;

    let catalog = Arc::new(Catalog::builtin());
    let matcher = ClubMatcher::new(catalog.clone())?;
    let llm = match cfg.openai_base_url.clone() {
        Some(base_url) => OpenAIClient::new_with_base_url(
            cfg.openai_api_key.clone(),
            cfg.openai_model.clone(),
            base_url,
        ),
        None => OpenAIClient::new(cfg.openai_api_key.clone(), cfg.openai_model.clone()),
    };
    let fetcher = PageFetcher::new(Duration::from_secs(cfg.fetch_timeout_secs))?;

    info!(clubs = catalog.clubs.len(), "catalog loaded");

    let state = Arc::new(AppState {
        catalog,
        matcher,
        llm,
        fetcher,
    });

    start_web_server(&cfg.bind_addr, &cfg.static_dir, state).await
}
