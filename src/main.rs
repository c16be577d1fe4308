mod analyzer;
mod config;
mod model;
mod normalizer;
mod parser;
mod scraper;
mod storage;
mod utils;

use crate::analyzer::tech_frequency::Analyzer;
use analyzer::{AnalyzerImpl, report};
use config::{AppConfig, load_config};
use model::Posting;
use normalizer::{Resolver, SynonymTable};
use parser::NoFluffParser;
use scraper::{Scraper, ScraperImpl};
use serde_json::Value;
use storage::JsonStore;
use tokio::time::{Duration, sleep};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration; a missing file falls back to the built-in defaults
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            info!("No usable config.json ({}), using defaults", e);
            AppConfig::default()
        }
    };

    let agent = utils::pick_user_agent(&config.user_agents);
    info!("Using User-Agent: {}", agent);

    let scraper = match ScraperImpl::new(&agent, &config.region, config.page_size) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };
    let parser = NoFluffParser::new();
    let store = JsonStore::new();

    // Without session cookies the API rejects the search request
    if let Err(e) = scraper.bootstrap_session(&config.search_term).await {
        error!("Session bootstrap failed: {}", e);
        return;
    }
    info!("Session established");

    let postings = harvest_postings(&scraper, &parser, &config).await;
    if postings.is_empty() {
        warn!("No postings fetched, nothing to analyze");
        return;
    }
    if let Err(e) = store.save(&postings, "postings", &config.offers_file) {
        warn!("Failed to persist postings: {}", e);
    }

    let urls = parser.unique_posting_urls(&postings);
    info!("{} unique offers out of {} postings", urls.len(), postings.len());
    if let Err(e) = store.save(&urls, "urls", &config.urls_file) {
        warn!("Failed to persist urls: {}", e);
    }

    let tags = harvest_tags(&scraper, &parser, &urls, &config).await;
    if tags.is_empty() {
        warn!("No technologies harvested, nothing to analyze");
        return;
    }
    if let Err(e) = store.save(&tags, "technologies", &config.technologies_file) {
        error!("Failed to persist technologies: {}", e);
        return;
    }

    analyze(&store, &config);
}

/// Walks all search pages sequentially. A failed page is logged and skipped;
/// only a failure on the first page (no page count yet) ends the harvest.
async fn harvest_postings(
    scraper: &ScraperImpl,
    parser: &NoFluffParser,
    config: &AppConfig,
) -> Vec<Posting> {
    let first = match scraper.fetch_search_page(&config.search_term, 1).await {
        Ok(body) => body,
        Err(e) => {
            error!("Search request failed: {}", e);
            return Vec::new();
        }
    };
    let page = match parser.parse_search(&first) {
        Ok(p) => p,
        Err(e) => {
            error!("Search response parse failed: {}", e);
            return Vec::new();
        }
    };

    let total_pages = page.total_pages;
    let mut postings = page.postings;
    info!("Page 1/{}: {} postings", total_pages, postings.len());

    for page_no in 2..=total_pages {
        sleep(Duration::from_secs(config.page_delay_seconds)).await;
        let parsed = match scraper.fetch_search_page(&config.search_term, page_no).await {
            Ok(body) => parser.parse_search(&body).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };
        match parsed {
            Ok(next) => {
                info!("Page {}/{}: {} postings", page_no, total_pages, next.postings.len());
                postings.extend(next.postings);
            }
            Err(e) => warn!("Skipping page {}: {}", page_no, e),
        }
    }
    postings
}

/// Follows each detail slug and collects the required-skill tags. One bad
/// posting is logged and skipped, never aborting the crawl.
async fn harvest_tags(
    scraper: &ScraperImpl,
    parser: &NoFluffParser,
    urls: &[String],
    config: &AppConfig,
) -> Vec<String> {
    let mut tags = Vec::new();
    for slug in urls {
        match scraper.fetch_posting(slug).await {
            Ok(body) => match parser.parse_detail(&body) {
                Ok(musts) => {
                    info!("Fetched: {}", slug);
                    tags.extend(musts);
                }
                Err(e) => warn!("Error parsing {}: {}", slug, e),
            },
            Err(e) => warn!("Error fetching {}: {}", slug, e),
        }
        let delay = utils::jitter_seconds(
            config.detail_delay_min_seconds,
            config.detail_delay_max_seconds,
        );
        sleep(Duration::from_secs(delay)).await;
    }
    tags
}

/// Loads the harvested tag list back from disk, folds it into a frequency
/// table and prints the ranked technology report.
fn analyze(store: &JsonStore, config: &AppConfig) {
    let raw_tags: Vec<Value> = match store.load(&config.technologies_file) {
        Ok(v) => v,
        Err(e) => {
            error!("Failed to load {}: {}", config.technologies_file, e);
            return;
        }
    };

    let analyzer = AnalyzerImpl::new(Resolver::new(SynonymTable::builtin()));
    let table = analyzer.aggregate(&raw_tags);
    info!("{} tags folded into {} technologies", table.total(), table.len());

    let top = analyzer.top_n(&table, config.top_n);
    println!("{}", report::render_table(&top));
}
