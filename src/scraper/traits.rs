use crate::model::ScraperError;

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    async fn bootstrap_session(&self, search_term: &str) -> Result<(), ScraperError>;
    async fn fetch_search_page(&self, search_term: &str, page: u32) -> Result<String, ScraperError>;
    async fn fetch_posting(&self, slug: &str) -> Result<String, ScraperError>;
}
