use crate::model::ScraperError;
use crate::scraper::Scraper;

use reqwest::Client;
use serde_json::json;
use std::time::Duration;

const BASE_URL: &str = "https://nofluffjobs.com";

pub struct ScraperImpl {
    client: Client,
    user_agent: String,
    region: String,
    page_size: u32,
}

impl ScraperImpl {
    /// Builds the HTTP client. The cookie store carries the session cookies
    /// picked up during `bootstrap_session` into the API requests.
    pub fn new(user_agent: &str, region: &str, page_size: u32) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ScraperError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
            region: region.to_string(),
            page_size,
        })
    }

    fn listing_url(&self, search_term: &str) -> String {
        format!("{}/{}/{}", BASE_URL, self.region, search_term)
    }

    fn map_send_err(e: reqwest::Error) -> ScraperError {
        if e.is_timeout() {
            ScraperError::Timeout
        } else {
            ScraperError::HttpError(e.to_string())
        }
    }
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    /// GETs the public listing page so the session cookies land in the
    /// cookie store. The body itself is discarded.
    async fn bootstrap_session(&self, search_term: &str) -> Result<(), ScraperError> {
        let response = self
            .client
            .get(self.listing_url(search_term))
            .header("User-Agent", &self.user_agent)
            .header(
                "Accept",
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .send()
            .await
            .map_err(Self::map_send_err)?;

        if !response.status().is_success() {
            return Err(ScraperError::InvalidResponse(response.status().as_u16()));
        }
        Ok(())
    }

    async fn fetch_search_page(&self, search_term: &str, page: u32) -> Result<String, ScraperError> {
        let payload = json!({
            "url": { "searchParam": search_term },
            "rawSearch": search_term,
            "pageSize": self.page_size,
            "withSalaryMatch": true,
            "page": page,
        });

        let response = self
            .client
            .post(format!("{}/api/search/posting", BASE_URL))
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json, text/plain, */*")
            // the search endpoint rejects plain application/json
            .header("Content-Type", "application/infiniteSearch+json")
            .header("Origin", BASE_URL)
            .header("Referer", self.listing_url(search_term))
            .query(&[
                ("withSalaryMatch", "true".to_string()),
                ("pageTo", page.to_string()),
                ("pageSize", self.page_size.to_string()),
                ("salaryCurrency", "PLN".to_string()),
                ("salaryPeriod", "month".to_string()),
                ("region", self.region.clone()),
                ("language", "pl-PL".to_string()),
            ])
            .body(payload.to_string())
            .send()
            .await
            .map_err(Self::map_send_err)?;

        if !response.status().is_success() {
            return Err(ScraperError::InvalidResponse(response.status().as_u16()));
        }
        response.text().await.map_err(Self::map_send_err)
    }

    async fn fetch_posting(&self, slug: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(format!("{}/api/posting/{}", BASE_URL, slug))
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(Self::map_send_err)?;

        if !response.status().is_success() {
            return Err(ScraperError::InvalidResponse(response.status().as_u16()));
        }
        response.text().await.map_err(Self::map_send_err)
    }
}
