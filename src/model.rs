// Core structs: Posting, SearchPage + pipeline error types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// One job posting as returned by the search API.
///
/// Only the fields the pipeline touches are typed; everything else the API
/// sends is kept in `extra` so the persisted offers file stays faithful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Posting {
    #[serde(default)]
    pub id: String,
    /// Company name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default = "Utc::now")]
    pub fetched_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub places: Vec<Place>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A posting location entry. `url` is the detail-page slug.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One page of search results.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default)]
    pub postings: Vec<Posting>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("http error: {0}")]
    HttpError(String),
    #[error("request timed out")]
    Timeout,
    #[error("unexpected response status: {0}")]
    InvalidResponse(u16),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("json parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid json: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
