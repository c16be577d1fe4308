// NoFluffJobs-specific JSON parsing
use crate::model::{ParserError, Posting, SearchPage};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Default, Deserialize)]
struct PostingDetail {
    #[serde(default)]
    requirements: Requirements,
}

#[derive(Debug, Default, Deserialize)]
struct Requirements {
    #[serde(default)]
    musts: Vec<Requirement>,
}

#[derive(Debug, Deserialize)]
struct Requirement {
    value: String,
}

pub struct NoFluffParser;

impl NoFluffParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses one search API response into postings and the page count.
    pub fn parse_search(&self, body: &str) -> Result<SearchPage, ParserError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Extracts the required-skill ("musts") tag values from a posting detail
    /// response. A posting without a requirements block yields an empty list.
    pub fn parse_detail(&self, body: &str) -> Result<Vec<String>, ParserError> {
        let detail: PostingDetail = serde_json::from_str(body)?;
        Ok(detail.requirements.musts.into_iter().map(|m| m.value).collect())
    }

    /// Deduplicates postings by (company, title) and returns each offer's
    /// detail slug. First occurrence wins; postings without a usable place
    /// URL are skipped.
    pub fn unique_posting_urls(&self, postings: &[Posting]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut urls = Vec::new();

        for posting in postings {
            let key = (posting.name.clone(), posting.title.clone());
            if !seen.insert(key) {
                continue;
            }
            // One slug per offer is enough; extra places point at the same posting.
            if let Some(url) = posting.location.places.first().and_then(|p| p.url.clone()) {
                urls.push(url);
            }
        }
        urls
    }
}
