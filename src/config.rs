use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search_term: String,
    pub region: String,
    pub page_size: u32,
    /// How many technologies the final report shows.
    pub top_n: usize,
    pub page_delay_seconds: u64,
    pub detail_delay_min_seconds: u64,
    pub detail_delay_max_seconds: u64,
    pub offers_file: String,
    pub urls_file: String,
    pub technologies_file: String,
    pub user_agents: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_term: "devops".to_string(),
            region: "pl".to_string(),
            page_size: 20,
            top_n: 15,
            page_delay_seconds: 1,
            detail_delay_min_seconds: 1,
            detail_delay_max_seconds: 3,
            offers_file: "offers.json".to_string(),
            urls_file: "urls.json".to_string(),
            technologies_file: "technologies.json".to_string(),
            user_agents: default_user_agents(),
        }
    }
}

fn default_user_agents() -> Vec<String> {
    [
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:102.0) Gecko/20100101 Firefox/102.0",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_3_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.4 Safari/605.1.15",
        "Mozilla/5.0 (Linux; Android 11; SM-G991B) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.5735.196 Mobile Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36 Edg/115.0.1901.183",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"search_term": "sre", "top_n": 5}"#).unwrap();
        assert_eq!(config.search_term, "sre");
        assert_eq!(config.top_n, 5);
        assert_eq!(config.region, "pl");
        assert_eq!(config.page_size, 20);
        assert!(!config.user_agents.is_empty());
    }

    #[test]
    fn empty_config_is_fully_defaulted() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.search_term, "devops");
        assert_eq!(config.technologies_file, "technologies.json");
    }
}
