//! SerpApi Google Scholar provider.
//!
//! Reads `organic_results[]` and maps `title`, `snippet` and
//! `resources[] { file_format, link }` onto `DocumentRecord`.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use themescope_core::config::SearchConfig;
use themescope_core::errors::SearchError;
use themescope_core::models::{DocumentRecord, ResourceLink};
use themescope_core::traits::ISearchProvider;
use tracing::info;

const SEARCH_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    resources: Vec<SerpResource>,
}

#[derive(Debug, Deserialize)]
struct SerpResource {
    #[serde(default)]
    file_format: String,
    #[serde(default)]
    link: Option<String>,
}

pub struct SerpApiProvider {
    client: Client,
    endpoint: String,
    engine: String,
    query: String,
    num_results: usize,
    api_key: String,
}

impl SerpApiProvider {
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(SearchError::MissingApiKey)?;
        let client = Client::builder()
            .timeout(SEARCH_TIMEOUT)
            .build()
            .map_err(|e| SearchError::RequestFailed {
                reason: e.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: config.effective_endpoint().to_string(),
            engine: config.effective_engine().to_string(),
            query: config.effective_query().to_string(),
            num_results: config.effective_num_results(),
            api_key,
        })
    }
}

impl ISearchProvider for SerpApiProvider {
    fn search(&self) -> Result<Vec<DocumentRecord>, SearchError> {
        let num = self.num_results.to_string();
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("engine", self.engine.as_str()),
                ("q", self.query.as_str()),
                ("num", num.as_str()),
            ])
            .send()
            .map_err(|e| SearchError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = resp.status();
        let body = resp.text().map_err(|e| SearchError::RequestFailed {
            reason: e.to_string(),
        })?;
        if !status.is_success() {
            return Err(SearchError::RequestFailed {
                reason: format!("HTTP {status}: {}", body.chars().take(200).collect::<String>()),
            });
        }

        let records = parse_response(&body)?;
        info!(
            query = %self.query,
            results = records.len(),
            "search results received"
        );
        Ok(records)
    }

    fn name(&self) -> &str {
        "serpapi"
    }
}

/// Parse a SerpApi JSON body into records, preserving result order.
/// Resources without a link are dropped.
pub fn parse_response(body: &str) -> Result<Vec<DocumentRecord>, SearchError> {
    let parsed: SerpResponse =
        serde_json::from_str(body).map_err(|e| SearchError::InvalidResponse {
            reason: e.to_string(),
        })?;

    if let Some(error) = parsed.error {
        return Err(SearchError::InvalidResponse { reason: error });
    }

    Ok(parsed
        .organic_results
        .into_iter()
        .map(|r| DocumentRecord {
            title: r.title,
            snippet: r.snippet,
            resource_links: r
                .resources
                .into_iter()
                .filter_map(|res| res.link.map(|url| ResourceLink::new(res.file_format, url)))
                .collect(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_organic_results_in_order() {
        let body = r#"{
            "search_metadata": {"status": "Success"},
            "organic_results": [
                {"title": "A", "snippet": "first", "resources": [
                    {"title": "x.edu", "file_format": "PDF", "link": "https://x.edu/a.pdf"}
                ]},
                {"title": "B"}
            ]
        }"#;
        let records = parse_response(body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "A");
        assert_eq!(records[0].resource_links[0].url, "https://x.edu/a.pdf");
        assert!(records[0].resource_links[0].is_pdf());
        assert_eq!(records[1].snippet, "");
        assert!(records[1].resource_links.is_empty());
    }

    #[test]
    fn resources_without_link_are_dropped() {
        let body = r#"{"organic_results": [{"title": "A", "snippet": "s",
            "resources": [{"file_format": "PDF"}]}]}"#;
        let records = parse_response(body).unwrap();
        assert!(records[0].resource_links.is_empty());
    }

    #[test]
    fn missing_results_is_empty_corpus() {
        assert!(parse_response("{}").unwrap().is_empty());
    }

    #[test]
    fn api_error_is_surfaced() {
        let err = parse_response(r#"{"error": "Invalid API key."}"#).unwrap_err();
        assert!(err.to_string().contains("Invalid API key"));
    }

    #[test]
    fn missing_key_is_rejected() {
        let result = SerpApiProvider::from_config(&SearchConfig::default());
        assert!(matches!(result, Err(SearchError::MissingApiKey)));
    }
}
