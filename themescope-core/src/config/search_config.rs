//! Search-results provider configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchConfig {
    /// SerpApi key. `SERPAPI_KEY` is also honored.
    pub api_key: Option<String>,
    /// Search query. Default: "supportive partner".
    pub query: Option<String>,
    /// Number of results requested. Default: 30.
    pub num_results: Option<usize>,
    /// SerpApi engine. Default: "google_scholar".
    pub engine: Option<String>,
    /// Endpoint URL. Default: SerpApi JSON search.
    pub endpoint: Option<String>,
}

impl SearchConfig {
    pub fn effective_query(&self) -> &str {
        self.query.as_deref().unwrap_or(constants::DEFAULT_QUERY)
    }

    pub fn effective_num_results(&self) -> usize {
        self.num_results.unwrap_or(constants::DEFAULT_NUM_RESULTS)
    }

    pub fn effective_engine(&self) -> &str {
        self.engine.as_deref().unwrap_or(constants::DEFAULT_SEARCH_ENGINE)
    }

    pub fn effective_endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(constants::DEFAULT_SEARCH_ENDPOINT)
    }
}
