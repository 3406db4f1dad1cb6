//! Blocking HTTP fetcher for PDF links.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use themescope_core::config::AcquisitionConfig;
use themescope_core::errors::AcquisitionError;
use themescope_core::traits::{FetchedPayload, IDocumentFetcher};

/// Fetches documents with a bounded timeout and a browser-like User-Agent.
pub struct HttpPdfFetcher {
    client: Client,
    user_agent: String,
}

impl HttpPdfFetcher {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Result<Self, AcquisitionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AcquisitionError::FetchFailed {
                url: String::new(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            user_agent: user_agent.into(),
        })
    }

    pub fn from_config(config: &AcquisitionConfig) -> Result<Self, AcquisitionError> {
        Self::new(
            Duration::from_secs(config.effective_timeout_secs()),
            config.effective_user_agent(),
        )
    }
}

impl IDocumentFetcher for HttpPdfFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPayload, AcquisitionError> {
        let failed = |reason: String| AcquisitionError::FetchFailed {
            url: url.to_string(),
            reason,
        };

        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .map_err(|e| failed(e.to_string()))?;

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_lowercase();

        let bytes = resp.bytes().map_err(|e| failed(e.to_string()))?.to_vec();

        Ok(FetchedPayload {
            content_type,
            bytes,
        })
    }
}
