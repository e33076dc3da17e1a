use crate::core::xml;
use crate::domain::model::{CountryRecord, FetchOutcome};
use crate::utils::error::Result;
use reqwest::Client;

/// Fetches one country at a time from the World Bank API.
pub struct RecordFetcher {
    client: Client,
    api_endpoint: String,
}

impl RecordFetcher {
    pub fn new(api_endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            api_endpoint: api_endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn request_url(&self, code: &str) -> String {
        format!("{}/{}", self.api_endpoint, code)
    }

    /// Never fails the batch: every error is folded into the returned
    /// outcome for the caller to pattern-match.
    pub async fn fetch(&self, code: &str) -> FetchOutcome {
        let url = self.request_url(code);
        match self.fetch_one(&url).await {
            Ok(Some(record)) => FetchOutcome::Country(record),
            Ok(None) => FetchOutcome::NoData { url },
            Err(error) => FetchOutcome::Failed { url, error },
        }
    }

    async fn fetch_one(&self, url: &str) -> Result<Option<CountryRecord>> {
        tracing::debug!("requesting {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        xml::parse_country(&body)
    }
}
