//! Client for the critic provider (OMDb).

use reqwest::Client;
use tracing::debug;

use crate::error::Result;
use crate::http::{build_url, decode_response};
use crate::types::CriticRecord;

pub const OMDB_BASE_URL: &str = "https://www.omdbapi.com";

/// OMDb API client.
#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OmdbClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: OMDB_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// GET /?i={key}
    ///
    /// A miss comes back as a 200 with `Response: "False"`, which decodes to
    /// an empty record.
    pub async fn get_by_id(&self, key: &str) -> Result<CriticRecord> {
        let url = build_url(&self.base_url, &[])?;
        let response = self
            .client
            .get(url)
            .query(&[("apikey", self.api_key.as_str()), ("i", key)])
            .send()
            .await?;
        let record: CriticRecord = decode_response(response).await?;

        if record.is_empty() {
            debug!(
                "OMDb has no record for {}: {}",
                key,
                record.error.as_deref().unwrap_or("no error message")
            );
        }
        Ok(record)
    }
}
