//! Client for the rich provider (TMDb v3).

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::http::{build_url, decode_response};
use crate::types::{CatalogMovie, SearchCandidate, WatchProviders, release_year};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// TMDb API client.
///
/// Cloning is cheap: `reqwest::Client` is reference counted internally.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    id: u64,
    #[serde(default)]
    title: String,
    release_date: Option<String>,
    poster_path: Option<String>,
}

impl From<SearchHit> for SearchCandidate {
    fn from(hit: SearchHit) -> Self {
        SearchCandidate {
            id: hit.id,
            release_year: release_year(hit.release_date.as_deref()).map(str::to_string),
            title: hit.title,
            poster_path: hit.poster_path,
        }
    }
}

impl TmdbClient {
    pub fn new(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: TMDB_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// GET /search/movie?query=
    pub async fn search_movies(&self, title: &str) -> Result<Vec<SearchCandidate>> {
        let url = build_url(&self.base_url, &["search", "movie"])?;
        debug!("TMDb search for {:?}", title);
        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?;
        let page: SearchPage = decode_response(response).await?;
        Ok(page.results.into_iter().map(SearchCandidate::from).collect())
    }

    /// GET /movie/{id}
    pub async fn get_movie(&self, id: &str) -> Result<CatalogMovie> {
        let url = build_url(&self.base_url, &["movie", id])?;
        debug!("TMDb detail for {}", id);
        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        decode_response(response).await
    }

    /// GET /movie/{id}/watch/providers
    pub async fn get_watch_providers(&self, id: &str) -> Result<WatchProviders> {
        let url = build_url(&self.base_url, &["movie", id, "watch", "providers"])?;
        debug!("TMDb watch providers for {}", id);
        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;
        decode_response(response).await
    }
}
