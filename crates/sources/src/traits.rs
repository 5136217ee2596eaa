//! Traits at the provider seam.
//!
//! The resolver only talks to these traits, so tests can hand it in-memory
//! providers and production code hands it the reqwest clients.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{CatalogMovie, CriticRecord, SearchCandidate, WatchProviders};

/// The rich metadata provider: search, detail and watch providers.
///
/// ## Design Note
/// - `Send + Sync` lets one client be shared by concurrent requests
/// - Every method takes borrowed ids; no request state is kept on the client
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Search movies by free-text title.
    async fn search(&self, title: &str) -> Result<Vec<SearchCandidate>>;

    /// Full detail record for one movie id.
    async fn movie(&self, id: &str) -> Result<CatalogMovie>;

    /// Region-keyed watch providers for one movie id.
    async fn watch_providers(&self, id: &str) -> Result<WatchProviders>;
}

/// The critic provider.
#[async_trait]
pub trait CriticApi: Send + Sync {
    /// Look up a record by key. The key may be the rich provider's id or a
    /// cross-reference id; a miss is an empty record, not an error.
    async fn lookup(&self, key: &str) -> Result<CriticRecord>;
}

#[async_trait]
impl CatalogApi for crate::tmdb::TmdbClient {
    async fn search(&self, title: &str) -> Result<Vec<SearchCandidate>> {
        self.search_movies(title).await
    }

    async fn movie(&self, id: &str) -> Result<CatalogMovie> {
        self.get_movie(id).await
    }

    async fn watch_providers(&self, id: &str) -> Result<WatchProviders> {
        self.get_watch_providers(id).await
    }
}

#[async_trait]
impl CriticApi for crate::omdb::OmdbClient {
    async fn lookup(&self, key: &str) -> Result<CriticRecord> {
        self.get_by_id(key).await
    }
}
