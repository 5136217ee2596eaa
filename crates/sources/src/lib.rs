//! # Sources Crate
//!
//! Clients and wire types for the two upstream movie data providers.
//!
//! ## Components
//!
//! ### Rich provider (TMDb)
//! Catalog metadata:
//! - Title search (used for disambiguation)
//! - Movie detail: genres, languages, companies, overview, poster, vote average
//! - Watch providers keyed by region
//! - The IMDb id used as a cross-reference key
//!
//! ### Critic provider (OMDb)
//! Curated metadata and ratings from several named rating sources. Misses
//! and missing values are encoded in-band (`Response: "False"`, `N/A`).
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{CatalogApi, CriticApi, OmdbClient, TmdbClient};
//!
//! let http = reqwest::Client::new();
//! let tmdb = TmdbClient::new(http.clone(), tmdb_key);
//! let omdb = OmdbClient::new(http, omdb_key);
//!
//! let candidates = tmdb.search("Heat").await?;
//! let movie = tmdb.movie("949").await?;
//! let critic = omdb.lookup(movie.imdb_id.as_deref().unwrap_or("949")).await?;
//! ```

pub mod error;
mod http;
pub mod omdb;
pub mod tmdb;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{ProviderError, Result};
pub use omdb::OmdbClient;
pub use tmdb::TmdbClient;
pub use traits::{CatalogApi, CriticApi};
pub use types::{
    CatalogMovie, CriticRating, CriticRecord, NamedEntry, ProviderOffer, RegionOffers,
    SearchCandidate, SpokenLanguage, WatchProviders, SENTINEL, meaningful, release_year,
};
