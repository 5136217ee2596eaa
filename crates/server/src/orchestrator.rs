//! # Movie Resolver
//!
//! This module coordinates a single movie resolution:
//! 1. Search by title (skipped when an id is given)
//! 2. Disambiguate: zero matches, one match, or many
//! 3. Fetch detail, critic record and watch providers concurrently
//! 4. Retry the critic provider once by cross-reference id if it came back empty
//! 5. Reconcile fields, normalize scores, map streaming offers
//! 6. Return the canonical record
//!
//! Every request owns its own working state; the resolver itself only holds
//! shared, immutable provider clients.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use pipeline::{Average, CanonicalMovieInfo, ScoreSet, StreamingOffer};
use sources::{
    CatalogApi, CatalogMovie, CriticApi, CriticRecord, ProviderError, SearchCandidate,
    WatchProviders, meaningful,
};

use crate::classify::{ClassifiedFailure, classify};
use crate::error::ResolveError;

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieQuery {
    /// Free-text title, resolved through search
    Title(String),
    /// Rich-provider id; bypasses search
    Id(String),
}

impl MovieQuery {
    /// Build a query from optional request parameters.
    ///
    /// An id always wins over a title. Blank values count as absent.
    pub fn from_params(title: Option<&str>, id: Option<&str>) -> Option<Self> {
        fn present(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }
        match (present(id), present(title)) {
            (Some(id), _) => Some(MovieQuery::Id(id.to_string())),
            (None, Some(title)) => Some(MovieQuery::Title(title.to_string())),
            (None, None) => None,
        }
    }
}

/// Fully resolved movie, as delivered to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMovie {
    pub movie_info: CanonicalMovieInfo,
    pub scores: ScoreSet,
    pub average: Average,
    pub streaming: Vec<StreamingOffer>,
}

/// Successful outcome of a resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(Box<ResolvedMovie>),
    /// More than one search match; the caller must pick an id
    Multiple(Vec<SearchCandidate>),
}

/// Main resolver that coordinates the providers and the pipeline
#[derive(Clone)]
pub struct MovieResolver {
    catalog: Arc<dyn CatalogApi>,
    critic: Arc<dyn CriticApi>,
    region: String,
}

impl MovieResolver {
    /// Create a resolver over the given providers
    ///
    /// # Arguments
    /// * `catalog` - Rich provider (search, detail, watch providers)
    /// * `critic` - Critic provider
    /// * `region` - Region code used to select streaming offers (e.g. "GB")
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        critic: Arc<dyn CriticApi>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            critic,
            region: region.into(),
        }
    }

    /// Main entry point: resolve a query to a canonical movie
    ///
    /// # Returns
    /// * `Ok(Resolution::Resolved)` - One canonical record
    /// * `Ok(Resolution::Multiple)` - Title search was ambiguous
    /// * `Err(ClassifiedFailure)` - Classified, caller-safe failure
    pub async fn resolve(&self, query: &MovieQuery) -> Result<Resolution, ClassifiedFailure> {
        let start_time = Instant::now();

        match self.run(query).await {
            Ok(resolution) => {
                info!("Resolved {:?} in {:.2?}", query, start_time.elapsed());
                Ok(resolution)
            }
            Err(e) => {
                let failure = classify(&e);
                error!(
                    "Resolution of {:?} failed after {:.2?}: {} (classified as {:?})",
                    query,
                    start_time.elapsed(),
                    e,
                    failure.kind
                );
                Err(failure)
            }
        }
    }

    async fn run(&self, query: &MovieQuery) -> Result<Resolution, ResolveError> {
        let id = match query {
            MovieQuery::Id(id) => id.clone(),
            MovieQuery::Title(title) => match self.search(title).await? {
                SearchOutcome::Single(id) => id,
                SearchOutcome::Multiple(candidates) => {
                    return Ok(Resolution::Multiple(candidates));
                }
            },
        };

        let movie = self.resolve_id(&id).await?;
        Ok(Resolution::Resolved(Box::new(movie)))
    }

    /// Search by title and decide how to continue
    async fn search(&self, title: &str) -> Result<SearchOutcome, ResolveError> {
        let mut candidates = self.catalog.search(title).await?;
        info!("Search for {:?} returned {} candidates", title, candidates.len());

        match candidates.len() {
            0 => Err(ResolveError::NoMatches(title.to_string())),
            1 => Ok(SearchOutcome::Single(candidates.remove(0).id.to_string())),
            _ => Ok(SearchOutcome::Multiple(candidates)),
        }
    }

    /// Fetch, reconcile and assemble the record for one id
    async fn resolve_id(&self, id: &str) -> Result<ResolvedMovie, ResolveError> {
        let (movie, mut critic, providers) = self.fetch_details(id).await?;

        if let Some(key) = cross_reference_key(&critic, &movie, id) {
            info!("Critic record for {} is empty, retrying with {}", id, key);
            let extra = self.lookup_critic(key).await;
            critic.fill_missing_from(extra);
        }

        let movie_info = pipeline::reconcile(&critic, &movie);
        let scores = pipeline::normalize(&critic, movie.vote_average)?;
        let streaming = pipeline::streaming_offers(&providers, &self.region);
        debug!(
            "Assembled {} with {} scores and {} streaming offers",
            id,
            scores.available().count(),
            streaming.len()
        );

        Ok(ResolvedMovie {
            movie_info,
            average: scores.average(),
            scores,
            streaming,
        })
    }

    /// Issue the three detail calls concurrently
    ///
    /// The critic lookup absorbs its own failure, so only the two rich-provider
    /// calls can short-circuit the join.
    async fn fetch_details(
        &self,
        id: &str,
    ) -> Result<(CatalogMovie, CriticRecord, WatchProviders), ResolveError> {
        let critic = async { Ok::<_, ProviderError>(self.lookup_critic(id).await) };

        let (movie, critic, providers) = tokio::try_join!(
            self.catalog.movie(id),
            critic,
            self.catalog.watch_providers(id),
        )?;

        Ok((movie, critic, providers))
    }

    /// Critic lookup that never fails: errors become an empty record
    async fn lookup_critic(&self, key: &str) -> CriticRecord {
        match self.critic.lookup(key).await {
            Ok(record) => record,
            Err(e) => {
                warn!(
                    "Critic lookup for {} failed, continuing without critic data: {}",
                    key, e
                );
                CriticRecord::default()
            }
        }
    }
}

enum SearchOutcome {
    Single(String),
    Multiple(Vec<SearchCandidate>),
}

/// Key for the one critic retry, if a retry is warranted.
///
/// Only when the critic record is still empty and the rich record exposes a
/// cross-reference id different from the key already tried.
fn cross_reference_key<'a>(
    critic: &CriticRecord,
    movie: &'a CatalogMovie,
    tried: &str,
) -> Option<&'a str> {
    let key = meaningful(movie.imdb_id.as_deref())?;
    (critic.is_empty() && key != tried).then_some(key)
}
