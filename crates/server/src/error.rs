//! Errors raised while resolving a movie.

use pipeline::ScoreError;
use sources::ProviderError;
use thiserror::Error;

/// Everything that can stop a resolution before a response is built.
///
/// Critic-provider failures never appear here; they are absorbed by the
/// resolver.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Title search returned zero candidates
    #[error("No matches found for {0:?}")]
    NoMatches(String),

    /// A non-fault-tolerant rich-provider call failed
    #[error("Provider call failed: {0}")]
    Provider(#[from] ProviderError),

    /// A score field could not be normalized
    #[error("Score normalization failed: {0}")]
    Score(#[from] ScoreError),
}
