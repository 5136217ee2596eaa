//! Reconciliation pipeline for provider records.
//!
//! This crate provides:
//! - Field reconciliation driven by a declarative precedence table
//! - Score normalization onto a common 0-100 scale
//! - Regional streaming offer mapping
//!
//! ## Architecture
//! Everything here is pure and synchronous. Given the two provider records
//! for one movie, the pipeline produces:
//! 1. A [`CanonicalMovieInfo`] (critic value, else rich value, else `N/A`)
//! 2. A [`ScoreSet`] and its [`Average`]
//! 3. The flat-rate [`StreamingOffer`]s for one region
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{normalize, reconcile, streaming_offers};
//!
//! let info = reconcile(&critic, &movie);
//! let scores = normalize(&critic, movie.vote_average)?;
//! let streaming = streaming_offers(&providers, "GB");
//! ```

pub mod canonical;
pub mod reconcile;
pub mod scores;
pub mod streaming;

// Re-export main types
pub use canonical::{CanonicalMovieInfo, Field, UNAVAILABLE};
pub use reconcile::{FIELD_RULES, FieldRule, POSTER_BASE_URL, reconcile};
pub use scores::{Average, ScoreError, ScoreSet, normalize};
pub use streaming::{LOGO_BASE_URL, StreamingOffer, streaming_offers};
