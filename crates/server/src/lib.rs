//! Server crate for the movie resolver.
//!
//! This crate contains the resolver that coordinates the provider clients
//! and the reconciliation pipeline, the failure classifier, and the HTTP
//! surface built on top of them.

pub mod api;
pub mod classify;
pub mod config;
pub mod error;
pub mod orchestrator;

pub use api::{AppState, build_router, disambiguation_body};
pub use classify::{ClassifiedFailure, FailureKind, classify};
pub use config::{ProviderConfig, ServerConfig};
pub use error::ResolveError;
pub use orchestrator::{MovieQuery, MovieResolver, Resolution, ResolvedMovie};
