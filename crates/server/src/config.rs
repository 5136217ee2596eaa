//! Configuration.
//!
//! Every option can be given as a flag or an environment variable; the
//! binaries load a `.env` file first, so local setups only need that file.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser};
use sources::omdb::OMDB_BASE_URL;
use sources::tmdb::TMDB_BASE_URL;
use sources::{OmdbClient, TmdbClient};

use crate::orchestrator::MovieResolver;

/// Provider credentials and request behavior, shared by the server and CLI.
#[derive(Debug, Clone, Args)]
pub struct ProviderConfig {
    /// TMDb API key
    #[arg(long, env = "TMDB_API_KEY", hide_env_values = true)]
    pub tmdb_api_key: String,

    /// OMDb API key
    #[arg(long, env = "OMDB_API_KEY", hide_env_values = true)]
    pub omdb_api_key: String,

    /// Region code used to select streaming offers
    #[arg(long, env = "WATCH_REGION", default_value = "GB")]
    pub watch_region: String,

    /// Timeout for each upstream request, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 10)]
    pub http_timeout_secs: u64,

    #[arg(long, env = "TMDB_BASE_URL", default_value = TMDB_BASE_URL)]
    pub tmdb_base_url: String,

    #[arg(long, env = "OMDB_BASE_URL", default_value = OMDB_BASE_URL)]
    pub omdb_base_url: String,
}

impl ProviderConfig {
    /// Build the HTTP clients and wire them into a resolver.
    pub fn build_resolver(&self) -> Result<MovieResolver> {
        let http = self.http_client()?;
        Ok(MovieResolver::new(
            Arc::new(self.tmdb_client(http.clone())),
            Arc::new(self.omdb_client(http)),
            self.watch_region.clone(),
        ))
    }

    /// Shared reqwest client with the configured timeout.
    pub fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.http_timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    pub fn tmdb_client(&self, http: reqwest::Client) -> TmdbClient {
        TmdbClient::new(http, &self.tmdb_api_key).with_base_url(&self.tmdb_base_url)
    }

    pub fn omdb_client(&self, http: reqwest::Client) -> OmdbClient {
        OmdbClient::new(http, &self.omdb_api_key).with_base_url(&self.omdb_base_url)
    }
}

/// Movie resolver HTTP server
#[derive(Debug, Clone, Parser)]
#[command(name = "server")]
#[command(about = "Resolve movies across TMDb and OMDb over HTTP", long_about = None)]
pub struct ServerConfig {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory of static files served for every non-API path
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    #[command(flatten)]
    pub providers: ProviderConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from([
            "server",
            "--tmdb-api-key",
            "t",
            "--omdb-api-key",
            "o",
        ])
        .unwrap();

        assert_eq!(config.providers.watch_region, "GB");
        assert_eq!(config.providers.http_timeout_secs, 10);
        assert_eq!(config.providers.tmdb_base_url, TMDB_BASE_URL);
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::try_parse_from([
            "server",
            "--port",
            "8080",
            "--tmdb-api-key",
            "t",
            "--omdb-api-key",
            "o",
            "--watch-region",
            "US",
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.providers.watch_region, "US");
        assert!(config.providers.build_resolver().is_ok());
    }
}
