//! Wire types for the two upstream providers.
//!
//! The rich provider (TMDb) and the critic provider (OMDb) disagree on
//! almost everything: casing, id shape, how a missing value is encoded.
//! These structs mirror each provider's JSON closely so that reconciliation
//! can happen in one place, downstream, with all the quirks visible.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Shared helpers
// =============================================================================

/// The critic provider's "no data" placeholder.
pub const SENTINEL: &str = "N/A";

/// Returns the value only if it carries real data.
///
/// Empty strings and the [`SENTINEL`] are both treated as missing.
pub fn meaningful(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != SENTINEL)
}

// =============================================================================
// Rich provider (TMDb)
// =============================================================================

/// One hit from a title search, returned to the caller for disambiguation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCandidate {
    pub id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_path: Option<String>,
}

/// Entry with just a display name (genres, production companies).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub english_name: String,
}

/// Movie detail record from the rich provider.
///
/// Multi-valued fields keep the provider's own ordering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogMovie {
    pub id: u64,
    pub title: Option<String>,
    pub original_title: Option<String>,
    /// `YYYY-MM-DD`, or an empty string for unreleased titles
    pub release_date: Option<String>,
    pub genres: Vec<NamedEntry>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub production_companies: Vec<NamedEntry>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub homepage: Option<String>,
    /// 0-10 scale; 0.0 means nobody has voted yet
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    /// IMDb id, usable as a cross-reference key against the critic provider
    pub imdb_id: Option<String>,
}

impl CatalogMovie {
    /// Year part of the release date, if there is one.
    pub fn release_year(&self) -> Option<&str> {
        release_year(self.release_date.as_deref())
    }
}

/// Extract `YYYY` from a `YYYY-MM-DD` date string.
pub fn release_year(date: Option<&str>) -> Option<&str> {
    meaningful(date)
        .and_then(|d| d.split('-').next())
        .filter(|y| !y.is_empty())
}

/// Watch-provider lookup result, keyed by region code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchProviders {
    pub results: HashMap<String, RegionOffers>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionOffers {
    pub flatrate: Vec<ProviderOffer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOffer {
    pub provider_name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
}

impl WatchProviders {
    /// Flat-rate (subscription) offers for one region, empty if none.
    pub fn flatrate(&self, region: &str) -> &[ProviderOffer] {
        self.results
            .get(region)
            .map(|r| r.flatrate.as_slice())
            .unwrap_or_default()
    }
}

// =============================================================================
// Critic provider (OMDb)
// =============================================================================

/// A named rating, e.g. `{ "Source": "Rotten Tomatoes", "Value": "91%" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CriticRating {
    pub source: String,
    pub value: String,
}

/// Record returned by the critic provider.
///
/// Every field is optional: a lookup that misses comes back as
/// `{"Response":"False","Error":"..."}` with a 200 status, and individual
/// fields are often the `N/A` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CriticRecord {
    pub title: Option<String>,
    pub year: Option<String>,
    pub rated: Option<String>,
    pub released: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub writer: Option<String>,
    pub actors: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub awards: Option<String>,
    pub production: Option<String>,
    pub box_office: Option<String>,
    #[serde(rename = "DVD")]
    pub dvd: Option<String>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
    pub plot: Option<String>,
    pub website: Option<String>,
    pub poster: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    pub metascore: Option<String>,
    pub ratings: Vec<CriticRating>,
    /// `"True"` / `"False"` marker
    pub response: Option<String>,
    pub error: Option<String>,
}

impl CriticRecord {
    /// A record without a title is treated as "nothing found".
    pub fn is_empty(&self) -> bool {
        meaningful(self.title.as_deref()).is_none()
    }

    /// Value of the named rating source, if reported.
    pub fn rating(&self, source: &str) -> Option<&str> {
        self.ratings
            .iter()
            .find(|r| r.source == source)
            .map(|r| r.value.as_str())
    }

    /// Fill fields that are still missing from another lookup of the same
    /// title. Fields that already carry data are left untouched.
    pub fn fill_missing_from(&mut self, other: CriticRecord) {
        fill(&mut self.title, other.title);
        fill(&mut self.year, other.year);
        fill(&mut self.rated, other.rated);
        fill(&mut self.released, other.released);
        fill(&mut self.genre, other.genre);
        fill(&mut self.director, other.director);
        fill(&mut self.writer, other.writer);
        fill(&mut self.actors, other.actors);
        fill(&mut self.language, other.language);
        fill(&mut self.country, other.country);
        fill(&mut self.awards, other.awards);
        fill(&mut self.production, other.production);
        fill(&mut self.box_office, other.box_office);
        fill(&mut self.dvd, other.dvd);
        fill(&mut self.kind, other.kind);
        fill(&mut self.plot, other.plot);
        fill(&mut self.website, other.website);
        fill(&mut self.poster, other.poster);
        fill(&mut self.imdb_rating, other.imdb_rating);
        fill(&mut self.imdb_votes, other.imdb_votes);
        fill(&mut self.metascore, other.metascore);

        for rating in other.ratings {
            if self.rating(&rating.source).is_none() {
                self.ratings.push(rating);
            }
        }
    }
}

fn fill(slot: &mut Option<String>, incoming: Option<String>) {
    if meaningful(slot.as_deref()).is_none() && meaningful(incoming.as_deref()).is_some() {
        *slot = incoming;
    }
}
