//! The caller-facing, reconciled movie record.

use serde::{Serialize, Serializer};

/// Marker emitted for any field neither provider could fill.
pub const UNAVAILABLE: &str = "N/A";

/// Every semantic field of [`CanonicalMovieInfo`], in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Year,
    Rated,
    Released,
    Genre,
    Director,
    Writer,
    Actors,
    Language,
    Country,
    Awards,
    Production,
    BoxOffice,
    Dvd,
    Type,
    Plot,
    Website,
    Poster,
    ImdbVotes,
}

impl Field {
    pub const ALL: [Field; 19] = [
        Field::Title,
        Field::Year,
        Field::Rated,
        Field::Released,
        Field::Genre,
        Field::Director,
        Field::Writer,
        Field::Actors,
        Field::Language,
        Field::Country,
        Field::Awards,
        Field::Production,
        Field::BoxOffice,
        Field::Dvd,
        Field::Type,
        Field::Plot,
        Field::Website,
        Field::Poster,
        Field::ImdbVotes,
    ];
}

/// Reconciled record: one value per field, `None` meaning unavailable.
///
/// `None` serializes as [`UNAVAILABLE`], so callers never see an empty
/// string or a provider's own placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalMovieInfo {
    #[serde(serialize_with = "or_unavailable")]
    pub title: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub year: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub rated: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub released: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub genre: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub director: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub writer: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub actors: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub language: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub country: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub awards: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub production: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub box_office: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub dvd: Option<String>,
    #[serde(rename = "type", serialize_with = "or_unavailable")]
    pub kind: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub plot: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub website: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub poster: Option<String>,
    #[serde(serialize_with = "or_unavailable")]
    pub imdb_votes: Option<String>,
}

impl CanonicalMovieInfo {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub(crate) fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Year => &mut self.year,
            Field::Rated => &mut self.rated,
            Field::Released => &mut self.released,
            Field::Genre => &mut self.genre,
            Field::Director => &mut self.director,
            Field::Writer => &mut self.writer,
            Field::Actors => &mut self.actors,
            Field::Language => &mut self.language,
            Field::Country => &mut self.country,
            Field::Awards => &mut self.awards,
            Field::Production => &mut self.production,
            Field::BoxOffice => &mut self.box_office,
            Field::Dvd => &mut self.dvd,
            Field::Type => &mut self.kind,
            Field::Plot => &mut self.plot,
            Field::Website => &mut self.website,
            Field::Poster => &mut self.poster,
            Field::ImdbVotes => &mut self.imdb_votes,
        }
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Title => &self.title,
            Field::Year => &self.year,
            Field::Rated => &self.rated,
            Field::Released => &self.released,
            Field::Genre => &self.genre,
            Field::Director => &self.director,
            Field::Writer => &self.writer,
            Field::Actors => &self.actors,
            Field::Language => &self.language,
            Field::Country => &self.country,
            Field::Awards => &self.awards,
            Field::Production => &self.production,
            Field::BoxOffice => &self.box_office,
            Field::Dvd => &self.dvd,
            Field::Type => &self.kind,
            Field::Plot => &self.plot,
            Field::Website => &self.website,
            Field::Poster => &self.poster,
            Field::ImdbVotes => &self.imdb_votes,
        }
    }
}

fn or_unavailable<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or(UNAVAILABLE))
}
