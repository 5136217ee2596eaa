//! Field reconciliation between the critic and rich providers.
//!
//! Precedence is declared once, in [`FIELD_RULES`]: for every canonical
//! field, the critic value wins when it carries data, then the rich
//! provider's equivalent, then unavailable.

use sources::{CatalogMovie, CriticRecord, NamedEntry, meaningful};
use tracing::trace;

use crate::canonical::{CanonicalMovieInfo, Field};

/// High-resolution poster template for rich-provider poster paths.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

type CriticAccessor = fn(&CriticRecord) -> Option<&str>;
type RichAccessor = fn(&CatalogMovie) -> Option<String>;

/// One row of the precedence table.
pub struct FieldRule {
    pub field: Field,
    critic: CriticAccessor,
    rich: RichAccessor,
}

impl FieldRule {
    fn resolve(&self, critic: &CriticRecord, rich: &CatalogMovie) -> Option<String> {
        meaningful((self.critic)(critic))
            .map(str::to_string)
            .or_else(|| (self.rich)(rich).filter(|v| meaningful(Some(v.as_str())).is_some()))
    }
}

fn no_fallback(_: &CatalogMovie) -> Option<String> {
    None
}

/// Comma-joined names, provider order preserved, blanks skipped.
fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined = names
        .filter(|n| !n.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    (!joined.is_empty()).then_some(joined)
}

fn entry_names(entries: &[NamedEntry]) -> Option<String> {
    join_names(entries.iter().map(|e| e.name.as_str()))
}

pub const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: Field::Title,
        critic: |c| c.title.as_deref(),
        rich: |m| {
            meaningful(m.title.as_deref())
                .or(meaningful(m.original_title.as_deref()))
                .map(str::to_string)
        },
    },
    FieldRule {
        field: Field::Year,
        critic: |c| c.year.as_deref(),
        rich: |m| m.release_year().map(str::to_string),
    },
    FieldRule {
        field: Field::Rated,
        critic: |c| c.rated.as_deref(),
        rich: no_fallback,
    },
    FieldRule {
        field: Field::Released,
        critic: |c| c.released.as_deref(),
        rich: no_fallback,
    },
    FieldRule {
        field: Field::Genre,
        critic: |c| c.genre.as_deref(),
        rich: |m| entry_names(&m.genres),
    },
    FieldRule {
        field: Field::Director,
        critic: |c| c.director.as_deref(),
        rich: no_fallback,
    },
    FieldRule {
        field: Field::Writer,
        critic: |c| c.writer.as_deref(),
        rich: no_fallback,
    },
    FieldRule {
        field: Field::Actors,
        critic: |c| c.actors.as_deref(),
        rich: no_fallback,
    },
    FieldRule {
        field: Field::Language,
        critic: |c| c.language.as_deref(),
        rich: |m| join_names(m.spoken_languages.iter().map(|l| l.english_name.as_str())),
    },
    FieldRule {
        field: Field::Country,
        critic: |c| c.country.as_deref(),
        rich: no_fallback,
    },
    FieldRule {
        field: Field::Awards,
        critic: |c| c.awards.as_deref(),
        rich: no_fallback,
    },
    FieldRule {
        field: Field::Production,
        critic: |c| c.production.as_deref(),
        rich: |m| entry_names(&m.production_companies),
    },
    FieldRule {
        field: Field::BoxOffice,
        critic: |c| c.box_office.as_deref(),
        rich: no_fallback,
    },
    FieldRule {
        field: Field::Dvd,
        critic: |c| c.dvd.as_deref(),
        rich: no_fallback,
    },
    FieldRule {
        field: Field::Type,
        critic: |c| c.kind.as_deref(),
        // the detail endpoint only serves movies
        rich: |_| Some("movie".to_string()),
    },
    FieldRule {
        field: Field::Plot,
        critic: |c| c.plot.as_deref(),
        rich: |m| m.overview.clone(),
    },
    FieldRule {
        field: Field::Website,
        critic: |c| c.website.as_deref(),
        rich: |m| m.homepage.clone(),
    },
    FieldRule {
        field: Field::Poster,
        critic: |c| c.poster.as_deref(),
        rich: |m| meaningful(m.poster_path.as_deref()).map(|p| format!("{POSTER_BASE_URL}{p}")),
    },
    FieldRule {
        field: Field::ImdbVotes,
        critic: |c| c.imdb_votes.as_deref(),
        rich: no_fallback,
    },
];

/// Merge both provider records into one canonical record.
///
/// Neither input is modified.
pub fn reconcile(critic: &CriticRecord, rich: &CatalogMovie) -> CanonicalMovieInfo {
    let mut info = CanonicalMovieInfo::default();
    for rule in FIELD_RULES {
        *info.slot_mut(rule.field) = rule.resolve(critic, rich);
    }

    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|f| info.get(*f).is_none())
        .collect();
    if !missing.is_empty() {
        trace!("Unavailable after reconciliation: {:?}", missing);
    }
    info
}
