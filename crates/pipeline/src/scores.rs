//! Score normalization.
//!
//! Each provider encodes ratings its own way: a 0-10 decimal, a percentage
//! string, an integer string, a 0-10 float. Every source is brought onto a
//! 0-100 integer scale, and the average covers only the sources that
//! actually reported.

use serde::{Serialize, Serializer};
use sources::{CriticRecord, meaningful};
use thiserror::Error;

use crate::canonical::UNAVAILABLE;

pub const IMDB: &str = "IMDb";
pub const ROTTEN_TOMATOES: &str = "Rotten Tomatoes";
pub const METACRITIC: &str = "Metacritic";
pub const TMDB: &str = "TMDb";

/// A score field held real data but could not be read as a 0-100 score.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Invalid {score_source} score: {value:?}")]
pub struct ScoreError {
    pub score_source: &'static str,
    pub value: String,
}

/// Normalized scores, `None` meaning the source did not report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreSet {
    #[serde(rename = "IMDb")]
    pub imdb: Option<u32>,
    #[serde(rename = "Rotten Tomatoes")]
    pub rotten_tomatoes: Option<u32>,
    #[serde(rename = "Metacritic")]
    pub metacritic: Option<u32>,
    #[serde(rename = "TMDb")]
    pub tmdb: Option<u32>,
}

impl ScoreSet {
    /// Values of the sources that reported, in fixed source order.
    pub fn available(&self) -> impl Iterator<Item = u32> {
        [self.imdb, self.rotten_tomatoes, self.metacritic, self.tmdb]
            .into_iter()
            .flatten()
    }

    /// Unweighted mean of the available sources, rounded.
    pub fn average(&self) -> Average {
        let values: Vec<u32> = self.available().collect();
        if values.is_empty() {
            return Average(None);
        }
        let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
        Average(Some((sum as f64 / values.len() as f64).round() as u32))
    }
}

/// Average score, serialized as a number or the unavailable marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Average(pub Option<u32>);

impl Serialize for Average {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Some(value) => serializer.serialize_u32(value),
            None => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

/// Build the score set from the critic record and the rich vote average.
pub fn normalize(
    critic: &CriticRecord,
    rich_vote_average: Option<f64>,
) -> Result<ScoreSet, ScoreError> {
    Ok(ScoreSet {
        imdb: decimal_out_of_ten(IMDB, critic.imdb_rating.as_deref())?,
        rotten_tomatoes: percentage(ROTTEN_TOMATOES, critic.rating(ROTTEN_TOMATOES))?,
        metacritic: integer(METACRITIC, critic.metascore.as_deref())?,
        tmdb: vote_average(rich_vote_average)?,
    })
}

/// Highest value on the common scale.
const SCALE_MAX: u32 = 100;

/// "6.5" -> 65
fn decimal_out_of_ten(source: &'static str, raw: Option<&str>) -> Result<Option<u32>, ScoreError> {
    let Some(value) = meaningful(raw) else {
        return Ok(None);
    };
    let parsed = value.parse::<f64>().map_err(|_| invalid(source, value))?;
    scaled(source, value, parsed * 10.0).map(Some)
}

/// "91%" -> 91
fn percentage(source: &'static str, raw: Option<&str>) -> Result<Option<u32>, ScoreError> {
    let Some(value) = meaningful(raw) else {
        return Ok(None);
    };
    integer(source, Some(value.trim_end_matches('%')))
}

/// "73" -> 73
fn integer(source: &'static str, raw: Option<&str>) -> Result<Option<u32>, ScoreError> {
    let Some(value) = meaningful(raw) else {
        return Ok(None);
    };
    match value.parse::<u32>() {
        Ok(v) if v <= SCALE_MAX => Ok(Some(v)),
        _ => Err(invalid(source, value)),
    }
}

/// 7.3 -> 73. Zero means "no votes yet" upstream, so it is unavailable.
fn vote_average(value: Option<f64>) -> Result<Option<u32>, ScoreError> {
    match value {
        Some(v) if v == 0.0 => Ok(None),
        Some(v) => scaled(TMDB, &v.to_string(), v * 10.0).map(Some),
        None => Ok(None),
    }
}

/// Round onto the 0-100 scale, rejecting anything that falls outside it.
fn scaled(source: &'static str, raw: &str, value: f64) -> Result<u32, ScoreError> {
    let rounded = value.round();
    if rounded.is_finite() && (0.0..=f64::from(SCALE_MAX)).contains(&rounded) {
        Ok(rounded as u32)
    } else {
        Err(invalid(source, raw))
    }
}

fn invalid(source: &'static str, value: &str) -> ScoreError {
    ScoreError {
        score_source: source,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sources::CriticRating;

    fn critic(imdb: &str, rotten: Option<&str>, metascore: &str) -> CriticRecord {
        CriticRecord {
            imdb_rating: Some(imdb.to_string()),
            metascore: Some(metascore.to_string()),
            ratings: rotten
                .map(|v| {
                    vec![CriticRating {
                        source: ROTTEN_TOMATOES.to_string(),
                        value: v.to_string(),
                    }]
                })
                .unwrap_or_default(),
            ..Default::default()
        }
    }

    #[test]
    fn test_reference_scenario() {
        let scores = normalize(&critic("6.5", Some("91%"), "N/A"), Some(7.3)).unwrap();

        assert_eq!(scores.imdb, Some(65));
        assert_eq!(scores.rotten_tomatoes, Some(91));
        assert_eq!(scores.metacritic, None);
        assert_eq!(scores.tmdb, Some(73));
        assert_eq!(scores.average(), Average(Some(76)));
    }

    #[test]
    fn test_missing_sources_are_excluded_from_average() {
        let scores = normalize(&critic("N/A", None, "80"), None).unwrap();

        assert_eq!(scores.imdb, None);
        assert_eq!(scores.rotten_tomatoes, None);
        assert_eq!(scores.tmdb, None);
        assert_eq!(scores.average(), Average(Some(80)), "Not dragged down by missing sources");
    }

    #[test]
    fn test_all_unavailable_average_is_unavailable() {
        let scores = normalize(&CriticRecord::default(), None).unwrap();
        assert_eq!(scores, ScoreSet::default());
        assert_eq!(scores.average(), Average(None));

        let json = serde_json::to_value(scores.average()).unwrap();
        assert_eq!(json, UNAVAILABLE);
    }

    #[test]
    fn test_zero_vote_average_is_unavailable() {
        let scores = normalize(&CriticRecord::default(), Some(0.0)).unwrap();
        assert_eq!(scores.tmdb, None);
    }

    #[test]
    fn test_scale_bounds_are_accepted() {
        let scores = normalize(&critic("10", Some("100%"), "0"), Some(10.0)).unwrap();

        assert_eq!(scores.imdb, Some(100));
        assert_eq!(scores.rotten_tomatoes, Some(100));
        assert_eq!(scores.metacritic, Some(0));
        assert_eq!(scores.tmdb, Some(100));
        assert_eq!(scores.average(), Average(Some(75)));
    }

    #[test]
    fn test_out_of_range_value_is_an_error() {
        let err = normalize(&critic("15", None, "N/A"), None).unwrap_err();
        assert_eq!(err.score_source, IMDB);
        assert_eq!(err.value, "15");

        let err = normalize(&critic("N/A", None, "250"), None).unwrap_err();
        assert_eq!(err.score_source, METACRITIC);

        let err = normalize(&critic("N/A", Some("4294967295%"), "N/A"), None).unwrap_err();
        assert_eq!(err.score_source, ROTTEN_TOMATOES);

        let err = normalize(&critic("1e300", None, "N/A"), None).unwrap_err();
        assert_eq!(err.score_source, IMDB);

        let err = normalize(&critic("-1", None, "N/A"), None).unwrap_err();
        assert_eq!(err.score_source, IMDB);

        let err = normalize(&CriticRecord::default(), Some(11.5)).unwrap_err();
        assert_eq!(err.score_source, TMDB);
    }

    #[test]
    fn test_average_of_large_values_does_not_overflow() {
        let scores = ScoreSet {
            imdb: Some(u32::MAX),
            metacritic: Some(u32::MAX),
            ..Default::default()
        };
        assert_eq!(scores.average(), Average(Some(u32::MAX)));
    }

    #[test]
    fn test_average_rounds_mean() {
        // (65 + 70) / 2 = 67.5
        let scores = ScoreSet {
            imdb: Some(65),
            metacritic: Some(70),
            ..Default::default()
        };
        assert_eq!(scores.average(), Average(Some(68)));
    }

    #[test]
    fn test_unparsable_value_is_an_error() {
        let err = normalize(&critic("eight", None, "N/A"), None).unwrap_err();
        assert_eq!(err.score_source, IMDB);
        assert_eq!(err.value, "eight");

        let err = normalize(&critic("N/A", Some("ninety%"), "N/A"), None).unwrap_err();
        assert_eq!(err.score_source, ROTTEN_TOMATOES);
    }

    #[test]
    fn test_scores_serialize_with_source_names() {
        let scores = ScoreSet {
            imdb: Some(65),
            ..Default::default()
        };
        let json = serde_json::to_value(scores).unwrap();

        assert_eq!(json["IMDb"], 65);
        assert!(json["Rotten Tomatoes"].is_null());
        assert!(json["Metacritic"].is_null());
        assert!(json["TMDb"].is_null());
    }
}
