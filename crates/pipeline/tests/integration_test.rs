//! Integration tests for the pipeline.
//!
//! These tests feed real-shaped provider payloads through reconciliation,
//! normalization and streaming mapping together.

use pipeline::{Average, UNAVAILABLE, normalize, reconcile, streaming_offers};
use sources::{CatalogMovie, CriticRecord, WatchProviders};

fn tmdb_payload() -> CatalogMovie {
    serde_json::from_str(
        r#"{
            "id": 862,
            "title": "Toy Story",
            "original_title": "Toy Story",
            "release_date": "1995-10-30",
            "genres": [
                { "id": 16, "name": "Animation" },
                { "id": 12, "name": "Adventure" },
                { "id": 10751, "name": "Family" },
                { "id": 35, "name": "Comedy" }
            ],
            "spoken_languages": [{ "english_name": "English", "iso_639_1": "en", "name": "English" }],
            "production_companies": [{ "id": 3, "name": "Pixar", "origin_country": "US" }],
            "overview": "Led by Woody, Andy's toys live happily in his room...",
            "poster_path": "/uXDfjJbdP4ijW5hWSBrPrlKpxab.jpg",
            "homepage": "http://toystory.disney.com/toy-story",
            "vote_average": 7.97,
            "vote_count": 17000,
            "imdb_id": "tt0114709"
        }"#,
    )
    .unwrap()
}

fn omdb_payload() -> CriticRecord {
    serde_json::from_str(
        r#"{
            "Title": "Toy Story",
            "Year": "1995",
            "Rated": "G",
            "Released": "22 Nov 1995",
            "Genre": "Animation, Adventure, Comedy",
            "Director": "John Lasseter",
            "Writer": "John Lasseter, Pete Docter, Andrew Stanton",
            "Actors": "Tom Hanks, Tim Allen, Don Rickles",
            "Language": "English",
            "Country": "United States",
            "Awards": "Nominated for 3 Oscars. 29 wins & 24 nominations total",
            "Poster": "https://m.media-amazon.com/images/M/toystory.jpg",
            "Ratings": [
                { "Source": "Internet Movie Database", "Value": "8.3/10" },
                { "Source": "Rotten Tomatoes", "Value": "100%" },
                { "Source": "Metacritic", "Value": "95/100" }
            ],
            "Metascore": "95",
            "imdbRating": "8.3",
            "imdbVotes": "1,086,125",
            "Type": "movie",
            "DVD": "N/A",
            "BoxOffice": "$223,225,679",
            "Production": "N/A",
            "Website": "N/A",
            "Response": "True"
        }"#,
    )
    .unwrap()
}

#[test]
fn test_full_reconciliation() {
    let movie = tmdb_payload();
    let critic = omdb_payload();

    let info = reconcile(&critic, &movie);

    // Critic wins where it has data
    assert_eq!(info.genre.as_deref(), Some("Animation, Adventure, Comedy"));
    assert_eq!(info.director.as_deref(), Some("John Lasseter"));
    assert_eq!(info.released.as_deref(), Some("22 Nov 1995"));
    assert_eq!(
        info.poster.as_deref(),
        Some("https://m.media-amazon.com/images/M/toystory.jpg")
    );
    assert_eq!(info.imdb_votes.as_deref(), Some("1,086,125"));

    // Sentinels fall back to the rich provider, or become unavailable
    assert_eq!(info.production.as_deref(), Some("Pixar"));
    assert_eq!(
        info.website.as_deref(),
        Some("http://toystory.disney.com/toy-story")
    );
    assert_eq!(info.dvd, None);

    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["dvd"], UNAVAILABLE);
    for (key, value) in json.as_object().unwrap() {
        let value = value.as_str().unwrap();
        assert!(!value.is_empty(), "{key} must never be empty");
    }
}

#[test]
fn test_scores_from_both_providers() {
    let movie = tmdb_payload();
    let critic = omdb_payload();

    let scores = normalize(&critic, movie.vote_average).unwrap();

    assert_eq!(scores.imdb, Some(83));
    assert_eq!(scores.rotten_tomatoes, Some(100));
    assert_eq!(scores.metacritic, Some(95));
    assert_eq!(scores.tmdb, Some(80));
    // (83 + 100 + 95 + 80) / 4 = 89.5
    assert_eq!(scores.average(), Average(Some(90)));
}

#[test]
fn test_rich_only_when_critic_is_empty() {
    let movie = tmdb_payload();
    let critic: CriticRecord =
        serde_json::from_str(r#"{"Response":"False","Error":"Error getting data."}"#).unwrap();

    let info = reconcile(&critic, &movie);
    let scores = normalize(&critic, movie.vote_average).unwrap();

    assert_eq!(info.title.as_deref(), Some("Toy Story"));
    assert_eq!(info.year.as_deref(), Some("1995"));
    assert_eq!(info.genre.as_deref(), Some("Animation, Adventure, Family, Comedy"));
    assert_eq!(
        info.poster.as_deref(),
        Some("https://image.tmdb.org/t/p/w500/uXDfjJbdP4ijW5hWSBrPrlKpxab.jpg")
    );
    assert_eq!(info.director, None);
    assert_eq!(scores.available().collect::<Vec<_>>(), vec![80]);
    assert_eq!(scores.average(), Average(Some(80)));
}

#[test]
fn test_streaming_from_payload() {
    let providers: WatchProviders = serde_json::from_str(
        r#"{ "id": 862, "results": {
            "GB": { "link": "https://www.themoviedb.org/movie/862/watch?locale=GB",
                    "flatrate": [
                        { "provider_id": 337, "provider_name": "Disney Plus", "logo_path": "/disney.jpg", "display_priority": 1 },
                        { "provider_id": 999, "provider_name": "Ghost", "logo_path": null }
                    ] },
            "US": { "flatrate": [{ "provider_id": 15, "provider_name": "Hulu", "logo_path": "/hulu.jpg" }] }
        } }"#,
    )
    .unwrap();

    let offers = streaming_offers(&providers, "GB");

    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].name, "Disney Plus");
    assert_eq!(offers[0].logo_url, "https://image.tmdb.org/t/p/w92/disney.jpg");
}
