//! Regional streaming offers.

use serde::Serialize;
use sources::{WatchProviders, meaningful};

/// Logo template for provider logos.
pub const LOGO_BASE_URL: &str = "https://image.tmdb.org/t/p/w92";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamingOffer {
    pub name: String,
    #[serde(rename = "logo")]
    pub logo_url: String,
}

/// Flat-rate offers for `region`, skipping providers without a logo.
pub fn streaming_offers(providers: &WatchProviders, region: &str) -> Vec<StreamingOffer> {
    providers
        .flatrate(region)
        .iter()
        .filter_map(|offer| {
            let logo = meaningful(offer.logo_path.as_deref())?;
            Some(StreamingOffer {
                name: offer.provider_name.clone(),
                logo_url: format!("{LOGO_BASE_URL}{logo}"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sources::{ProviderOffer, RegionOffers};

    fn offer(name: &str, logo: Option<&str>) -> ProviderOffer {
        ProviderOffer {
            provider_name: name.to_string(),
            logo_path: logo.map(str::to_string),
        }
    }

    #[test]
    fn test_offers_for_region_only() {
        let mut providers = WatchProviders::default();
        providers.results.insert(
            "GB".to_string(),
            RegionOffers {
                flatrate: vec![offer("Netflix", Some("/netflix.jpg")), offer("No Logo TV", None)],
            },
        );
        providers.results.insert(
            "US".to_string(),
            RegionOffers {
                flatrate: vec![offer("Hulu", Some("/hulu.jpg"))],
            },
        );

        let offers = streaming_offers(&providers, "GB");

        assert_eq!(
            offers,
            vec![StreamingOffer {
                name: "Netflix".to_string(),
                logo_url: "https://image.tmdb.org/t/p/w92/netflix.jpg".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_region_is_empty() {
        assert!(streaming_offers(&WatchProviders::default(), "GB").is_empty());
    }
}
