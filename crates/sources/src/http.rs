//! Request/response plumbing shared by both provider clients.

use reqwest::{Response, Url};
use serde::de::DeserializeOwned;

use crate::error::{ProviderError, Result};

/// Append path segments to a base URL, percent-encoding each one.
///
/// Ids come straight from callers, so they are never spliced into the path
/// as raw text.
pub(crate) fn build_url(base: &str, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(base).map_err(|e| ProviderError::InvalidUrl(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| ProviderError::InvalidUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Turn a response into `T`, or into `ProviderError::Api` for non-2xx.
pub(crate) async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message: status_message(&body),
        });
    }

    let deserializer = &mut serde_json::Deserializer::from_str(&body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| ProviderError::Decode {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

/// Pull a human-readable message out of an error body.
///
/// TMDb uses `status_message`, OMDb uses `Error`. Anything else is dropped
/// so raw upstream payloads never leak to callers.
fn status_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["status_message", "Error"]
        .iter()
        .find_map(|key| value.get(key)?.as_str())
        .map(str::to_string)
}
