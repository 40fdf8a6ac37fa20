//! HTTP utilities.
//!
//! Used to decide whether a link points at an image before rendering a
//! preview for it.
//!
//! TODO: Sniff the body (magic bytes) when a server omits `Content-Type`.
use std::time::Duration;

use thiserror::Error;

/// User-Agent header sent with all requests.
///
/// Mimics a common desktop browser to avoid basic bot detection.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default request timeout.
const TIMEOUT: Duration = Duration::from_secs(30);

/// Failure to check a URL.
#[derive(Debug, Error)]
pub enum NetError {
    /// The HTTP client could not be built or the request failed in transit.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// A `data:` URL without the `,` separating metadata from payload.
    #[error("invalid data URL: missing comma")]
    MalformedDataUrl,
}

/// The header of a `data:` URL. The payload is never decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataURL {
    /// Media type, lowercased, without parameters (`image/png`).
    /// [RFC 2397](https://www.rfc-editor.org/rfc/rfc2397) defaults it to
    /// `text/plain` when omitted.
    pub media_type: String,
}

impl DataURL {
    /// Parse a raw `data:` URL.
    ///
    /// # Errors
    ///
    /// Returns [`NetError::MalformedDataUrl`] if there is no comma.
    pub fn parse(raw: &str) -> Result<Self, NetError> {
        let body = raw.trim_start_matches("data:");
        let (metadata, _payload) = body.split_once(',').ok_or(NetError::MalformedDataUrl)?;

        let media_type = metadata
            .split(';')
            .next()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or("text/plain")
            .to_ascii_lowercase();

        Ok(Self { media_type })
    }
}

/// Determine whether `url` points at an image, judged by its MIME type.
///
/// `data:` URLs are answered from their declared media type without any
/// network access. Anything else is fetched; a non-success status means
/// "not an image" rather than an error.
///
/// # Errors
///
/// Returns [`NetError`] if the client cannot be created, the request fails in
/// transit, or a `data:` URL is malformed.
pub fn url_is_image(url: &str) -> Result<bool, NetError> {
    if url.starts_with("data:") {
        return Ok(DataURL::parse(url)?.media_type.starts_with("image/"));
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(TIMEOUT)
        .build()?;

    let response = client
        .get(url)
        .header("User-Agent", USER_AGENT)
        .send()?;

    if !response.status().is_success() {
        return Ok(false);
    }

    Ok(response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|content_type| {
            content_type
                .trim_start()
                .to_ascii_lowercase()
                .starts_with("image/")
        }))
}
