//! URL resolution utilities.
//!
//! [URL Standard](https://url.spec.whatwg.org/)

use ::url::{ParseError, Url};

/// [§ 4.6.2 API for a and area elements](https://html.spec.whatwg.org/multipage/links.html#api-for-a-and-area-elements)
///
/// "The href getter steps are: ... Return this's url, serialized."
///
/// Resolve an `href` attribute value the way a browser's `href` property
/// reports it.
///
/// # Algorithm
///
/// STEP 1: Strip leading and trailing ASCII whitespace.
///
/// STEP 2: "If url is an absolute URL, return url" (serialized, so
/// `http://host` becomes `http://host/`).
///
/// STEP 3: Otherwise, if a base is available, resolve against it.
///
/// STEP 4: Otherwise the value cannot be parsed; a browser then returns the
/// attribute value unchanged.
#[must_use]
pub fn resolve_url(href: &str, base_url: Option<&str>) -> String {
    // STEP 1
    let trimmed = href.trim_matches(|c: char| c.is_ascii_whitespace());

    // STEP 2
    match Url::parse(trimmed) {
        Ok(url) => return url.into(),
        Err(ParseError::RelativeUrlWithoutBase) => {}
        Err(_) => return href.to_string(),
    }

    // STEP 3
    base_url
        .and_then(|base| Url::parse(base).ok())
        .and_then(|base| base.join(trimmed).ok())
        // STEP 4
        .map_or_else(|| href.to_string(), Into::into)
}
