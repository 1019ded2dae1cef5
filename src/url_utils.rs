//! URL Utility Functions
//!
//! Href resolution against the site origin, the absolute-link check used by
//! listing pages, and query-parameter rewriting for vote URLs.

use url::{form_urlencoded, ParseError, Url};

use crate::error::{Error, Result};

/// Parse `href` as an absolute URL with a host.
///
/// A relative href (the site writes self-posts as `item?id=...`) yields
/// `Ok(None)`, as does an absolute URL without a host such as `mailto:`.
/// Anything else that fails to parse is `MalformedUrl`.
pub fn absolute_url(href: &str) -> Result<Option<Url>> {
    let href = href.trim();

    match Url::parse(href) {
        Ok(url) if url.host().is_some() => Ok(Some(url)),
        Ok(_) | Err(ParseError::RelativeUrlWithoutBase) => Ok(None),
        Err(source) => Err(Error::malformed_url(href, source)),
    }
}

/// Resolve a relative or absolute `href` against `base`.
pub fn resolve(href: &str, base: &Url) -> Result<Url> {
    let href = href.trim();
    base.join(href).map_err(|source| Error::malformed_url(href, source))
}

/// First value of query parameter `name`.
#[must_use]
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Whether query parameter `name` is present with a non-empty value.
#[must_use]
pub fn has_query_param(url: &Url, name: &str) -> bool {
    query_param(url, name).is_some_and(|value| !value.is_empty())
}

/// Copy of `url` with every `name` parameter removed and `name=value` appended.
///
/// The remaining parameters are copied as written, so their encoding and
/// order survive. Scheme, host, path, and fragment are kept.
#[must_use]
pub fn replace_query_param(url: &Url, name: &str, value: &str) -> Url {
    let mut pieces: Vec<String> = url
        .query()
        .unwrap_or_default()
        .split('&')
        .filter(|piece| !piece.is_empty())
        .filter(|piece| {
            form_urlencoded::parse(piece.as_bytes())
                .next()
                .is_none_or(|(key, _)| key != name)
        })
        .map(str::to_string)
        .collect();
    pieces.push(
        form_urlencoded::Serializer::new(String::new())
            .append_pair(name, value)
            .finish(),
    );

    let mut rewritten = url.clone();
    rewritten.set_query(Some(&pieces.join("&")));
    rewritten
}
