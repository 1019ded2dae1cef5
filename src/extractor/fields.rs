//! Field extraction.
//!
//! Two failure policies on top of the document model: `required` turns an
//! absent node or attribute into `MissingElement`/`MissingAttribute`, and
//! the `parse_*` helpers turn unparseable text into `MalformedNumber` or
//! `MalformedUrl`. Nothing here substitutes a default.

use dom_query::Selection;
use regex::Regex;
use url::Url;

use crate::dom;
use crate::error::{Error, Result};
use crate::patterns;
use crate::selectors;
use crate::url_utils;

/// Unwrap a lookup, failing with `MissingElement` for `selector`.
pub fn required<T>(value: Option<T>, selector: &str) -> Result<T> {
    value.ok_or_else(|| Error::missing_element(selector))
}

/// First element under `root` matching `selector`.
pub fn element<'a>(root: &Selection<'a>, selector: &str) -> Result<Selection<'a>> {
    required(dom::select_first(root, selector), selector)
}

/// Attribute `name` of `sel`, which was found with `selector`.
pub fn attribute(sel: &Selection, selector: &str, name: &str) -> Result<String> {
    dom::attr(sel, name).ok_or_else(|| Error::missing_attribute(selector, name))
}

/// Trimmed text of the first element under `root` matching `selector`.
pub fn text_of(root: &Selection, selector: &str) -> Result<String> {
    element(root, selector).map(|sel| dom::text(&sel))
}

/// Trimmed text of the first match, or `None` when nothing matches.
#[must_use]
pub fn optional_text_of(root: &Selection, selector: &str) -> Option<String> {
    dom::select_first(root, selector).map(|sel| dom::text(&sel))
}

/// Inner markup of the first element under `root` matching `selector`.
pub fn markup_of(root: &Selection, selector: &str) -> Result<String> {
    element(root, selector).map(|sel| dom::inner_html(&sel))
}

/// Parse text with a domain parser, e.g. [`parse_number`].
pub fn parsed<T>(raw: &str, parser: impl FnOnce(&str) -> Result<T>) -> Result<T> {
    parser(raw.trim())
}

/// Parse a non-negative integer.
pub fn parse_number(raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::malformed_number(raw))
}

/// Parse the number captured by `pattern` from a label such as "42 points".
pub fn parse_labeled_number(pattern: &Regex, raw: &str) -> Result<u64> {
    let digits = patterns::capture_number(pattern, raw).ok_or_else(|| Error::malformed_number(raw))?;
    parse_number(digits)
}

/// Parse an href relative to `base`.
pub fn parse_url(raw: &str, base: &Url) -> Result<Url> {
    url_utils::resolve(raw, base)
}

/// Numeric `id` attribute of a row found with `selector`.
pub fn id_of(row: &Selection, selector: &str) -> Result<u64> {
    let raw = attribute(row, selector, selectors::ATTR_ID)?;
    parsed(&raw, parse_number)
}

/// Score of a metadata row.
pub fn score_of(meta_row: &Selection) -> Result<u64> {
    let raw = text_of(meta_row, selectors::SCORE)?;
    parse_labeled_number(&patterns::SCORE_LABEL, &raw)
}
