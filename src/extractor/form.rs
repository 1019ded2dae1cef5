//! Comment form extraction.

use dom_query::Document;

use crate::dom;
use crate::error::Result;
use crate::extractor::fields;
use crate::selectors;

/// HMAC token of the comment form on an item or reply page.
///
/// Posting a comment needs this token alongside the parent id. Fails with
/// `MissingElement` when the page has no comment form, and with
/// `MissingAttribute` when the hidden input has no value.
pub fn extract_comment_hmac(doc: &Document) -> Result<String> {
    let form = fields::required(
        dom::select_in_document(doc, selectors::COMMENT_FORM),
        selectors::COMMENT_FORM,
    )?;
    let input = fields::element(&form, selectors::COMMENT_FORM_HMAC)?;
    fields::attribute(&input, selectors::COMMENT_FORM_HMAC, selectors::ATTR_VALUE)
}
