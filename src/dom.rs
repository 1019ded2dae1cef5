//! Document Model
//!
//! Read-only access to one parsed page through the `dom_query` crate.
//! Selection returns element handles in document order; the accessors
//! return plain owned values and never substitute defaults. Failure
//! policies live in `extractor::fields`.

pub use dom_query::{Document, Selection};

// === Parsing ===

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// All elements under `root` matching `selector`, in document order.
///
/// Returns an empty vector when nothing matches.
#[must_use]
pub fn select<'a>(root: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    root.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// First element under `root` matching `selector`.
#[must_use]
pub fn select_first<'a>(root: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    let found = root.select_single(selector);
    found.exists().then_some(found)
}

/// First element in the whole document matching `selector`.
#[must_use]
pub fn select_in_document<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let found = doc.select(selector).first();
    found.exists().then_some(found)
}

/// All elements in the whole document matching `selector`, in document order.
#[must_use]
pub fn select_all_in_document<'a>(doc: &'a Document, selector: &str) -> Vec<Selection<'a>> {
    doc.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

// === Element Accessors ===

/// Text content of the element and its descendants, trimmed.
#[must_use]
pub fn text(sel: &Selection) -> String {
    sel.text().trim().to_string()
}

/// Attribute value, if the attribute is present.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Inner HTML of the element, trimmed.
#[must_use]
pub fn inner_html(sel: &Selection) -> String {
    sel.inner_html().trim().to_string()
}

// === Tree Navigation ===

/// Direct element children, in document order.
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Vec<Selection<'a>> {
    sel.children()
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Next element sibling, skipping text nodes.
#[must_use]
pub fn next_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.next_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.next_sibling();
        }
        None
    })
}
