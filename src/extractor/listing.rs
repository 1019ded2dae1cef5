//! Listing page extraction.
//!
//! A listing is a table of item rows, each followed by a metadata row with
//! author, age, score, and the comment link.

use dom_query::{Document, Selection};

use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::{actions, fields};
use crate::patterns;
use crate::result::{ListableItem, ListableKind};
use crate::selectors;
use crate::url_utils;
use crate::Options;

/// Extract every item summary of a listing page, in page order.
///
/// A page without item rows yields an empty list.
pub fn extract_listing(doc: &Document, opts: &Options) -> Result<Vec<ListableItem>> {
    let item_rows = dom::select_all_in_document(doc, selectors::ITEM_ROW);

    let items = item_rows
        .iter()
        .map(|item_row| {
            let meta_row = fields::required(
                dom::next_element_sibling(item_row),
                "metadata row after tr.athing",
            )?;
            listable_item(item_row, &meta_row, opts)
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(items = items.len(), "extracted listing");
    Ok(items)
}

/// Build one summary from an item row and its metadata row.
pub fn listable_item(
    item_row: &Selection,
    meta_row: &Selection,
    opts: &Options,
) -> Result<ListableItem> {
    let id = fields::id_of(item_row, selectors::ITEM_ROW)?;

    let title_anchor = fields::element(item_row, selectors::TITLE_LINK)?;
    let title = dom::text(&title_anchor);
    let href = fields::attribute(&title_anchor, selectors::TITLE_LINK, selectors::ATTR_HREF)?;
    let url = url_utils::absolute_url(&href)?;

    let author_name = fields::optional_text_of(meta_row, selectors::AUTHOR);
    let age_description = fields::text_of(meta_row, selectors::AGE)?;
    let score = fields::optional_text_of(meta_row, selectors::SCORE)
        .map(|raw| fields::parse_labeled_number(&patterns::SCORE_LABEL, &raw))
        .transpose()?;
    let kind = if author_name.is_some() {
        ListableKind::Story
    } else {
        ListableKind::Job
    };

    Ok(ListableItem {
        kind,
        id,
        url,
        author_name,
        age_description,
        score,
        title,
        actions: actions::extract_actions(item_row, meta_row, opts)?,
        comment_count: comment_count(meta_row)?,
    })
}

/// Comment count from the metadata row's comment link.
///
/// "discuss" means zero; a missing link means unknown, not zero.
pub fn comment_count(meta_row: &Selection) -> Result<Option<u64>> {
    let Some(link) = dom::select(meta_row, selectors::COMMENT_COUNT_LINK).pop() else {
        return Ok(None);
    };
    parse_comment_label(&dom::text(&link)).map(Some)
}

/// Parse a comment link label: "discuss" or `<number> <word>`.
pub fn parse_comment_label(label: &str) -> Result<u64> {
    let label = label.trim();
    if label == selectors::DISCUSS_LABEL {
        return Ok(0);
    }
    fields::parse_labeled_number(&patterns::COMMENT_COUNT_LABEL, label)
        .map_err(|_| Error::malformed_number(label))
}
