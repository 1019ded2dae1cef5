//! Vote action extraction.
//!
//! Reads the vote arrows and the optional undo link of one item and returns
//! the actions currently available on it.

use dom_query::Selection;
use url::Url;

use crate::action::{Action, ActionKind, Actions};
use crate::dom;
use crate::error::{Error, Result};
use crate::extractor::fields;
use crate::selectors;
use crate::url_utils;
use crate::Options;

/// Extract the vote actions of one item.
///
/// `vote_region` holds the arrows (the item or comment row); `undo_region`
/// holds the "unvote"/"undown" link (the metadata row, or the comment row
/// itself). Anchors without an `auth` parameter are disabled controls and
/// are skipped when `opts.require_vote_auth` is set. Labels outside the
/// known vocabulary fail with `StructuralMismatch`.
///
/// When an undo action is present its counterpart arrow is dropped: the
/// site keeps rendering the hidden arrow after a vote.
pub fn extract_actions(
    vote_region: &Selection,
    undo_region: &Selection,
    opts: &Options,
) -> Result<Actions> {
    let mut actions = Actions::new();

    for anchor in dom::select(vote_region, selectors::VOTE_ANCHOR) {
        // Anchors in the vote column without an arrow are not vote controls.
        let Some(arrow) = dom::select_first(&anchor, selectors::VOTE_ARROW) else {
            continue;
        };
        let label = fields::attribute(&arrow, selectors::VOTE_ARROW, selectors::ATTR_TITLE)?;
        let kind = kind_for_label(&label)?;
        if let Some(url) = actionable_url(&anchor, selectors::VOTE_ANCHOR, opts)? {
            actions.insert(Action::new(kind, url));
        }
    }

    if let Some(anchor) = dom::select_first(undo_region, selectors::VOTE_UNDO) {
        let kind = kind_for_label(&dom::text(&anchor))?;
        if let Some(url) = actionable_url(&anchor, selectors::VOTE_UNDO, opts)? {
            actions.insert(Action::new(kind, url));
        }
    }

    if actions.contains(ActionKind::Unvote) {
        actions.remove(ActionKind::Upvote);
    }
    if actions.contains(ActionKind::Undown) {
        actions.remove(ActionKind::Downvote);
    }

    Ok(actions)
}

fn kind_for_label(label: &str) -> Result<ActionKind> {
    ActionKind::from_label(label.trim())
        .ok_or_else(|| Error::mismatch(format!("unrecognized vote label {label:?}")))
}

/// Absolute URL of a vote anchor, or `None` if the control is disabled.
fn actionable_url(anchor: &Selection, selector: &str, opts: &Options) -> Result<Option<Url>> {
    let href = fields::attribute(anchor, selector, selectors::ATTR_HREF)?;
    let url = fields::parse_url(&href, &opts.base_url)?;

    if opts.require_vote_auth && !url_utils::has_query_param(&url, selectors::PARAM_AUTH) {
        tracing::trace!(%url, "skipping vote control without auth token");
        return Ok(None);
    }
    Ok(Some(url))
}
