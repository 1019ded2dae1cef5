//! Selector vocabulary for the site's markup.
//!
//! Every CSS selector, attribute name, and label the extractors depend on
//! lives here. A markup change on the site is adapted in this file only.
//!
//! Revision: `MARKUP_REVISION`. Older `a.storylink` title anchors are still
//! accepted alongside the current `.titleline > a`.

/// Markup revision this table was written against.
pub const MARKUP_REVISION: &str = "2024-titleline";

// === Listing pages ===

/// Item row. Its metadata row is the next element sibling.
pub const ITEM_ROW: &str = "tr.athing";

/// Title anchor inside the item row.
pub const TITLE_LINK: &str = ".titleline > a, a.storylink";

/// Author name inside a metadata row or comment header.
pub const AUTHOR: &str = ".hnuser";

/// Age description inside a metadata row or comment header.
pub const AGE: &str = ".age";

/// Score inside a metadata row ("42 points").
pub const SCORE: &str = ".score";

/// Comment-count link inside a metadata row ("12 comments" / "discuss").
///
/// Direct children only, so the age link (also `item?id=`) is not matched.
pub const COMMENT_COUNT_LINK: &str =
    ".subline > a[href^='item?id='], .subtext > a[href^='item?id=']";

/// Label the site uses instead of "0 comments".
pub const DISCUSS_LABEL: &str = "discuss";

// === Item pages ===

/// Primary content table of an item page.
pub const FAT_ITEM: &str = "table.fatitem";

/// Top-level rows of the primary content table.
pub const FAT_ITEM_ROWS: &str = "table.fatitem > tbody > tr";

/// Comment submission form.
pub const COMMENT_FORM: &str = "form[action=comment]";

/// Hidden HMAC input of a comment form.
pub const COMMENT_FORM_HMAC: &str = "input[name=hmac]";

/// Poll option rows, searched inside a single fat-item row.
pub const POLL_OPTION_ROW: &str = "tr.athing";

// === Comments ===

/// Comment row, in document order.
pub const COMMENT_ROW: &str = "tr.comtr";

/// Indentation spacer image; its width encodes the depth.
pub const COMMENT_INDENT: &str = ".ind > img";

/// Rendered comment body.
pub const COMMENT_TEXT: &str = ".commtext";

// === Votes ===

/// Anchors in the vote column. Only those wrapping a `VOTE_ARROW` count.
pub const VOTE_ANCHOR: &str = ".votelinks a";

/// Arrow inside a vote anchor; its `title` is the direction label.
pub const VOTE_ARROW: &str = ".votearrow";

/// Undo anchor ("unvote" / "undown"); its text is the label.
pub const VOTE_UNDO: &str = "[id^=unv] > a";

// === Attributes ===

pub const ATTR_ID: &str = "id";
pub const ATTR_HREF: &str = "href";
pub const ATTR_TITLE: &str = "title";
pub const ATTR_WIDTH: &str = "width";
pub const ATTR_VALUE: &str = "value";

// === Vote URL query parameters ===

/// Query parameter holding the vote direction.
pub const PARAM_DIRECTION: &str = "how";

/// Query parameter holding the per-viewer authorization token.
pub const PARAM_AUTH: &str = "auth";

// === Vote labels ===

pub const LABEL_UPVOTE: &str = "upvote";
pub const LABEL_DOWNVOTE: &str = "downvote";
pub const LABEL_UNVOTE: &str = "unvote";
pub const LABEL_UNDOWN: &str = "undown";
