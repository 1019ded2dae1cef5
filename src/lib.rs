//! # rs-hackernews
//!
//! Structured data extraction from Hacker News pages.
//!
//! Turns the HTML of a listing page or an item page into typed values:
//! item summaries, stories, jobs, polls, comment trees, and the vote
//! actions available to the signed-in user. The library never performs
//! network requests; fetching pages and following action URLs is the
//! caller's job.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_hackernews::{extract_listing_with_options, ListableKind, Options};
//!
//! let html = r#"<table>
//!   <tr class="athing" id="1001">
//!     <td class="title"><span class="titleline"><a href="https://example.com/a">A story</a></span></td>
//!   </tr>
//!   <tr><td class="subtext"><span class="subline">
//!     <span class="score">42 points</span> by <a class="hnuser" href="user?id=alice">alice</a>
//!     <span class="age"><a href="item?id=1001">3 hours ago</a></span> |
//!     <a href="item?id=1001">12&nbsp;comments</a>
//!   </span></td></tr>
//! </table>"#;
//!
//! let items = extract_listing_with_options(html, &Options::default())?;
//! assert_eq!(items[0].kind, ListableKind::Story);
//! assert_eq!(items[0].score, Some(42));
//! assert_eq!(items[0].comment_count, Some(12));
//! # Ok::<(), rs_hackernews::Error>(())
//! ```
//!
//! ## Failure policy
//!
//! Extraction is fail-fast. A required element, attribute, number, or URL
//! that is missing or malformed aborts the whole page with an [`Error`]
//! naming what was wrong. Partial results are never returned.

mod action;
mod category;
mod error;
mod options;
mod patterns;
mod result;
mod user;

/// Read-only document model over `dom_query`.
pub mod dom;

/// Page extractors (listing, item, comments, actions, forms).
pub mod extractor;

/// CSS selectors, attribute names, and labels of the site's markup.
pub mod selectors;

/// URL resolution and query parameter helpers.
pub mod url_utils;

use url::Url;

// Public API - re-exports
pub use action::{apply_vote_result, inverse, Action, ActionKind, Actions, Votable};
pub use category::ListCategory;
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_BASE_URL, DEFAULT_INDENT_UNIT};
pub use result::{
    total_comment_count, Comment, Content, Item, Job, ListableItem, ListableKind, Poll,
    PollOption, Story,
};
pub use user::User;

/// Extracts the item summaries of a listing page using default options.
///
/// Relative hrefs are resolved against `base_url`.
///
/// # Example
///
/// ```rust
/// use rs_hackernews::{extract_listing, ListCategory};
/// use url::Url;
///
/// let base = Url::parse(rs_hackernews::DEFAULT_BASE_URL)?;
/// let page_url = ListCategory::Top.url(&base)?;
/// assert_eq!(page_url.as_str(), "https://news.ycombinator.com/news");
///
/// let items = extract_listing("<table></table>", &base)?;
/// assert!(items.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Fails if any item row lacks a required field or carries a malformed one.
pub fn extract_listing(html: &str, base_url: &Url) -> Result<Vec<ListableItem>> {
    extract_listing_with_options(html, &Options::with_base_url(base_url))
}

/// Extracts the item summaries of a listing page with custom options.
///
/// # Errors
///
/// Fails if any item row lacks a required field or carries a malformed one.
pub fn extract_listing_with_options(html: &str, options: &Options) -> Result<Vec<ListableItem>> {
    let doc = dom::parse(html);
    extractor::extract_listing(&doc, options)
}

/// Extracts the story, job, or poll with `id` from its item page using
/// default options.
///
/// # Example
///
/// ```rust
/// use rs_hackernews::{extract_item, Item};
/// use url::Url;
///
/// let html = r#"<table class="fatitem">
///   <tr class="athing" id="8863">
///     <td class="title"><span class="titleline"><a href="https://www.getdropbox.com/u/2/screencast.html">My YC app: Dropbox</a></span></td>
///   </tr>
///   <tr><td class="subtext"><span class="subline">
///     <span class="score">104 points</span> by <a class="hnuser" href="user?id=dhouston">dhouston</a>
///     <span class="age"><a href="item?id=8863">on April 4, 2007</a></span>
///   </span></td></tr>
/// </table>"#;
///
/// let base = Url::parse("https://news.ycombinator.com/")?;
/// let Item::Story(story) = extract_item(html, 8863, &base)? else {
///     panic!("expected a story");
/// };
/// assert_eq!(story.author_name, "dhouston");
/// assert_eq!(story.score, 104);
/// assert!(!story.is_commentable);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// # Errors
///
/// Fails with `StructuralMismatch` if the page shape is not recognized or
/// the page shows a different item, and with the usual field errors
/// otherwise.
pub fn extract_item(html: &str, id: u64, base_url: &Url) -> Result<Item> {
    extract_item_with_options(html, id, &Options::with_base_url(base_url))
}

/// Extracts the item with `id` from its item page with custom options.
///
/// # Errors
///
/// Same as [`extract_item`].
pub fn extract_item_with_options(html: &str, id: u64, options: &Options) -> Result<Item> {
    let doc = dom::parse(html);
    extractor::extract_item(&doc, id, options)
}

/// Extracts the HMAC token of the comment form on an item or reply page.
///
/// # Errors
///
/// Fails with `MissingElement` if the page has no comment form.
pub fn extract_comment_hmac(html: &str) -> Result<String> {
    let doc = dom::parse(html);
    extractor::extract_comment_hmac(&doc)
}
