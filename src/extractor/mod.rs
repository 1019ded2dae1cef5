//! Page extractors.
//!
//! # Module Structure
//!
//! - `fields`: Required-or-fail field lookups and number/URL parsing
//! - `actions`: Vote arrows and undo links
//! - `comments`: Comment rows and the tree builder
//! - `listing`: Listing pages
//! - `item`: Item pages and the page-shape classifier
//! - `form`: Comment form token
//!
//! # Usage
//!
//! ```rust
//! use rs_hackernews::{dom, extractor, Options};
//!
//! let doc = dom::parse("<table></table>");
//! let items = extractor::extract_listing(&doc, &Options::default())?;
//! assert!(items.is_empty());
//! # Ok::<(), rs_hackernews::Error>(())
//! ```

pub mod actions;
pub mod comments;
pub mod fields;
pub mod form;
pub mod item;
pub mod listing;

pub use actions::extract_actions;
pub use comments::{build_comment_tree, extract_comments, CommentRow, CommentTreeBuilder};
pub use form::extract_comment_hmac;
pub use item::{extract_item, Body, PageShape};
pub use listing::extract_listing;
