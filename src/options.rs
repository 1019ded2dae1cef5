//! Configuration options for page extraction.
//!
//! The `Options` struct carries the site origin used to resolve relative
//! links and the few markup constants that have changed between site
//! revisions.

use std::sync::LazyLock;

use url::Url;

/// Origin of the public site.
pub const DEFAULT_BASE_URL: &str = "https://news.ycombinator.com/";

/// Pixel width of one comment indentation level.
pub const DEFAULT_INDENT_UNIT: u32 = 40;

#[allow(clippy::expect_used)]
static BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"));

/// Configuration options for page extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the live site's settings.
///
/// # Example
///
/// ```rust
/// use rs_hackernews::Options;
///
/// let options = Options {
///     require_vote_auth: false,
///     ..Options::default()
/// };
/// assert_eq!(options.indent_unit, 40);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Origin that relative hrefs (vote links, item links) resolve against.
    ///
    /// Default: `https://news.ycombinator.com/`
    pub base_url: Url,

    /// Width in pixels of one comment nesting level.
    ///
    /// The comment depth is the indentation image width divided by this.
    ///
    /// Default: `40`
    pub indent_unit: u32,

    /// Skip vote anchors whose href lacks the `auth` query parameter.
    ///
    /// Logged-out pages render vote arrows that cannot be used. With this
    /// disabled, anchor presence alone makes a control actionable.
    ///
    /// Default: `true`
    pub require_vote_auth: bool,
}

impl Options {
    /// Default options with a different site origin.
    #[must_use]
    pub fn with_base_url(base_url: &Url) -> Self {
        Self {
            base_url: base_url.clone(),
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.clone(),
            indent_unit: DEFAULT_INDENT_UNIT,
            require_vote_auth: true,
        }
    }
}
