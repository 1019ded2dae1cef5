//! Listing categories and the pages that render them.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::url_utils;
use crate::Result;

/// A listing feed on the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListCategory {
    Top,
    New,
    Best,
    Ask,
    Show,
    ShowNew,
    Jobs,
}

impl ListCategory {
    pub const ALL: [Self; 7] = [
        Self::Top,
        Self::New,
        Self::Best,
        Self::Ask,
        Self::Show,
        Self::ShowNew,
        Self::Jobs,
    ];

    /// Page path relative to the site origin.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Top => "news",
            Self::New => "newest",
            Self::Best => "best",
            Self::Ask => "ask",
            Self::Show => "show",
            Self::ShowNew => "shownew",
            Self::Jobs => "jobs",
        }
    }

    /// Absolute URL of the listing page under `base`.
    pub fn url(self, base: &Url) -> Result<Url> {
        url_utils::resolve(self.path(), base)
    }
}

impl fmt::Display for ListCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
