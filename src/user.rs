//! User profiles.
//!
//! Profiles come from the site's read-only JSON API, not from scraped
//! pages. Extracted entities refer to users by name only; joining the two
//! is left to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A site user as returned by the read API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "id")]
    pub name: String,

    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,

    /// Free-form "about" text, absent when the user never set one.
    #[serde(rename = "about", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub karma: i64,
}

impl User {
    /// Decode a user payload. Unknown fields such as `submitted` are ignored.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
