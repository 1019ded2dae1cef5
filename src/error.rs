//! Error types for rs-hackernews.
//!
//! Every extraction failure is terminal for the page being extracted.
//! Variants name the selector, attribute, or raw value that caused it.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required node is absent from the page.
    #[error("missing element: {selector}")]
    MissingElement {
        /// Selector that matched nothing.
        selector: String,
    },

    /// A required attribute is absent from a node that was found.
    #[error("missing attribute `{attribute}` on {selector}")]
    MissingAttribute {
        /// Selector of the node that lacks the attribute.
        selector: String,
        /// Attribute name.
        attribute: String,
    },

    /// A field is present but is not a valid integer.
    #[error("malformed number: {value:?}")]
    MalformedNumber {
        /// Raw text that failed to parse.
        value: String,
    },

    /// A field is present but is not a valid URL.
    #[error("malformed URL {value:?}: {source}")]
    MalformedUrl {
        /// Raw href that failed to parse.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The document shape violates an assumed invariant.
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),
}

impl Error {
    pub(crate) fn missing_element(selector: &str) -> Self {
        Self::MissingElement {
            selector: selector.to_string(),
        }
    }

    pub(crate) fn missing_attribute(selector: &str, attribute: &str) -> Self {
        Self::MissingAttribute {
            selector: selector.to_string(),
            attribute: attribute.to_string(),
        }
    }

    pub(crate) fn malformed_number(value: &str) -> Self {
        Self::MalformedNumber {
            value: value.to_string(),
        }
    }

    pub(crate) fn malformed_url(value: &str, source: url::ParseError) -> Self {
        Self::MalformedUrl {
            value: value.to_string(),
            source,
        }
    }

    pub(crate) fn mismatch(message: impl Into<String>) -> Self {
        Self::StructuralMismatch(message.into())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
