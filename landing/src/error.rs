//! Content loading errors.

use thiserror::Error;

/// Why a content document was rejected.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse content document: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid anchor id {0:?}: must be non-empty and contain no whitespace")]
    InvalidAnchor(String),

    #[error("{field} is not a valid absolute URL ({url}): {source}")]
    InvalidUrl {
        field: &'static str,
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{field} must use http or https, got {scheme:?}")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("testimonial carousel has no items")]
    EmptyCarousel,

    #[error("carousel item #{index} needs a non-empty id and name")]
    InvalidCarouselItem { index: usize },
}
