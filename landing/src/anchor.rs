//! In-page anchors and scroll-into-view.

use std::fmt;

use serde::Deserialize;

use crate::action::ActionCallback;
use crate::error::ContentError;

/// Identifier of the one element an in-page CTA scrolls to.
///
/// Matches by exact string equality, so it must be a valid HTML id:
/// non-empty, no whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct AnchorId(String);

impl AnchorId {
    /// Validate and wrap an identifier.
    pub fn new(id: impl Into<String>) -> Result<Self, ContentError> {
        let id = id.into();
        if id.is_empty() || id.chars().any(char::is_whitespace) {
            return Err(ContentError::InvalidAnchor(id));
        }
        Ok(Self(id))
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AnchorId {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Something that can be brought into the visible viewport.
pub trait ScrollIntoView {
    /// Start an animated scroll that reveals this element. Fire-and-forget.
    fn scroll_into_view_smooth(&self);
}

/// The document, as far as anchor lookup is concerned.
pub trait AnchorHost {
    /// Element type found by id.
    type Target: ScrollIntoView;

    /// Look up the element carrying `id`, if any.
    fn find(&self, id: &AnchorId) -> Option<Self::Target>;
}

/// Scroll the element with `id` into view.
///
/// Returns whether a scroll was issued. A missing element is not an error
/// and is not reported.
pub fn scroll_to_anchor<H: AnchorHost + ?Sized>(host: &H, id: &AnchorId) -> bool {
    match host.find(id) {
        Some(target) => {
            target.scroll_into_view_smooth();
            true
        }
        None => false,
    }
}

impl ActionCallback {
    /// Shared "scroll to `id`" action. The host is queried at activation
    /// time, never at construction.
    pub fn scroll_to<H>(host: H, id: AnchorId) -> Self
    where
        H: AnchorHost + Send + Sync + 'static,
    {
        Self::new(move || {
            scroll_to_anchor(&host, &id);
        })
    }
}
