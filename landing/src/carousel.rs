//! Carousel paging.
//!
//! The controller pages a horizontally scrollable viewport by exactly one
//! visible width per press. Item boundaries are not tracked here; CSS
//! scroll-snap aligns the result.
//!
//! ```text
//!   offset o, width w
//!   Left  -> scroll_to(o - w)
//!   Right -> scroll_to(o + w)
//! ```
//!
//! The viewport is measured on every call (the visible width follows the
//! window size) and the request is handed off without waiting for the
//! animation. A second press mid-animation simply retargets it.

use tracing::{debug, trace};

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    /// Back one page.
    Left,
    /// Forward one page.
    Right,
}

impl NavigationDirection {
    /// Target offset one page away from `offset`. Not clamped.
    pub fn page_from(self, offset: f64, visible_width: f64) -> f64 {
        match self {
            Self::Left => offset - visible_width,
            Self::Right => offset + visible_width,
        }
    }

    /// Accessible label for the arrow button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Anterior",
            Self::Right => "Próximo",
        }
    }
}

/// A live, horizontally scrollable element.
///
/// Implementors clamp scroll requests into `[0, max_scroll]` the way a
/// browser scroll container does; an out-of-range request is never an error.
pub trait Viewport {
    /// Current horizontal scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Currently rendered visible width.
    fn visible_width(&self) -> f64;

    /// Issue a smooth scroll towards `offset`. Fire-and-forget.
    fn scroll_to(&self, offset: f64);
}

/// Nullable handle to the mounted viewport. Resolves to `None` before mount
/// and after unmount.
pub trait ViewportHandle {
    /// Viewport type the handle resolves to.
    type Viewport: Viewport;

    /// The viewport, if one is mounted right now.
    fn resolve(&self) -> Option<Self::Viewport>;
}

/// Pages a carousel viewport. Owns the only handle to it.
#[derive(Debug, Clone, Copy)]
pub struct CarouselController<H> {
    handle: H,
}

impl<H: ViewportHandle> CarouselController<H> {
    /// Take ownership of the viewport handle.
    pub fn new(handle: H) -> Self {
        Self { handle }
    }

    /// Page one viewport width in `direction`. No-op when nothing is mounted.
    pub fn navigate(&self, direction: NavigationDirection) {
        let Some(viewport) = self.handle.resolve() else {
            trace!(?direction, "carousel viewport not mounted, ignoring");
            return;
        };

        let from = viewport.scroll_offset();
        let width = viewport.visible_width();
        let target = direction.page_from(from, width);
        debug!(?direction, from, width, target, "paging carousel");
        viewport.scroll_to(target);
    }
}
