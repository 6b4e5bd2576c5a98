//! Browser implementations of the scrolling seams.
//!
//! Everything here is resolved at call time: the carousel's `NodeRef` is
//! empty until the `<div>` mounts, and the document is looked up on every
//! anchor scroll.

use leptos::html::Div;
use leptos::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::anchor::{AnchorHost, AnchorId, ScrollIntoView};
use crate::carousel::{CarouselController, Viewport, ViewportHandle};

/// Carousel controller bound to a mounted `<div>`.
pub type DomCarousel = CarouselController<NodeRef<Div>>;

/// A scroll container in the live DOM. The browser clamps `scrollTo`.
#[derive(Debug, Clone)]
pub struct DomViewport(Element);

impl DomViewport {
    /// Wrap a mounted scroll container.
    pub fn new(element: Element) -> Self {
        Self(element)
    }
}

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        f64::from(self.0.scroll_left())
    }

    fn visible_width(&self) -> f64 {
        f64::from(self.0.client_width())
    }

    fn scroll_to(&self, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_left(offset);
        options.set_behavior(ScrollBehavior::Smooth);
        self.0.scroll_to_with_scroll_to_options(&options);
    }
}

impl ViewportHandle for NodeRef<Div> {
    type Viewport = DomViewport;

    fn resolve(&self) -> Option<DomViewport> {
        self.get_untracked().map(|div| DomViewport(div.into()))
    }
}

impl ScrollIntoView for Element {
    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// The current `window.document`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomDocument;

impl AnchorHost for DomDocument {
    type Target = Element;

    fn find(&self, id: &AnchorId) -> Option<Element> {
        web_sys::window()?.document()?.get_element_by_id(id.as_str())
    }
}
