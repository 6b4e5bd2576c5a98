//! Browser-only checks of the web-sys seams.
//!
//! Run with `wasm-pack test --headless --firefox landing`.

#![cfg(target_arch = "wasm32")]

use incensos_landing::dom::{DomDocument, DomViewport};
use incensos_landing::{
    AnchorHost, AnchorId, CarouselController, NavigationDirection, Viewport, ViewportHandle,
    scroll_to_anchor,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// A 400px wide scroll strip holding five 400px slides.
fn mount_strip(id: &str) -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let strip = document.create_element("div").unwrap();
    strip.set_id(id);
    strip
        .set_attribute("style", "width: 400px; overflow-x: auto; display: flex;")
        .unwrap();
    for _ in 0..5 {
        let slide = document.create_element("div").unwrap();
        slide
            .set_attribute("style", "min-width: 400px; height: 10px;")
            .unwrap();
        strip.append_child(&slide).unwrap();
    }
    document.body().unwrap().append_child(&strip).unwrap();
    strip
}

#[wasm_bindgen_test]
fn viewport_reads_live_geometry() {
    let strip = mount_strip("geometry-strip");
    let viewport = DomViewport::new(strip.clone());

    assert_eq!(viewport.visible_width(), 400.0);
    assert_eq!(viewport.scroll_offset(), 0.0);
    strip.remove();
}

/// Handle that always resolves to the same mounted strip.
struct Mounted(Element);

impl ViewportHandle for Mounted {
    type Viewport = DomViewport;

    fn resolve(&self) -> Option<DomViewport> {
        Some(DomViewport::new(self.0.clone()))
    }
}

/// Let a smooth scroll run to completion.
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 1000)
            .unwrap();
    });
    wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
async fn left_page_from_partial_offset_stops_at_start() {
    let strip = mount_strip("clamp-start-strip");
    strip.set_scroll_left(200);
    let viewport = DomViewport::new(strip.clone());
    assert_eq!(viewport.scroll_offset(), 200.0);

    CarouselController::new(Mounted(strip.clone())).navigate(NavigationDirection::Left);
    settle().await;

    assert_eq!(viewport.scroll_offset(), 0.0);
    strip.remove();
}

#[wasm_bindgen_test]
async fn right_page_near_end_stops_at_max_scroll() {
    // Five 400px slides in a 400px strip: max scroll is 1600.
    let strip = mount_strip("clamp-end-strip");
    strip.set_scroll_left(1400);
    let viewport = DomViewport::new(strip.clone());
    assert_eq!(viewport.scroll_offset(), 1400.0);

    CarouselController::new(Mounted(strip.clone())).navigate(NavigationDirection::Right);
    settle().await;

    assert_eq!(viewport.scroll_offset(), 1600.0);
    strip.remove();
}

#[wasm_bindgen_test]
fn document_finds_mounted_anchor() {
    let strip = mount_strip("offer-section");
    let id = AnchorId::new("offer-section").unwrap();

    let found = DomDocument.find(&id).unwrap();
    assert!(found.dyn_ref::<HtmlElement>().is_some());
    assert!(scroll_to_anchor(&DomDocument, &id));
    strip.remove();
}

#[wasm_bindgen_test]
fn missing_anchor_is_silent() {
    let id = AnchorId::new("no-such-section").unwrap();
    assert!(DomDocument.find(&id).is_none());
    assert!(!scroll_to_anchor(&DomDocument, &id));
}
