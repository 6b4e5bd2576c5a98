//! Testimonial carousel with overlaid arrows.

use leptos::html::Div;
use leptos::prelude::*;

use super::{ICON_CHEVRON_LEFT, ICON_CHEVRON_RIGHT, Icon};
use crate::carousel::{CarouselController, NavigationDirection};
use crate::content::CarouselItem;
use crate::dom::DomCarousel;

/// Horizontally scrollable, snap-aligned strip of images.
///
/// The viewport `NodeRef` is set when the strip mounts and cleared when it
/// unmounts; the arrows page it through a [`CarouselController`].
#[component]
pub fn Carousel(
    items: Vec<CarouselItem>,
    /// Base URL the item images live under
    #[prop(into)]
    image_host: String,
    /// Alt text shared by every slide
    #[prop(into)]
    slide_alt: String,
) -> impl IntoView {
    let viewport = NodeRef::<Div>::new();
    let controller = CarouselController::new(viewport);

    let slides = items
        .iter()
        .map(|item| {
            let src = item.image_url(&image_host);
            view! {
                <div class="carousel-slide min-w-[85%] md:min-w-[320px] snap-center">
                    <img
                        src=src
                        alt=slide_alt.clone()
                        class="rounded-2xl shadow-xl border-4 border-white w-full animate-hint"
                        loading="lazy"
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="relative group max-w-5xl mx-auto">
            <NavArrow direction=NavigationDirection::Left controller=controller />
            <div
                node_ref=viewport
                class="carousel-container flex overflow-x-auto gap-5 py-6 px-2 mb-8 snap-x snap-mandatory"
            >
                {slides}
            </div>
            <NavArrow direction=NavigationDirection::Right controller=controller />
        </div>
    }
}

/// Arrow button pinned to one edge of the carousel.
#[component]
pub fn NavArrow(direction: NavigationDirection, controller: DomCarousel) -> impl IntoView {
    let (edge, path) = match direction {
        NavigationDirection::Left => ("left-0 -ml-2 md:-ml-5", ICON_CHEVRON_LEFT),
        NavigationDirection::Right => ("right-0 -mr-2 md:-mr-5", ICON_CHEVRON_RIGHT),
    };

    view! {
        <button
            type="button"
            aria-label=direction.label()
            class=format!("arrow-btn absolute {edge} top-1/2 -translate-y-1/2 z-20 w-10 h-10 rounded-full shadow-lg flex items-center justify-center")
            on:click=move |_| controller.navigate(direction)
        >
            <Icon path=path stroke_width="2.5" class="w-6 h-6 text-stone-800" />
        </button>
    }
}
