use leptos::prelude::*;

use crate::components::{ActionControl, Carousel, LayoutSection, RichTextView};
use crate::composer::CallToAction;
use crate::content::TestimonialsContent;

/// Social proof: the paginated testimonial carousel.
#[component]
pub fn Testimonials(
    content: TestimonialsContent,
    cta: Option<CallToAction>,
    #[prop(into)] image_host: String,
) -> impl IntoView {
    let TestimonialsContent {
        heading,
        slide_alt,
        items,
        disclaimer,
        ..
    } = content;

    view! {
        <LayoutSection class="testimonials text-center">
            <h2 class="text-xl md:text-2xl font-bold mb-10 px-4 leading-tight title-red uppercase">
                <RichTextView text=heading />
            </h2>

            <Carousel items=items image_host=image_host slide_alt=slide_alt />

            <div class="max-w-xl mx-auto mb-10">
                <p class="text-xs md:text-sm text-gray-500 leading-relaxed font-normal">{disclaimer}</p>
            </div>
            <div class="flex justify-center">
                {cta.map(|cta| view! { <ActionControl text=cta.text action=cta.action /> })}
            </div>
        </LayoutSection>
    }
}
