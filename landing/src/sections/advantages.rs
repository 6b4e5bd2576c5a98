use leptos::prelude::*;

use crate::components::{LayoutSection, RichTextView};
use crate::content::AdvantagesContent;

#[component]
pub fn Advantages(content: AdvantagesContent) -> impl IntoView {
    let AdvantagesContent {
        image,
        heading,
        body,
    } = content;

    view! {
        <LayoutSection class="advantages text-center">
            <img
                src=image.src
                alt=image.alt
                class="rounded-3xl shadow-lg mb-10 w-full max-w-xl mx-auto"
                loading="lazy"
            />
            <h2 class="text-2xl md:text-3xl font-bold mb-6 title-red uppercase">
                <RichTextView text=heading />
            </h2>
            <p class="text-sm md:text-base text-gray-600 leading-relaxed font-normal max-w-2xl mx-auto">
                {body}
            </p>
        </LayoutSection>
    }
}
