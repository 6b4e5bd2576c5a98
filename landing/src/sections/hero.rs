use leptos::prelude::*;

use crate::components::{ActionControl, LayoutSection, PriceCard, RichTextView};
use crate::composer::CallToAction;
use crate::content::HeroContent;

#[component]
pub fn Hero(content: HeroContent, cta: Option<CallToAction>) -> impl IntoView {
    let HeroContent {
        headline,
        subheadline,
        cover,
        price,
        ..
    } = content;

    view! {
        <LayoutSection class="hero text-center pt-4 md:pt-10 pb-6 md:pb-12">
            <h1 class="text-xl md:text-4xl lg:text-5xl font-extrabold leading-tight mb-4 title-main uppercase px-2">
                <RichTextView text=headline />
            </h1>
            <p class="text-sm md:text-base text-gray-500 mb-4 font-normal max-w-xl mx-auto leading-relaxed px-4">
                {subheadline}
            </p>
            <div class="mb-6 relative inline-block px-2">
                <img
                    src=cover.src
                    alt=cover.alt
                    class="rounded-[2rem] shadow-2xl mx-auto w-full max-w-[360px] md:max-w-[560px]"
                    loading="lazy"
                />
            </div>

            <PriceCard price=price />

            <div class="mt-4 flex justify-center">
                {cta.map(|cta| view! { <ActionControl text=cta.text action=cta.action /> })}
            </div>
        </LayoutSection>
    }
}
