use leptos::prelude::*;

use crate::components::{ActionControl, Glyph, LayoutSection, ListItem, RichTextView};
use crate::composer::CallToAction;
use crate::content::TruthContent;

#[component]
pub fn Truth(content: TruthContent, cta: Option<CallToAction>) -> impl IntoView {
    let TruthContent {
        heading,
        intro,
        pitfalls,
        pointer,
        ..
    } = content;

    view! {
        <LayoutSection class="truth pt-28 md:pt-40 px-4">
            <div class="bg-red-50 border border-red-100 p-8 md:p-12 rounded-[2.5rem]">
                <h2 class="text-2xl md:text-3xl font-bold mb-6 title-red uppercase text-center">
                    <RichTextView text=heading />
                </h2>
                <p class="text-base md:text-lg mb-8 text-gray-700 font-normal leading-relaxed text-center">
                    {intro}
                </p>
                <div class="space-y-2 mb-10 max-w-lg mx-auto text-left">
                    {pitfalls
                        .into_iter()
                        .map(|text| view! { <ListItem text=text glyph=Glyph::Cross /> })
                        .collect_view()}
                </div>
                <div class="mb-10 max-w-lg mx-auto flex items-start justify-start gap-3">
                    <span class="text-xl shrink-0">"👉"</span>
                    <p class="text-sm md:text-base font-bold text-green-800 uppercase leading-relaxed text-left">
                        {pointer}
                    </p>
                </div>
                <div class="text-center flex justify-center">
                    {cta.map(|cta| view! { <ActionControl text=cta.text action=cta.action /> })}
                </div>
            </div>
        </LayoutSection>
    }
}
