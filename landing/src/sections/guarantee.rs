use leptos::prelude::*;

use crate::components::{ActionControl, LayoutSection, RichTextView};
use crate::composer::CallToAction;
use crate::content::GuaranteeContent;

/// Guarantee seal and the final checkout CTA.
#[component]
pub fn Guarantee(content: GuaranteeContent, cta: Option<CallToAction>) -> impl IntoView {
    let GuaranteeContent {
        heading,
        seal,
        lead,
        discount,
        note,
        ..
    } = content;

    view! {
        <LayoutSection class="guarantee text-center pt-20 pb-24">
            <p class="text-xl md:text-2xl font-bold text-center mb-10 title-red uppercase tracking-tighter">
                <RichTextView text=heading />
            </p>
            <img src=seal.src alt=seal.alt class="mx-auto mb-10 w-40 md:w-56" loading="lazy" />
            <div class="mb-10">
                <p class="text-lg font-bold mb-4 text-gray-600 uppercase">{lead}</p>
                <p class="text-5xl md:text-7xl font-black text-red-600 tracking-tighter uppercase">
                    <RichTextView text=discount />
                </p>
            </div>
            <p class="text-sm md:text-base text-gray-500 mb-12 italic max-w-2xl mx-auto leading-relaxed px-4">
                {note}
            </p>
            <div class="flex justify-center">
                {cta.map(|cta| view! { <ActionControl text=cta.text action=cta.action /> })}
            </div>
        </LayoutSection>
    }
}
