use leptos::prelude::*;

use crate::anchor::AnchorId;
use crate::components::{ActionControl, LayoutSection, ListItem, RichTextView};
use crate::composer::CallToAction;
use crate::content::{OfferContent, RichText};

/// The offer box. Carries the page's only anchor.
#[component]
pub fn Offer(content: OfferContent, cta: Option<CallToAction>, anchor: AnchorId) -> impl IntoView {
    let OfferContent {
        pitch,
        price_label,
        currency,
        amount,
        mockup,
        includes,
        closing,
        ..
    } = content;

    view! {
        <LayoutSection class="offer text-center" anchor=anchor>
            <div class="bg-white p-10 md:p-16 rounded-[3rem] shadow-2xl border-2 border-stone-100 relative max-w-2xl mx-auto">
                <p class="text-lg md:text-xl font-bold text-gray-700 mb-8 px-4 title-red uppercase">
                    <RichTextView text=pitch />
                </p>
                <div class="mb-8">
                    <span class="text-gray-400 font-bold uppercase tracking-widest block text-xs mb-2">
                        {price_label}
                    </span>
                    <div class="flex items-center justify-center gap-1">
                        <span class="text-3xl font-bold text-[#2d5a27]">{currency}</span>
                        <span class="text-7xl md:text-8xl font-black text-[#2d5a27]">{amount}</span>
                    </div>
                </div>
                <div class="mb-10">
                    <img src=mockup.src alt=mockup.alt class="mx-auto w-full max-w-[320px]" loading="lazy" />
                </div>
                <div class="max-w-xs mx-auto space-y-1 text-left mb-10">
                    {includes
                        .into_iter()
                        .map(|item| view! { <ListItem text=RichText::bold(item) class="py-2.5" /> })
                        .collect_view()}
                </div>
                <p class="text-base md:text-lg font-bold mb-8 title-main uppercase leading-tight">{closing}</p>
                <div class="flex justify-center">
                    {cta.map(|cta| view! { <ActionControl text=cta.text action=cta.action class="md:px-12" /> })}
                </div>
            </div>
        </LayoutSection>
    }
}
