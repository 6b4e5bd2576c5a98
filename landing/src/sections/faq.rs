use leptos::prelude::*;

use crate::components::{LayoutSection, RichTextView};
use crate::content::{FaqContent, FaqEntry};

#[component]
pub fn Faq(content: FaqContent) -> impl IntoView {
    let FaqContent { heading, entries } = content;

    view! {
        <LayoutSection class="faq rounded-t-[3rem] shadow-sm" background="#ffffff">
            <h2 class="text-2xl md:text-3xl font-bold text-center mb-12 title-red uppercase">
                <RichTextView text=heading />
            </h2>
            <div class="space-y-8 max-w-2xl mx-auto">
                {entries
                    .into_iter()
                    .map(|FaqEntry { question, answer }| {
                        view! {
                            <div>
                                <h3 class="text-base md:text-lg font-bold title-red mb-3 uppercase">{question}</h3>
                                <p class="text-xs md:text-sm text-gray-500 leading-relaxed">{answer}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </LayoutSection>
    }
}
