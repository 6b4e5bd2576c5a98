use leptos::prelude::*;

use crate::components::{LayoutSection, ListItem, RichTextView};
use crate::content::RationaleContent;

/// "Why is it so cheap?"
#[component]
pub fn Rationale(content: RationaleContent) -> impl IntoView {
    let RationaleContent {
        heading,
        opening,
        reasons,
        fairness,
        promise,
        sign_off,
    } = content;

    view! {
        <LayoutSection class="rationale pt-16 pb-8">
            <h2 class="text-2xl md:text-3xl font-bold text-center mb-8 title-red uppercase">
                <RichTextView text=heading />
            </h2>
            <div class="space-y-6 text-sm md:text-base text-gray-600 max-w-2xl mx-auto leading-relaxed">
                {opening.into_iter().map(|line| view! { <p>{line}</p> }).collect_view()}
                <div class="space-y-2">
                    {reasons.into_iter().map(|text| view! { <ListItem text=text /> }).collect_view()}
                </div>
                <p class="font-medium">{fairness}</p>
                <p class="font-bold text-gray-900 border-l-4 border-red-800 pl-4 py-1">{promise}</p>
                <p>{sign_off}</p>
            </div>
        </LayoutSection>
    }
}
