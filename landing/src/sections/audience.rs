use leptos::prelude::*;

use crate::components::{LayoutSection, ListItem, RichTextView};
use crate::content::AudienceContent;

/// "Who is this guide for" card, overlapping the next section.
#[component]
pub fn Audience(content: AudienceContent) -> impl IntoView {
    let AudienceContent { heading, items } = content;

    view! {
        <LayoutSection class="audience px-4 md:px-0 relative z-10 -mb-16">
            <div class="max-w-3xl mx-auto bg-white rounded-[2.5rem] md:rounded-[4rem] p-8 md:p-16 shadow-xl border border-white/50">
                <h2 class="text-xl md:text-3xl font-bold text-center mb-8 title-red uppercase leading-snug px-2">
                    <span class="inline-block mr-2 text-xl md:text-2xl align-middle">"🌟"</span>
                    <RichTextView text=heading />
                </h2>
                <div class="max-w-lg mx-auto">
                    {items.into_iter().map(|text| view! { <ListItem text=text /> }).collect_view()}
                </div>
            </div>
        </LayoutSection>
    }
}
