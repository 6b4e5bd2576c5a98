use leptos::prelude::*;

use crate::components::{BonusCard, LayoutSection, RichTextView};
use crate::content::BonusesContent;

#[component]
pub fn Bonuses(content: BonusesContent) -> impl IntoView {
    let BonusesContent { heading, bonuses } = content;

    view! {
        <LayoutSection class="bonuses" background="#ffffff">
            <h2 class="text-2xl md:text-3xl font-extrabold text-center mb-16 px-4 title-red uppercase leading-tight">
                <RichTextView text=heading />
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {bonuses
                    .into_iter()
                    .enumerate()
                    .map(|(index, bonus)| view! { <BonusCard bonus=bonus number={index + 1} /> })
                    .collect_view()}
            </div>
        </LayoutSection>
    }
}
