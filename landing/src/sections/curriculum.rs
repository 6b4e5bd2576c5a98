use leptos::prelude::*;

use crate::components::{LayoutSection, ListItem, RichTextView};
use crate::content::CurriculumContent;

#[component]
pub fn Curriculum(content: CurriculumContent) -> impl IntoView {
    let CurriculumContent { heading, topics } = content;

    view! {
        <LayoutSection class="curriculum px-4 py-6 md:py-10">
            <div class="max-w-3xl mx-auto bg-stone-100/50 rounded-[3rem] p-8 md:p-12 border border-stone-200 shadow-inner">
                <h2 class="text-2xl md:text-4xl font-bold text-center mb-6 title-red uppercase leading-tight">
                    <RichTextView text=heading />
                </h2>
                <div class="grid grid-cols-1 max-w-2xl mx-auto">
                    {topics.into_iter().map(|text| view! { <ListItem text=text /> }).collect_view()}
                </div>
            </div>
        </LayoutSection>
    }
}
