use leptos::prelude::*;

use crate::components::{ActionControl, LayoutSection, RichTextView, StepCard};
use crate::composer::CallToAction;
use crate::content::AccessContent;

#[component]
pub fn Access(content: AccessContent, cta: Option<CallToAction>) -> impl IntoView {
    let AccessContent {
        heading,
        note,
        steps,
        ..
    } = content;

    view! {
        <LayoutSection class="access shadow-sm overflow-hidden" background="#ffffff">
            <h2 class="text-2xl md:text-3xl font-bold text-center mb-12 title-red uppercase leading-tight px-4">
                <RichTextView text=heading />
                <br />
                <span class="text-gray-400 font-normal text-lg md:text-xl mt-2 block lowercase italic">{note}</span>
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8 px-2">
                {steps.into_iter().map(|step| view! { <StepCard step=step /> }).collect_view()}
            </div>
            <div class="text-center mt-16 flex justify-center">
                {cta.map(|cta| view! { <ActionControl text=cta.text action=cta.action /> })}
            </div>
        </LayoutSection>
    }
}
