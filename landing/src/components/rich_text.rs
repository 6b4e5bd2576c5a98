use leptos::prelude::*;

use crate::content::{RichText, Run, Styled};

/// Inline runs with their emphasis.
#[component]
pub fn RichTextView(text: RichText) -> impl IntoView {
    text.runs()
        .iter()
        .cloned()
        .map(|run| match run {
            Run::Plain(text) => text.into_any(),
            Run::Styled(Styled::Bold(text)) => view! { <span class="font-bold">{text}</span> }.into_any(),
            Run::Styled(Styled::Highlight(text)) => {
                view! { <span class="highlight">{text}</span> }.into_any()
            }
            Run::Styled(Styled::Mark(text)) => {
                view! { <span class="highlight font-bold">{text}</span> }.into_any()
            }
        })
        .collect_view()
}
