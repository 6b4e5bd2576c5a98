//! Padded, width-constrained section wrapper.

use leptos::prelude::*;

use crate::anchor::AnchorId;

/// Section shell. With `anchor`, the `<section>` carries that id and is the
/// scroll target for it.
#[component]
pub fn LayoutSection(
    children: Children,
    #[prop(optional, into)] class: String,
    /// CSS background color
    #[prop(optional, into)]
    background: Option<String>,
    #[prop(optional)] anchor: Option<AnchorId>,
) -> impl IntoView {
    let style = background.map(|color| format!("background-color: {color}"));
    let id = anchor.map(|anchor| anchor.to_string());

    view! {
        <section id=id class=format!("py-10 md:py-20 px-5 {class}") style=style>
            <div class="max-w-5xl mx-auto">{children()}</div>
        </section>
    }
}
