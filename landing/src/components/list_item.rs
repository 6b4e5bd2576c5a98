use leptos::prelude::*;

use super::{ICON_CHECK, ICON_CROSS, Icon, RichTextView};
use crate::content::RichText;

/// Leading glyph of a list row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Glyph {
    #[default]
    Check,
    Cross,
    Bullet,
}

#[component]
pub fn ListItem(
    text: RichText,
    #[prop(optional)] glyph: Glyph,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let marker = match glyph {
        Glyph::Check => view! {
            <Icon path=ICON_CHECK class="w-6 h-6 text-[#2d5a27] mt-0.5 shrink-0 glyph-check" />
        }
        .into_any(),
        Glyph::Cross => view! {
            <Icon path=ICON_CROSS class="w-5 h-5 text-red-500 mt-0.5 shrink-0 glyph-cross" />
        }
        .into_any(),
        Glyph::Bullet => view! { <span class="text-gray-400 glyph-bullet">"•"</span> }.into_any(),
    };

    view! {
        <div class=format!("flex items-start gap-4 py-2 border-b border-stone-200/40 last:border-0 {class}")>
            {marker}
            <div class="text-base md:text-lg text-stone-800 leading-tight font-medium">
                <RichTextView text=text />
            </div>
        </div>
    }
}
