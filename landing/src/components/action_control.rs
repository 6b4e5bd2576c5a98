//! The CTA button/link.

use leptos::prelude::*;

use crate::action::ActionTarget;

const CTA_CLASSES: &str = "w-full md:w-auto px-6 md:px-8 py-4 text-sm md:text-base font-bold text-white rounded-xl btn-cta animate-cta uppercase tracking-wider md:tracking-widest whitespace-normal shadow-lg flex items-center justify-center text-center leading-tight transition-all duration-300 no-underline cursor-pointer";

/// A call-to-action.
///
/// External links render as `<a target="_blank" rel="noopener noreferrer">`
/// and are navigated by the browser; callbacks render as `<button>` and run
/// on click.
#[component]
pub fn ActionControl(
    /// Label
    #[prop(into)]
    text: String,
    /// What a press does
    action: ActionTarget,
    /// Extra classes appended to the base styling
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let class = format!("{CTA_CLASSES} {class}");

    match action.href().map(str::to_owned) {
        Some(href) => view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class=class
                on:click=move |_| {
                    let _ = action.activate();
                }
            >
                {text}
            </a>
        }
        .into_any(),
        None => view! {
            <button
                type="button"
                class=class
                on:click=move |_| {
                    let _ = action.activate();
                }
            >
                {text}
            </button>
        }
        .into_any(),
    }
}
