//! Inline stroke icons (24x24 viewBox, Heroicons outline paths).

use leptos::prelude::*;

/// Renders an inline stroked SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CHECK class="w-6 h-6 text-[#2d5a27]" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Stroke width
    #[prop(default = "3")]
    stroke_width: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            stroke="currentColor"
            viewBox="0 0 24 24"
            class=class
            aria-hidden="true"
        >
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width=stroke_width d=path></path>
        </svg>
    }
}

/// Check mark
pub const ICON_CHECK: &str = "M5 13l4 4L19 7";

/// Cross / X mark
pub const ICON_CROSS: &str = "M6 18L18 6M6 6l12 12";

/// Chevron pointing left
pub const ICON_CHEVRON_LEFT: &str = "M15 19l-7-7 7-7";

/// Chevron pointing right
pub const ICON_CHEVRON_RIGHT: &str = "M9 5l7 7-7 7";
