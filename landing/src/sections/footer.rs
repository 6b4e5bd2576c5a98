use leptos::prelude::*;

use crate::content::{FooterContent, FooterLink};
use crate::footer::copyright_line;

#[component]
pub fn Footer(content: FooterContent, year: i32) -> impl IntoView {
    let FooterContent {
        links,
        holder,
        rights,
    } = content;

    view! {
        <footer class="footer py-12 bg-stone-100 text-center text-stone-400 border-t border-stone-200">
            <div class="flex flex-wrap justify-center gap-6 mb-4 font-bold uppercase text-[10px] tracking-[0.2em]">
                {links
                    .into_iter()
                    .map(|FooterLink { label, href }| {
                        view! { <a href=href class="hover:text-red-800 transition-colors">{label}</a> }
                    })
                    .collect_view()}
            </div>
            <p class="footer-copyright text-[10px] opacity-60">{copyright_line(year, &holder, &rights)}</p>
        </footer>
    }
}
