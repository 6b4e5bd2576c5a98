//! The whole page.

use chrono::{DateTime, Local};
use leptos::prelude::*;
use tracing::debug;

use super::{
    Access, Advantages, Audience, Bonuses, Curriculum, Faq, Footer, Guarantee, Hero, Offer,
    Rationale, Recipes, Testimonials, Truth,
};
use crate::composer::{PageComposer, SECTION_ORDER, SectionKind};
use crate::footer::copyright_year;

/// Every section in [`SECTION_ORDER`], footer last.
///
/// `now` is only read for the copyright year.
#[component]
pub fn LandingPage(composer: PageComposer, now: DateTime<Local>) -> impl IntoView {
    let year = copyright_year(&now);
    debug!(sections = SECTION_ORDER.len(), "composing landing page");

    let sections = SECTION_ORDER
        .iter()
        .map(|kind| render_section(&composer, *kind, year))
        .collect_view();

    view! { <main class="antialiased overflow-x-hidden">{sections}</main> }
}

/// One section, with the CTA the composer resolved for it.
fn render_section(composer: &PageComposer, kind: SectionKind, year: i32) -> AnyView {
    let config = composer.config();
    let cta = composer.cta(kind);

    match kind {
        SectionKind::Hero => view! { <Hero content=config.hero.clone() cta=cta /> }.into_any(),
        SectionKind::Audience => view! { <Audience content=config.audience.clone() /> }.into_any(),
        SectionKind::Truth => view! { <Truth content=config.truth.clone() cta=cta /> }.into_any(),
        SectionKind::Advantages => {
            view! { <Advantages content=config.advantages.clone() /> }.into_any()
        }
        SectionKind::Recipes => {
            view! { <Recipes content=config.recipes.clone() cta=cta /> }.into_any()
        }
        SectionKind::Testimonials => view! {
            <Testimonials
                content=config.testimonials.clone()
                cta=cta
                image_host=config.image_host.clone()
            />
        }
        .into_any(),
        SectionKind::Access => view! { <Access content=config.access.clone() cta=cta /> }.into_any(),
        SectionKind::Curriculum => {
            view! { <Curriculum content=config.curriculum.clone() /> }.into_any()
        }
        SectionKind::Bonuses => view! { <Bonuses content=config.bonuses.clone() /> }.into_any(),
        SectionKind::Offer => view! {
            <Offer
                content=config.offer.clone()
                cta=cta
                anchor=config.offer_anchor.clone()
            />
        }
        .into_any(),
        SectionKind::Rationale => view! { <Rationale content=config.rationale.clone() /> }.into_any(),
        SectionKind::Faq => view! { <Faq content=config.faq.clone() /> }.into_any(),
        SectionKind::Guarantee => {
            view! { <Guarantee content=config.guarantee.clone() cta=cta /> }.into_any()
        }
        SectionKind::Footer => view! { <Footer content=config.footer.clone() year=year /> }.into_any(),
    }
}
