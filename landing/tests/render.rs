//! Static rendering of components and the full page via `RenderHtml`.
//!
//! Nothing here clicks or mounts; the browser is never touched.

use chrono::{Local, TimeZone};
use incensos_landing::components::{ActionControl, Carousel, Glyph, LayoutSection, ListItem};
use incensos_landing::content::{CarouselItem, RichText};
use incensos_landing::sections::LandingPage;
use incensos_landing::{
    ActionTarget, AnchorHost, AnchorId, PageComposer, PageConfig, ScrollIntoView,
};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// A document with no elements at all.
#[derive(Clone, Copy)]
struct EmptyDocument;

struct Nowhere;

impl ScrollIntoView for Nowhere {
    fn scroll_into_view_smooth(&self) {}
}

impl AnchorHost for EmptyDocument {
    type Target = Nowhere;

    fn find(&self, _id: &AnchorId) -> Option<Nowhere> {
        None
    }
}

fn composer() -> PageComposer {
    PageComposer::new(PageConfig::embedded().unwrap(), EmptyDocument)
}

fn render_page() -> String {
    let composer = composer();
    let now = Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
    view! { <LandingPage composer=composer now=now /> }.to_html()
}

#[test]
fn external_link_opens_in_new_context() {
    let action = ActionTarget::link("https://go.frendz.com.br/talug");
    let html = view! { <ActionControl text="QUERO" action=action /> }.to_html();

    assert!(html.starts_with("<a"));
    assert!(html.contains(r#"href="https://go.frendz.com.br/talug""#));
    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noopener noreferrer""#));
    assert!(!html.contains("<button"));
}

#[test]
fn callback_renders_as_button() {
    let action = ActionTarget::callback(|| {});
    let html = view! { <ActionControl text="QUERO" action=action /> }.to_html();

    assert!(html.starts_with("<button"));
    assert!(html.contains(r#"type="button""#));
    assert!(!html.contains("href="));
    assert!(!html.contains("target="));
}

#[test]
fn layout_section_carries_anchor_only_when_given() {
    let anchor = AnchorId::new("offer-section").unwrap();
    let anchored = view! { <LayoutSection anchor=anchor>"x"</LayoutSection> }.to_html();
    let plain = view! { <LayoutSection background="#ffffff">"x"</LayoutSection> }.to_html();

    assert!(anchored.contains(r#"id="offer-section""#));
    assert!(!plain.contains("id="));
    assert!(plain.contains("background-color: #ffffff"));
}

#[test]
fn list_item_glyphs() {
    let check = view! { <ListItem text=RichText::from("a") /> }.to_html();
    let cross = view! { <ListItem text=RichText::from("b") glyph=Glyph::Cross /> }.to_html();
    let bullet = view! { <ListItem text=RichText::from("c") glyph=Glyph::Bullet /> }.to_html();

    assert!(check.contains("glyph-check"));
    assert!(cross.contains("glyph-cross"));
    assert!(bullet.contains("glyph-bullet"));
    assert!(!bullet.contains("<svg"));
}

#[test]
fn carousel_renders_slides_in_order_between_two_arrows() {
    let items = vec![
        CarouselItem {
            id: "tTytHwBv".into(),
            name: "Depo-1".into(),
        },
        CarouselItem {
            id: "sJNdQYLh".into(),
            name: "Depo-3".into(),
        },
    ];
    let html = view! {
        <Carousel items=items image_host="https://i.ibb.co/" slide_alt="Depoimento de aluno" />
    }
    .to_html();

    assert_eq!(html.matches("carousel-slide").count(), 2);
    let first = html.find("https://i.ibb.co/tTytHwBv/Depo-1.webp").unwrap();
    let second = html.find("https://i.ibb.co/sJNdQYLh/Depo-3.webp").unwrap();
    assert!(first < second);

    let left = html.find(r#"aria-label="Anterior""#).unwrap();
    let right = html.find(r#"aria-label="Próximo""#).unwrap();
    assert!(left < first);
    assert!(second < right);
}

#[test]
fn page_sections_render_in_fixed_order() {
    let html = render_page();
    // Some class lists end right after the section marker.
    let markers = [
        "px-5 hero",
        "px-5 audience",
        "px-5 truth",
        "px-5 advantages",
        "px-5 recipes",
        "px-5 testimonials",
        "px-5 access",
        "px-5 curriculum",
        "px-5 bonuses",
        "px-5 offer",
        "px-5 rationale",
        "px-5 faq",
        "px-5 guarantee",
        "class=\"footer ",
    ];

    let positions: Vec<usize> = markers
        .iter()
        .map(|marker| {
            html.find(marker)
                .unwrap_or_else(|| panic!("missing section {marker:?}"))
        })
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    for marker in markers {
        assert_eq!(html.matches(marker).count(), 1, "{marker:?}");
    }
}

#[test]
fn page_has_one_offer_anchor() {
    let html = render_page();
    assert_eq!(html.matches(r#"id="offer-section""#).count(), 1);
}

#[test]
fn page_wires_ctas() {
    let html = render_page();

    // Offer and guarantee link out; five offer buttons plus two carousel arrows.
    assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
    assert_eq!(
        html.matches(r#"href="https://go.frendz.com.br/talug""#).count(),
        2
    );
    assert_eq!(html.matches("<button").count(), 7);
    assert_eq!(html.matches("carousel-slide").count(), 6);
}

#[test]
fn rendered_ctas_follow_the_composer() {
    let resolved = composer().call_to_actions();
    let html = render_page();

    assert_eq!(html.matches("btn-cta").count(), resolved.len());

    let mut cursor = 0;
    for (kind, cta) in &resolved {
        let at = html[cursor..]
            .find(cta.text.as_str())
            .unwrap_or_else(|| panic!("{kind:?} cta {:?} not rendered in order", cta.text));
        cursor += at + cta.text.len();
    }

    let links = resolved
        .iter()
        .filter(|(_, cta)| cta.action.href().is_some())
        .count();
    assert_eq!(html.matches(r#"target="_blank""#).count(), links);
}

#[test]
fn footer_shows_year_of_supplied_time() {
    let html = render_page();
    assert!(html.contains("© 2025 A ARTE DOS INCENSOS ARTESANAIS. TODOS OS DIREITOS RESERVADOS."));
}
