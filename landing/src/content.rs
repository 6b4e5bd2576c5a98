//! Typed content records, one per page section.
//!
//! These are plain configuration: immutable, `Clone`, deserialized from the
//! TOML document in `content/page.toml`. Components render them as-is.
//!
//! Inline emphasis is written as an array mixing plain strings and
//! single-key inline tables:
//!
//! ```toml
//! headline = ["Aprenda do ", { mark = "ZERO" }, " a fazer incensos"]
//! ```

use serde::Deserialize;

/// One run of inline text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Run {
    /// Unstyled text.
    Plain(String),
    /// Emphasized text.
    Styled(Styled),
}

/// Emphasis applied to a run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Styled {
    /// Bold weight.
    Bold(String),
    /// Highlighter background.
    Highlight(String),
    /// Highlighter background and bold weight.
    Mark(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RichTextRepr {
    Plain(String),
    Runs(Vec<Run>),
}

/// Text with inline emphasis. Accepts a bare string or an array of runs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RichTextRepr")]
pub struct RichText(Vec<Run>);

impl From<RichTextRepr> for RichText {
    fn from(repr: RichTextRepr) -> Self {
        match repr {
            RichTextRepr::Plain(text) => Self(vec![Run::Plain(text)]),
            RichTextRepr::Runs(runs) => Self(runs),
        }
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self(vec![Run::Plain(text.to_string())])
    }
}

impl RichText {
    /// A single bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self(vec![Run::Styled(Styled::Bold(text.into()))])
    }

    /// Runs in display order.
    pub fn runs(&self) -> &[Run] {
        &self.0
    }

    /// The text with all emphasis dropped.
    pub fn plain(&self) -> String {
        self.0
            .iter()
            .map(|run| match run {
                Run::Plain(text)
                | Run::Styled(Styled::Bold(text))
                | Run::Styled(Styled::Highlight(text))
                | Run::Styled(Styled::Mark(text)) => text.as_str(),
            })
            .collect()
    }
}

/// Image locator plus alt text.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Where a CTA leads, symbolically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaTarget {
    /// Smooth-scroll to the offer anchor.
    Offer,
    /// Open the checkout URL in a new browsing context.
    Checkout,
}

/// A call-to-action as written in the document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CtaConfig {
    pub text: String,
    pub target: CtaTarget,
}

/// Strike-through price box.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PriceConfig {
    pub original: String,
    pub lead: String,
    pub current: String,
    pub note: String,
}

/// Testimonial slide. `id` and `name` locate the image on the image host.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CarouselItem {
    pub id: String,
    pub name: String,
}

impl CarouselItem {
    /// `{host}/{id}/{name}.webp`
    pub fn image_url(&self, host: &str) -> String {
        format!("{}/{}/{}.webp", host.trim_end_matches('/'), self.id, self.name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Recipe {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Step {
    pub image: Image,
    pub caption: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Bonus {
    pub image: Image,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HeroContent {
    pub headline: RichText,
    pub subheadline: String,
    pub cover: Image,
    pub price: PriceConfig,
    pub cta: CtaConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AudienceContent {
    pub heading: RichText,
    pub items: Vec<RichText>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TruthContent {
    pub heading: RichText,
    pub intro: String,
    pub pitfalls: Vec<RichText>,
    pub pointer: String,
    pub cta: CtaConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdvantagesContent {
    pub image: Image,
    pub heading: RichText,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RecipesContent {
    pub intro: RichText,
    pub recipes: Vec<Recipe>,
    pub outro: String,
    pub cta: CtaConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TestimonialsContent {
    pub heading: RichText,
    pub slide_alt: String,
    pub items: Vec<CarouselItem>,
    pub disclaimer: String,
    pub cta: CtaConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccessContent {
    pub heading: RichText,
    pub note: String,
    pub steps: Vec<Step>,
    pub cta: CtaConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CurriculumContent {
    pub heading: RichText,
    pub topics: Vec<RichText>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BonusesContent {
    pub heading: RichText,
    pub bonuses: Vec<Bonus>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OfferContent {
    pub pitch: RichText,
    pub price_label: String,
    pub currency: String,
    pub amount: String,
    pub mockup: Image,
    pub includes: Vec<String>,
    pub closing: String,
    pub cta: CtaConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RationaleContent {
    pub heading: RichText,
    pub opening: Vec<String>,
    pub reasons: Vec<RichText>,
    pub fairness: String,
    pub promise: String,
    pub sign_off: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FaqContent {
    pub heading: RichText,
    pub entries: Vec<FaqEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GuaranteeContent {
    pub heading: RichText,
    pub seal: Image,
    pub lead: String,
    pub discount: RichText,
    pub note: String,
    pub cta: CtaConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FooterContent {
    pub links: Vec<FooterLink>,
    pub holder: String,
    pub rights: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Deserialize)]
    struct Probe {
        text: RichText,
    }

    #[test]
    fn rich_text_accepts_bare_string() {
        let probe: Probe = toml::from_str(r#"text = "Acesso Vitalício""#).unwrap();
        assert_eq!(probe.text, RichText::from("Acesso Vitalício"));
    }

    #[test]
    fn rich_text_accepts_mixed_runs() {
        let probe: Probe = toml::from_str(
            r#"text = ["Para quem ", { bold = "nunca fez" }, " e quer ", { mark = "começar" }]"#,
        )
        .unwrap();

        assert_eq!(
            probe.text.runs(),
            &[
                Run::Plain("Para quem ".into()),
                Run::Styled(Styled::Bold("nunca fez".into())),
                Run::Plain(" e quer ".into()),
                Run::Styled(Styled::Mark("começar".into())),
            ]
        );
        assert_eq!(probe.text.plain(), "Para quem nunca fez e quer começar");
    }

    #[test]
    fn carousel_item_maps_to_image_url() {
        let item = CarouselItem {
            id: "tTytHwBv".into(),
            name: "Depo-1".into(),
        };
        assert_eq!(
            item.image_url("https://i.ibb.co/"),
            "https://i.ibb.co/tTytHwBv/Depo-1.webp"
        );
        assert_eq!(
            item.image_url("https://i.ibb.co"),
            "https://i.ibb.co/tTytHwBv/Depo-1.webp"
        );
    }

    #[test]
    fn cta_target_is_lowercase() {
        let cta: CtaConfig = toml::from_str("text = \"Quero\"\ntarget = \"checkout\"").unwrap();
        assert_eq!(cta.target, CtaTarget::Checkout);
    }
}
