//! Page configuration.
//!
//! The whole page is driven by one TOML document. The bundled copy lives in
//! `content/page.toml` and is compiled into the binary.

use serde::Deserialize;
use url::Url;

use crate::anchor::AnchorId;
use crate::content::{
    AccessContent, AdvantagesContent, AudienceContent, BonusesContent, CurriculumContent,
    FaqContent, FooterContent, GuaranteeContent, HeroContent, OfferContent, RationaleContent,
    RecipesContent, TestimonialsContent, TruthContent,
};
use crate::error::ContentError;

/// The bundled content document.
pub const EMBEDDED_CONTENT: &str = include_str!("../content/page.toml");

/// Root configuration structure
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PageConfig {
    /// Checkout destination, opened in a new browsing context.
    pub checkout_url: String,
    /// Id of the offer section; the target of every in-page CTA.
    pub offer_anchor: AnchorId,
    /// Base URL testimonial images are served from.
    pub image_host: String,
    pub hero: HeroContent,
    pub audience: AudienceContent,
    pub truth: TruthContent,
    pub advantages: AdvantagesContent,
    pub recipes: RecipesContent,
    pub testimonials: TestimonialsContent,
    pub access: AccessContent,
    pub curriculum: CurriculumContent,
    pub bonuses: BonusesContent,
    pub offer: OfferContent,
    pub rationale: RationaleContent,
    pub faq: FaqContent,
    pub guarantee: GuaranteeContent,
    pub footer: FooterContent,
}

impl PageConfig {
    /// Parse and validate the bundled document.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml_str(EMBEDDED_CONTENT)
    }

    /// Parse and validate a content document.
    pub fn from_toml_str(source: &str) -> Result<Self, ContentError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ContentError> {
        require_http_url("checkout_url", &self.checkout_url)?;
        require_http_url("image_host", &self.image_host)?;

        let items = &self.testimonials.items;
        if items.is_empty() {
            return Err(ContentError::EmptyCarousel);
        }
        // Duplicates are fine; blanks would produce a broken image URL.
        if let Some(index) = items
            .iter()
            .position(|item| item.id.trim().is_empty() || item.name.trim().is_empty())
        {
            return Err(ContentError::InvalidCarouselItem { index });
        }

        Ok(())
    }
}

fn require_http_url(field: &'static str, raw: &str) -> Result<Url, ContentError> {
    let url = Url::parse(raw).map_err(|source| ContentError::InvalidUrl {
        field,
        url: raw.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ContentError::UnsupportedScheme {
            field,
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CtaTarget;
    use pretty_assertions::assert_eq;

    fn embedded_with(from: &str, to: &str) -> String {
        assert!(EMBEDDED_CONTENT.contains(from), "fixture drifted: {from}");
        EMBEDDED_CONTENT.replacen(from, to, 1)
    }

    #[test]
    fn embedded_document_is_valid() {
        let config = PageConfig::embedded().expect("embedded content");

        assert_eq!(config.offer_anchor.as_str(), "offer-section");
        assert_eq!(config.checkout_url, "https://go.frendz.com.br/talug");
        assert_eq!(config.testimonials.items.len(), 6);
        assert_eq!(config.testimonials.items[0].name, "Depo-1");
        assert_eq!(config.recipes.recipes.len(), 8);
        assert_eq!(config.bonuses.bonuses.len(), 3);
        assert_eq!(config.faq.entries.len(), 2);
    }

    #[test]
    fn embedded_ctas_split_between_offer_and_checkout() {
        let config = PageConfig::embedded().unwrap();

        assert_eq!(config.hero.cta.target, CtaTarget::Offer);
        assert_eq!(config.testimonials.cta.target, CtaTarget::Offer);
        assert_eq!(config.offer.cta.target, CtaTarget::Checkout);
        assert_eq!(config.guarantee.cta.target, CtaTarget::Checkout);
    }

    #[test]
    fn carousel_keeps_document_order() {
        let config = PageConfig::embedded().unwrap();
        let names: Vec<&str> = config
            .testimonials
            .items
            .iter()
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Depo-1", "Depo-3", "Depo-2", "Depo-4", "Depo-6", "Depo-5"]
        );
    }

    #[test]
    fn rejects_relative_checkout_url() {
        let source = embedded_with(
            r#"checkout_url = "https://go.frendz.com.br/talug""#,
            r#"checkout_url = "/checkout""#,
        );
        let err = PageConfig::from_toml_str(&source).unwrap_err();
        assert!(matches!(
            err,
            ContentError::InvalidUrl {
                field: "checkout_url",
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_http_checkout_url() {
        let source = embedded_with(
            r#"checkout_url = "https://go.frendz.com.br/talug""#,
            r#"checkout_url = "javascript:alert(1)""#,
        );
        let err = PageConfig::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, ContentError::UnsupportedScheme { .. }));
    }

    #[test]
    fn rejects_anchor_with_whitespace() {
        let source = embedded_with(
            r#"offer_anchor = "offer-section""#,
            r#"offer_anchor = "offer section""#,
        );
        let err = PageConfig::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().contains("invalid anchor id"));
    }

    #[test]
    fn rejects_blank_carousel_item() {
        let source = embedded_with(
            r#"{ id = "sJNdQYLh", name = "Depo-3" }"#,
            r#"{ id = "sJNdQYLh", name = " " }"#,
        );
        let err = PageConfig::from_toml_str(&source).unwrap_err();
        assert!(matches!(err, ContentError::InvalidCarouselItem { index: 1 }));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = PageConfig::from_toml_str("checkout_url = ").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
