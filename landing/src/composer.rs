//! Page composition.
//!
//! The section order is fixed. Every CTA in the document names its target
//! symbolically; the composer turns `offer` into one shared scroll callback
//! and `checkout` into an external link.

use std::sync::Arc;

use crate::action::{ActionCallback, ActionTarget};
use crate::anchor::{AnchorHost, AnchorId};
use crate::config::PageConfig;
use crate::content::{CtaConfig, CtaTarget};

/// Page sections, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Hero,
    Audience,
    Truth,
    Advantages,
    Recipes,
    Testimonials,
    Access,
    Curriculum,
    Bonuses,
    Offer,
    Rationale,
    Faq,
    Guarantee,
    Footer,
}

/// Render order of the page.
pub const SECTION_ORDER: [SectionKind; 14] = [
    SectionKind::Hero,
    SectionKind::Audience,
    SectionKind::Truth,
    SectionKind::Advantages,
    SectionKind::Recipes,
    SectionKind::Testimonials,
    SectionKind::Access,
    SectionKind::Curriculum,
    SectionKind::Bonuses,
    SectionKind::Offer,
    SectionKind::Rationale,
    SectionKind::Faq,
    SectionKind::Guarantee,
    SectionKind::Footer,
];

/// A CTA ready to render.
#[derive(Clone, Debug)]
pub struct CallToAction {
    pub text: String,
    pub action: ActionTarget,
}

/// Holds the page configuration and the shared offer action.
#[derive(Clone, Debug)]
pub struct PageComposer {
    config: Arc<PageConfig>,
    offer: ActionCallback,
}

impl PageComposer {
    /// Wire the offer CTAs to scroll `host` to the configured offer anchor.
    pub fn new<H>(config: PageConfig, host: H) -> Self
    where
        H: AnchorHost + Send + Sync + 'static,
    {
        let offer = ActionCallback::scroll_to(host, config.offer_anchor.clone());
        Self {
            config: Arc::new(config),
            offer,
        }
    }

    /// The configuration the page renders from.
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// The shared in-page action every `offer` CTA invokes.
    pub fn offer_action(&self) -> &ActionCallback {
        &self.offer
    }

    /// The anchor a section carries. Only the offer section has one.
    pub fn anchor_for(&self, kind: SectionKind) -> Option<AnchorId> {
        (kind == SectionKind::Offer).then(|| self.config.offer_anchor.clone())
    }

    /// Resolve a document CTA into something clickable.
    pub fn resolve(&self, cta: &CtaConfig) -> CallToAction {
        let action = match cta.target {
            CtaTarget::Offer => ActionTarget::Callback(self.offer.clone()),
            CtaTarget::Checkout => ActionTarget::ExternalLink(self.config.checkout_url.clone()),
        };
        CallToAction {
            text: cta.text.clone(),
            action,
        }
    }

    /// The CTA a section ends with, if it has one.
    pub fn cta(&self, kind: SectionKind) -> Option<CallToAction> {
        let config = &self.config;
        let cta = match kind {
            SectionKind::Hero => &config.hero.cta,
            SectionKind::Truth => &config.truth.cta,
            SectionKind::Recipes => &config.recipes.cta,
            SectionKind::Testimonials => &config.testimonials.cta,
            SectionKind::Access => &config.access.cta,
            SectionKind::Offer => &config.offer.cta,
            SectionKind::Guarantee => &config.guarantee.cta,
            SectionKind::Audience
            | SectionKind::Advantages
            | SectionKind::Curriculum
            | SectionKind::Bonuses
            | SectionKind::Rationale
            | SectionKind::Faq
            | SectionKind::Footer => return None,
        };
        Some(self.resolve(cta))
    }

    /// Every CTA on the page, in render order.
    pub fn call_to_actions(&self) -> Vec<(SectionKind, CallToAction)> {
        SECTION_ORDER
            .iter()
            .filter_map(|kind| self.cta(*kind).map(|cta| (*kind, cta)))
            .collect()
    }
}
