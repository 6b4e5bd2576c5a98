//! Page sections, one component each, in render order.
//!
//! [`LandingPage`] walks [`crate::composer::SECTION_ORDER`] and hands each
//! section its content record and resolved CTA.

mod access;
mod advantages;
mod audience;
mod bonuses;
mod curriculum;
mod faq;
mod footer;
mod guarantee;
mod hero;
mod landing;
mod offer;
mod rationale;
mod recipes;
mod testimonials;
mod truth;

pub use access::Access;
pub use advantages::Advantages;
pub use audience::Audience;
pub use bonuses::Bonuses;
pub use curriculum::Curriculum;
pub use faq::Faq;
pub use footer::Footer;
pub use guarantee::Guarantee;
pub use hero::Hero;
pub use landing::LandingPage;
pub use offer::Offer;
pub use rationale::Rationale;
pub use recipes::Recipes;
pub use testimonials::Testimonials;
pub use truth::Truth;
