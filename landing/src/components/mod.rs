//! Reusable building blocks every section is assembled from.
//!
//! All of them are pure: they render their props and hold no state, except
//! [`Carousel`], which owns the viewport handle its arrows page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LayoutSection
//! ├── RichTextView
//! ├── ListItem (check / cross / bullet)
//! ├── RecipeCard | BonusCard | PriceCard | StepCard
//! ├── Carousel
//! │   └── NavArrow (left, right)
//! └── ActionControl (button or external link)
//! ```

mod action_control;
mod cards;
mod carousel;
mod icons;
mod layout_section;
mod list_item;
mod rich_text;

pub use action_control::ActionControl;
pub use cards::{BonusCard, PriceCard, RecipeCard, StepCard};
pub use carousel::{Carousel, NavArrow};
pub use icons::*;
pub use layout_section::LayoutSection;
pub use list_item::{Glyph, ListItem};
pub use rich_text::RichTextView;
