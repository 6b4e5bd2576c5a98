//! # incensos-landing
//!
//! Single-page marketing site for the *A Arte dos Incensos Artesanais* guide,
//! built with [Leptos](https://leptos.dev/) 0.8 in client-side-rendered mode.
//!
//! The page is static content poured into a handful of reusable building
//! blocks. Two pieces of behavior sit underneath it:
//!
//! - **Call-to-action routing** - every CTA either smooth-scrolls to the
//!   offer anchor or opens the checkout in a new browsing context
//!   ([`action`], [`anchor`]).
//! - **Carousel paging** - the testimonials strip pages by one viewport
//!   width per arrow press ([`carousel`]).
//!
//! Both talk to the browser through small traits so the arithmetic and the
//! no-op paths are testable natively; [`dom`] holds the web-sys side.
//!
//! ## Architecture
//!
//! - [`config`] / [`content`] - TOML content document and its typed records
//! - [`composer`] - fixed section order and CTA resolution
//! - [`components`] - reusable Leptos building blocks
//! - [`sections`] - one component per page section, plus [`sections::LandingPage`]
//! - [`logging`] - tracing subscriber that writes to the browser console
//!
//! ## Rendering without a browser
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use incensos_landing::{PageComposer, PageConfig, dom::DomDocument, sections::LandingPage};
//!
//! let composer = PageComposer::new(PageConfig::embedded()?, DomDocument);
//! let html = view! { <LandingPage composer=composer now=chrono::Local::now() /> }.to_html();
//! ```

pub mod action;
pub mod anchor;
pub mod carousel;
pub mod components;
pub mod composer;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod footer;
pub mod logging;
pub mod sections;

pub use action::{ActionCallback, ActionTarget, Activation};
pub use anchor::{AnchorHost, AnchorId, ScrollIntoView, scroll_to_anchor};
pub use carousel::{CarouselController, NavigationDirection, Viewport, ViewportHandle};
pub use composer::{PageComposer, SECTION_ORDER, SectionKind};
pub use config::PageConfig;
pub use error::ContentError;
