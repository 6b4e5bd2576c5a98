// A Arte dos Incensos Artesanais - landing page, Leptos 0.8 CSR

use anyhow::{Context, Result};
use chrono::Local;
use leptos::prelude::*;
use tracing::{error, info};

use incensos_landing::dom::DomDocument;
use incensos_landing::{PageComposer, PageConfig, logging, sections::LandingPage};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logging::init() {
        web_sys::console::warn_1(&format!("logging disabled: {err:#}").into());
    }

    match compose() {
        Ok(composer) => {
            info!(
                version = env!("CARGO_PKG_VERSION"),
                anchor = %composer.config().offer_anchor,
                "mounting landing page"
            );
            leptos::mount::mount_to_body(move || {
                view! { <LandingPage composer=composer now=Local::now() /> }
            });
        }
        Err(err) => {
            error!("landing page content unavailable: {err:#}");
            leptos::mount::mount_to_body(|| view! { <ContentUnavailable /> });
        }
    }
}

fn compose() -> Result<PageComposer> {
    let config = PageConfig::embedded().context("loading bundled content/page.toml")?;
    Ok(PageComposer::new(config, DomDocument))
}

#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <main class="antialiased">
            <p class="py-20 text-center text-stone-500">
                "Página temporariamente indisponível. Tente novamente em instantes."
            </p>
        </main>
    }
}
