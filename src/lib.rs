//! # turkline-site
//!
//! Leptos + WASM client for the Türkline landing page.
//!
//! The page is rendered once and then driven by three click handlers: a
//! dark-mode toggle, a TR/EN language switch that rewrites the page's text
//! in place behind a short fade, and smooth scrolling for in-page navigation
//! links.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Landing page markup |
//! | [`controls`] | Theme, language, and scroll handlers |
//! | [`dom`] | DOM abstraction with browser and in-memory backends |
//! | [`i18n`] | Dictionaries, text slots, and slot bindings |
//! | [`config`] | `data-*` attribute configuration |
//! | [`util`] | Deferred callbacks |
//! | [`consts`] | Selectors, glyphs, and timing constants |
//! | [`error`] | Error taxonomy |
//! | [`wire`] | Click listeners for the three controls |

pub mod app;
pub mod config;
pub mod consts;
pub mod controls;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod util;
pub mod wire;

/// WASM entry point: mount the page and attach its handlers.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use std::rc::Rc;

    use leptos::prelude::*;

    use crate::app::App;
    use crate::util::timer::TimeoutScheduler;

    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }

    let Some(dom) = dom::web::WebDom::current() else {
        leptos::logging::error!("no browser document; landing page not started");
        return;
    };
    let catalog = match i18n::Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(err) => {
            leptos::logging::error!("{err}");
            return;
        }
    };
    let (cfg, rejected) = config::LandingConfig::from_dom(&dom);
    for err in rejected {
        leptos::logging::warn!("{err}; keeping the default for that attribute");
    }

    let dictionary = catalog.dictionary(cfg.initial_language).clone();
    leptos::mount::mount_to_body(move || view! { <App dictionary/> });

    let listeners = wire::install(&dom, Rc::new(catalog), &cfg, TimeoutScheduler);
    leptos::logging::log!("landing page ready with {listeners} click listeners");
}
