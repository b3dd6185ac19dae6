//! Event wiring.
//!
//! Attaches one click listener per control to the mounted page. The three
//! controls are wired independently: a control whose setup fails is logged
//! and left inert, and the others are still attached.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use std::rc::Rc;

use crate::config::LandingConfig;
use crate::consts::{LANG_TOGGLE_ID, NAV_LINK_SELECTOR, THEME_TOGGLE_ID};
use crate::controls::language::LanguageSwitcher;
use crate::controls::scroll::SmoothScroll;
use crate::controls::theme;
use crate::dom::{ClickHandler, Dom};
use crate::i18n::Catalog;
use crate::i18n::bindings::Bindings;
use crate::util::timer::Scheduler;

/// Attach the theme, language, and nav handlers. Returns how many listeners
/// were attached.
pub fn install<D, S>(dom: &D, catalog: Rc<Catalog>, config: &LandingConfig, scheduler: S) -> usize
where
    D: Dom + Clone + 'static,
    S: Scheduler + 'static,
{
    let mut attached = 0;

    match dom.element_by_id(THEME_TOGGLE_ID) {
        Some(button) => {
            leptos::logging::log!("theme toggle ready; page is {:?}", theme::current(dom));
            let page = dom.clone();
            attached += usize::from(listen(
                dom,
                &button,
                "theme toggle",
                Box::new(move || {
                    theme::toggle(&page);
                    false
                }),
            ));
        }
        None => leptos::logging::warn!("#{THEME_TOGGLE_ID} not found; theme toggle disabled"),
    }

    match dom.element_by_id(LANG_TOGGLE_ID) {
        Some(button) => match Bindings::resolve(dom, &catalog, config.missing_targets) {
            Ok(bindings) => {
                leptos::logging::log!("bound {} text slots", bindings.len());
                let mut switcher = LanguageSwitcher::new(config, catalog, Rc::new(bindings));
                let page = dom.clone();
                attached += usize::from(listen(
                    dom,
                    &button,
                    "language toggle",
                    Box::new(move || {
                        switcher.activate(&page, &scheduler);
                        false
                    }),
                ));
            }
            Err(err) => leptos::logging::error!("language switch disabled: {err}"),
        },
        None => leptos::logging::warn!("#{LANG_TOGGLE_ID} not found; language switch disabled"),
    }

    let scroll = SmoothScroll::new(config);
    for link in dom.query_all(NAV_LINK_SELECTOR) {
        let Some(href) = dom.attribute(&link, "href") else {
            continue;
        };
        let page = dom.clone();
        let what = format!("nav link {href}");
        attached += usize::from(listen(
            dom,
            &link,
            &what,
            Box::new(move || scroll.follow(&page, &href).prevents_default()),
        ));
    }

    attached
}

fn listen<D: Dom>(dom: &D, node: &D::Node, what: &str, handler: ClickHandler) -> bool {
    match dom.on_click(node, handler) {
        Ok(()) => true,
        Err(err) => {
            leptos::logging::error!("{what} not wired: {err}");
            false
        }
    }
}
