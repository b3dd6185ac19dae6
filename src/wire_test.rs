use super::*;
use crate::config::MissingTargetPolicy;
use crate::consts::{DARK_MODE_CLASS, HERO_BUTTON_SELECTOR};
use crate::dom::memory::{MemoryDom, MemoryElement, NodeId};
use crate::i18n::Language;
use crate::util::timer::ImmediateScheduler;

fn catalog() -> Rc<Catalog> {
    Rc::new(Catalog::builtin().expect("builtin catalog"))
}

fn landing() -> Rc<MemoryDom> {
    Rc::new(MemoryDom::landing(catalog().dictionary(Language::Tr)))
}

fn button(dom: &MemoryDom, id: &str) -> NodeId {
    dom.element_by_id(id).expect("button")
}

fn nav_link(dom: &MemoryDom, href: &str) -> NodeId {
    dom.query_all(NAV_LINK_SELECTOR)
        .into_iter()
        .find(|node| dom.attribute(node, "href").as_deref() == Some(href))
        .expect("nav link")
}

// =============================================================
// Complete page
// =============================================================

#[test]
fn wires_every_control_on_a_complete_page() {
    let dom = landing();
    // Theme, language, and six nav links.
    assert_eq!(install(&dom, catalog(), &LandingConfig::default(), ImmediateScheduler), 8);

    assert!(!dom.click(button(&dom, THEME_TOGGLE_ID)));
    assert!(dom.body_has_class(DARK_MODE_CLASS));

    dom.click(button(&dom, LANG_TOGGLE_ID));
    assert_eq!(dom.first_text(HERO_BUTTON_SELECTOR).as_deref(), Some("Explore"));

    assert!(dom.click(nav_link(&dom, "#about")));
    // #about sits at 1100 in the fixture.
    assert_eq!(dom.scroll_y(), 1030.0);
}

#[test]
fn language_button_keeps_its_state_between_clicks() {
    let dom = landing();
    install(&dom, catalog(), &LandingConfig::default(), ImmediateScheduler);
    let lang = button(&dom, LANG_TOGGLE_ID);
    dom.click(lang);
    dom.click(lang);
    assert_eq!(dom.first_text(HERO_BUTTON_SELECTOR).as_deref(), Some("Keşfet"));
}

#[test]
fn external_nav_link_keeps_browser_navigation() {
    let dom = landing();
    let external = dom.insert(MemoryElement::new().matching(NAV_LINK_SELECTOR).attr("href", "https://example.com"));
    assert_eq!(install(&dom, catalog(), &LandingConfig::default(), ImmediateScheduler), 9);
    assert!(!dom.click(external));
    assert_eq!(dom.scroll_y(), 0.0);
}

// =============================================================
// Independent controls
// =============================================================

#[test]
fn failed_bindings_disable_only_the_language_switch() {
    let dom = landing();
    dom.remove_matching(".feature p");
    dom.insert(MemoryElement::new().matching(".feature p"));
    let config = LandingConfig { missing_targets: MissingTargetPolicy::Fail, ..LandingConfig::default() };

    assert_eq!(install(&dom, catalog(), &config, ImmediateScheduler), 7);
    assert_eq!(dom.listener_count(button(&dom, LANG_TOGGLE_ID)), 0);

    dom.click(button(&dom, LANG_TOGGLE_ID));
    assert_eq!(dom.first_text(HERO_BUTTON_SELECTOR).as_deref(), Some("Keşfet"));

    dom.click(button(&dom, THEME_TOGGLE_ID));
    assert!(dom.body_has_class(DARK_MODE_CLASS));
    assert!(dom.click(nav_link(&dom, "#features")));
    assert_eq!(dom.scroll_y(), 530.0);
}

#[test]
fn refused_listener_does_not_stop_the_rest() {
    let dom = landing();
    dom.refuse_listeners(button(&dom, THEME_TOGGLE_ID));

    assert_eq!(install(&dom, catalog(), &LandingConfig::default(), ImmediateScheduler), 7);
    dom.click(button(&dom, THEME_TOGGLE_ID));
    assert!(!dom.body_has_class(DARK_MODE_CLASS));

    dom.click(button(&dom, LANG_TOGGLE_ID));
    assert_eq!(dom.first_text(HERO_BUTTON_SELECTOR).as_deref(), Some("Explore"));
    assert!(dom.click(nav_link(&dom, "#contact")));
}

#[test]
fn page_without_buttons_still_scrolls() {
    let dom = Rc::new(MemoryDom::new());
    dom.insert(MemoryElement::new().id("news").offset_top(900.0));
    let link = dom.insert(MemoryElement::new().matching(NAV_LINK_SELECTOR).attr("href", "#news"));

    assert_eq!(install(&dom, catalog(), &LandingConfig::default(), ImmediateScheduler), 1);
    assert!(dom.click(link));
    assert_eq!(dom.scroll_y(), 830.0);
}
