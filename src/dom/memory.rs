//! In-memory document used by tests and non-browser builds.
//!
//! Elements do not form a tree. Each element is registered with the exact
//! selector strings it should answer to, which is all the controls ever ask
//! for: they query a fixed set of selectors and never traverse.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use super::{ClickHandler, Dom};
use crate::consts::{
    ABOUT_TEXT_SELECTOR, ABOUT_TITLE_SELECTOR, CONTACT_TITLE_SELECTOR, DOWNLOAD_BUTTONS_SELECTOR,
    DOWNLOAD_TITLE_SELECTOR, FEATURE_ITEMS_SELECTOR, FEATURES_TITLE_SELECTOR, HERO_BUTTON_SELECTOR,
    HERO_TEXT_SELECTOR, HERO_TITLE_SELECTOR, LANG_TOGGLE_ID, MOON_GLYPH, NAV_LINK_SELECTOR,
    NEWS_ITEMS_SELECTOR, NEWS_TITLE_SELECTOR, REVIEW_ITEMS_SELECTOR, REVIEWS_TITLE_SELECTOR,
    THEME_TOGGLE_ID,
};
use crate::error::LandingError;
use crate::i18n::Dictionary;

/// Handle to an element of a [`MemoryDom`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Description of one element to insert.
#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    pub id: Option<String>,
    pub selectors: Vec<String>,
    pub text: String,
    pub offset_top: f64,
    pub attributes: HashMap<String, String>,
    /// `on_click` fails for this element, as a browser would on a detached node.
    pub refuses_listeners: bool,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    #[must_use]
    pub fn matching(mut self, selector: &str) -> Self {
        self.selectors.push(selector.to_owned());
        self
    }

    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        text.clone_into(&mut self.text);
        self
    }

    #[must_use]
    pub fn offset_top(mut self, offset_top: f64) -> Self {
        self.offset_top = offset_top;
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name.to_owned(), value.to_owned());
        self
    }
}

#[derive(Debug, Default)]
struct Body {
    classes: BTreeSet<String>,
    attributes: HashMap<String, String>,
    opacity: Option<f64>,
    opacity_log: Vec<f64>,
}

/// A flat, in-memory stand-in for the browser document.
#[derive(Default)]
pub struct MemoryDom {
    elements: RefCell<Vec<MemoryElement>>,
    body: RefCell<Body>,
    scroll_y: RefCell<f64>,
    listeners: RefCell<Vec<(NodeId, ClickHandler)>>,
}

impl fmt::Debug for MemoryDom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDom")
            .field("elements", &self.elements)
            .field("body", &self.body)
            .field("scroll_y", &self.scroll_y)
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl MemoryDom {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the landing page's text-bearing elements, filled from `dictionary`.
    ///
    /// Mirrors the markup rendered by [`crate::app::LandingPage`].
    #[must_use]
    pub fn landing(dictionary: &Dictionary) -> Self {
        let dom = Self::new();
        dom.insert(MemoryElement::new().id(THEME_TOGGLE_ID).text(MOON_GLYPH));
        dom.insert(MemoryElement::new().id(LANG_TOGGLE_ID).text("TR / EN"));

        let scalars = [
            (HERO_TITLE_SELECTOR, &dictionary.hero_title),
            (HERO_TEXT_SELECTOR, &dictionary.hero_text),
            (HERO_BUTTON_SELECTOR, &dictionary.hero_btn),
            (FEATURES_TITLE_SELECTOR, &dictionary.features_title),
            (ABOUT_TITLE_SELECTOR, &dictionary.about_title),
            (ABOUT_TEXT_SELECTOR, &dictionary.about_text),
            (DOWNLOAD_TITLE_SELECTOR, &dictionary.download_title),
            (REVIEWS_TITLE_SELECTOR, &dictionary.reviews_title),
            (NEWS_TITLE_SELECTOR, &dictionary.news_title),
            (CONTACT_TITLE_SELECTOR, &dictionary.contact_title),
        ];
        for (selector, text) in scalars {
            dom.insert(MemoryElement::new().matching(selector).text(text));
        }

        let lists = [
            (FEATURE_ITEMS_SELECTOR, &dictionary.features),
            (DOWNLOAD_BUTTONS_SELECTOR, &dictionary.download_buttons),
            (REVIEW_ITEMS_SELECTOR, &dictionary.reviews),
            (NEWS_ITEMS_SELECTOR, &dictionary.news),
        ];
        for (selector, items) in lists {
            for text in items {
                dom.insert(MemoryElement::new().matching(selector).text(text));
            }
        }

        let sections = ["features", "about", "download", "reviews", "news", "contact"];
        for (i, section) in sections.into_iter().enumerate() {
            let top = 600.0 + 500.0 * i as f64;
            dom.insert(MemoryElement::new().id(section).offset_top(top));
            dom.insert(MemoryElement::new().matching(NAV_LINK_SELECTOR).attr("href", &format!("#{section}")));
        }
        dom
    }

    /// Add an element and return its handle.
    pub fn insert(&self, element: MemoryElement) -> NodeId {
        let mut elements = self.elements.borrow_mut();
        elements.push(element);
        NodeId(elements.len() - 1)
    }

    /// Detach every element matching `selector`.
    pub fn remove_matching(&self, selector: &str) {
        for element in self.elements.borrow_mut().iter_mut() {
            element.selectors.retain(|s| s != selector);
        }
    }

    /// Text of every element matching `selector`, in insertion order.
    #[must_use]
    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.query_all(selector).iter().map(|node| self.text(node)).collect()
    }

    /// Text of the first element matching `selector`.
    #[must_use]
    pub fn first_text(&self, selector: &str) -> Option<String> {
        self.nth(selector, 0).map(|node| self.text(&node))
    }

    pub fn set_body_attribute(&self, name: &str, value: &str) {
        self.body.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
    }

    /// Inline body opacity, `None` until first set.
    #[must_use]
    pub fn body_opacity(&self) -> Option<f64> {
        self.body.borrow().opacity
    }

    /// Every opacity value assigned to `<body>`, oldest first.
    #[must_use]
    pub fn opacity_log(&self) -> Vec<f64> {
        self.body.borrow().opacity_log.clone()
    }

    #[must_use]
    pub fn scroll_y(&self) -> f64 {
        *self.scroll_y.borrow()
    }

    /// Make `on_click` fail for `node` from now on.
    pub fn refuse_listeners(&self, node: NodeId) {
        if let Some(element) = self.elements.borrow_mut().get_mut(node.0) {
            element.refuses_listeners = true;
        }
    }

    /// Number of click listeners attached to `node`.
    #[must_use]
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.listeners.borrow().iter().filter(|(target, _)| *target == node).count()
    }

    /// Dispatch a click to `node`. Returns whether any listener suppressed
    /// the default action.
    pub fn click(&self, node: NodeId) -> bool {
        // Handlers are moved out while they run so they may use the document freely.
        let mut listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        let mut prevented = false;
        for (_, handler) in listeners.iter_mut().filter(|(target, _)| *target == node) {
            prevented |= handler();
        }
        let mut slot = self.listeners.borrow_mut();
        listeners.append(&mut slot);
        *slot = listeners;
        prevented
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements
            .borrow()
            .iter()
            .position(|element| element.id.as_deref() == Some(id))
            .map(NodeId)
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.elements
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, element)| element.selectors.iter().any(|s| s == selector))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        if let Some(element) = self.elements.borrow_mut().get_mut(node.0) {
            text.clone_into(&mut element.text);
        }
    }

    fn text(&self, node: &NodeId) -> String {
        self.elements
            .borrow()
            .get(node.0)
            .map(|element| element.text.clone())
            .unwrap_or_default()
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(node.0)
            .and_then(|element| element.attributes.get(name).cloned())
    }

    fn offset_top(&self, node: &NodeId) -> f64 {
        self.elements
            .borrow()
            .get(node.0)
            .map_or(0.0, |element| element.offset_top)
    }

    fn toggle_body_class(&self, class: &str) -> bool {
        let mut body = self.body.borrow_mut();
        if body.classes.remove(class) {
            false
        } else {
            body.classes.insert(class.to_owned());
            true
        }
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.body.borrow().classes.contains(class)
    }

    fn set_body_opacity(&self, opacity: f64) {
        let mut body = self.body.borrow_mut();
        body.opacity = Some(opacity);
        body.opacity_log.push(opacity);
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        self.body.borrow().attributes.get(name).cloned()
    }

    fn smooth_scroll_to(&self, top: f64) {
        *self.scroll_y.borrow_mut() = top;
    }

    fn on_click(&self, node: &NodeId, handler: ClickHandler) -> Result<(), LandingError> {
        match self.elements.borrow().get(node.0) {
            Some(element) if !element.refuses_listeners => {}
            _ => return Err(LandingError::Dom(format!("node {} refused a click listener", node.0))),
        }
        self.listeners.borrow_mut().push((*node, handler));
        Ok(())
    }
}
