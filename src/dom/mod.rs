//! DOM query/mutation layer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Controls never touch `web_sys` directly. They talk to a [`Dom`], which is
//! backed by the live browser document in `csr` builds ([`web::WebDom`]) and
//! by [`memory::MemoryDom`] everywhere else, so every control runs in plain
//! `cargo test` without a browser.

pub mod memory;
#[cfg(feature = "csr")]
pub mod web;

use std::rc::Rc;

use crate::error::LandingError;

/// Click callback. Returns whether the event's default action is suppressed.
pub type ClickHandler = Box<dyn FnMut() -> bool>;

/// The operations the landing page needs from a document.
///
/// Methods take `&self`: a browser document is shared, mutable state behind
/// a handle, and the in-memory document mirrors that with interior mutability.
pub trait Dom {
    /// Handle to one element.
    type Node: Clone;

    /// Look up an element by its `id` attribute.
    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    /// Replace the text content of `node`.
    fn set_text(&self, node: &Self::Node, text: &str);

    /// Current text content of `node`.
    fn text(&self, node: &Self::Node) -> String;

    /// Value of attribute `name` on `node`.
    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Vertical offset of `node` from the top of the document, in CSS pixels.
    fn offset_top(&self, node: &Self::Node) -> f64;

    /// Toggle `class` on `<body>`. Returns whether the class is now present.
    fn toggle_body_class(&self, class: &str) -> bool;

    /// Whether `<body>` carries `class`.
    fn body_has_class(&self, class: &str) -> bool;

    /// Set the inline opacity of `<body>`.
    fn set_body_opacity(&self, opacity: f64);

    /// Value of attribute `name` on `<body>`.
    fn body_attribute(&self, name: &str) -> Option<String>;

    /// Animate the viewport's vertical scroll position to `top`.
    fn smooth_scroll_to(&self, top: f64);

    /// Attach `handler` to `node`'s click events for the life of the page.
    ///
    /// # Errors
    ///
    /// [`LandingError::Dom`] if the document refuses the listener.
    fn on_click(&self, node: &Self::Node, handler: ClickHandler) -> Result<(), LandingError>;

    /// Number of elements matching `selector`.
    fn count(&self, selector: &str) -> usize {
        self.query_all(selector).len()
    }

    /// The `index`-th element matching `selector`.
    fn nth(&self, selector: &str, index: usize) -> Option<Self::Node> {
        self.query_all(selector).into_iter().nth(index)
    }
}

impl<D: Dom + ?Sized> Dom for Rc<D> {
    type Node = D::Node;

    fn element_by_id(&self, id: &str) -> Option<Self::Node> {
        (**self).element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Self::Node> {
        (**self).query_all(selector)
    }

    fn set_text(&self, node: &Self::Node, text: &str) {
        (**self).set_text(node, text);
    }

    fn text(&self, node: &Self::Node) -> String {
        (**self).text(node)
    }

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String> {
        (**self).attribute(node, name)
    }

    fn offset_top(&self, node: &Self::Node) -> f64 {
        (**self).offset_top(node)
    }

    fn toggle_body_class(&self, class: &str) -> bool {
        (**self).toggle_body_class(class)
    }

    fn body_has_class(&self, class: &str) -> bool {
        (**self).body_has_class(class)
    }

    fn set_body_opacity(&self, opacity: f64) {
        (**self).set_body_opacity(opacity);
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        (**self).body_attribute(name)
    }

    fn smooth_scroll_to(&self, top: f64) {
        (**self).smooth_scroll_to(top);
    }

    fn on_click(&self, node: &Self::Node, handler: ClickHandler) -> Result<(), LandingError> {
        (**self).on_click(node, handler)
    }
}
