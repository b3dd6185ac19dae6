//! [`Dom`] over the live browser document via `web_sys`.
//!
//! DOM calls that can throw are logged and otherwise ignored; a failed
//! style or class update must not take the page's other handlers down.
//! Click listeners live for the lifetime of the page, so their closures are
//! leaked with `Closure::forget`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::{ClickHandler, Dom};
use crate::error::LandingError;

/// Handle to the page's window and document. Cheap to clone.
#[derive(Clone, Debug)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// Attach to the current window, if running in a browser with a document.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }
}

impl Dom for WebDom {
    type Node = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(err) => {
                leptos::logging::warn!("querySelectorAll({selector}) failed: {err:?}");
                return Vec::new();
            }
        };
        let mut out = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(Ok(element)) = list.item(i).map(JsCast::dyn_into::<Element>) {
                out.push(element);
            }
        }
        out
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn text(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn toggle_body_class(&self, class: &str) -> bool {
        let Some(body) = self.body() else {
            return false;
        };
        match body.class_list().toggle(class) {
            Ok(present) => present,
            Err(err) => {
                leptos::logging::warn!("classList.toggle({class}) failed: {err:?}");
                body.class_list().contains(class)
            }
        }
    }

    fn body_has_class(&self, class: &str) -> bool {
        self.body().is_some_and(|body| body.class_list().contains(class))
    }

    fn set_body_opacity(&self, opacity: f64) {
        let Some(body) = self.body() else {
            return;
        };
        if let Err(err) = body.style().set_property("opacity", &opacity.to_string()) {
            leptos::logging::warn!("setting body opacity failed: {err:?}");
        }
    }

    fn body_attribute(&self, name: &str) -> Option<String> {
        self.body().and_then(|body| body.get_attribute(name))
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn on_click(&self, node: &Element, mut handler: ClickHandler) -> Result<(), LandingError> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
            if handler() {
                ev.prevent_default();
            }
        });
        node.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|err| LandingError::Dom(format!("addEventListener(click) failed: {err:?}")))?;
        closure.forget();
        Ok(())
    }
}
