//! Dark mode toggle.
//!
//! Theme state is not stored anywhere: it is the presence of the
//! `dark-mode` class on `<body>`. Preference is not persisted across reloads.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{DARK_MODE_CLASS, MOON_GLYPH, SUN_GLYPH, THEME_TOGGLE_ID};
use crate::dom::Dom;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Glyph for the toggle button: the sun offers a way back out of dark mode.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => SUN_GLYPH,
            Theme::Light => MOON_GLYPH,
        }
    }
}

/// Read the theme currently applied to the document.
pub fn current<D: Dom + ?Sized>(dom: &D) -> Theme {
    if dom.body_has_class(DARK_MODE_CLASS) { Theme::Dark } else { Theme::Light }
}

/// Flip dark mode and update the toggle button's glyph.
pub fn toggle<D: Dom + ?Sized>(dom: &D) -> Theme {
    let theme = if dom.toggle_body_class(DARK_MODE_CLASS) { Theme::Dark } else { Theme::Light };
    if let Some(button) = dom.element_by_id(THEME_TOGGLE_ID) {
        dom.set_text(&button, theme.glyph());
    }
    theme
}
