//! Smooth in-page anchor scrolling.
//!
//! Internal navigation links jump under the fixed header by default. The
//! handler replaces the jump with a smooth scroll that stops the header's
//! height short of the target.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::config::LandingConfig;
use crate::dom::Dom;

/// What a navigation click resolved to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollOutcome {
    /// Viewport animated to `top`.
    Scrolled { top: f64 },
    /// The fragment names no element; nothing moved.
    MissingTarget,
    /// Not a fragment link; the browser should navigate normally.
    NotInternal,
}

impl ScrollOutcome {
    /// Whether the click's default navigation must be suppressed.
    #[must_use]
    pub fn prevents_default(self) -> bool {
        !matches!(self, ScrollOutcome::NotInternal)
    }
}

/// The fragment identifier of an in-page link, without the `#`.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    href.trim().strip_prefix('#')
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScroll {
    offset_px: f64,
}

impl SmoothScroll {
    #[must_use]
    pub fn new(config: &LandingConfig) -> Self {
        Self { offset_px: config.scroll_offset_px }
    }

    /// Handle a click on a link pointing at `href`.
    pub fn follow<D: Dom + ?Sized>(&self, dom: &D, href: &str) -> ScrollOutcome {
        let Some(id) = fragment(href) else {
            return ScrollOutcome::NotInternal;
        };
        let Some(target) = dom.element_by_id(id) else {
            return ScrollOutcome::MissingTarget;
        };
        let top = dom.offset_top(&target) - self.offset_px;
        dom.smooth_scroll_to(top);
        ScrollOutcome::Scrolled { top }
    }
}
