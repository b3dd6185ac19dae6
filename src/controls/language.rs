//! TR/EN language switch.
//!
//! DESIGN
//! ======
//! A switch is a two-phase operation. [`LanguageSwitcher::begin`] flips the
//! active language and fades the body out; the returned [`Transition`] is
//! later completed (text rewritten, body faded back in). In the browser the
//! completion is deferred by the fade delay through a [`Scheduler`]; tests
//! complete it inline.
//!
//! Two quick clicks schedule two independent completions. Each one rewrites
//! for the language that was active when it began, so the last one to fire
//! wins.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use std::rc::Rc;

use crate::config::{LandingConfig, MissingTargetPolicy};
use crate::dom::Dom;
use crate::error::LandingError;
use crate::i18n::bindings::Bindings;
use crate::i18n::{Catalog, Language};
use crate::util::timer::Scheduler;

/// Owner of the active language.
#[derive(Clone, Debug)]
pub struct LanguageSwitcher {
    current: Language,
    catalog: Rc<Catalog>,
    bindings: Rc<Bindings>,
    fade_delay_ms: u32,
    policy: MissingTargetPolicy,
}

impl LanguageSwitcher {
    #[must_use]
    pub fn new(config: &LandingConfig, catalog: Rc<Catalog>, bindings: Rc<Bindings>) -> Self {
        Self {
            current: config.initial_language,
            catalog,
            bindings,
            fade_delay_ms: config.fade_delay_ms,
            policy: config.missing_targets,
        }
    }

    #[must_use]
    pub fn current(&self) -> Language {
        self.current
    }

    /// Phase one: flip the language and fade the page out.
    pub fn begin<D: Dom + ?Sized>(&mut self, dom: &D) -> Transition {
        self.current = self.current.toggled();
        dom.set_body_opacity(0.0);
        Transition {
            language: self.current,
            delay_ms: self.fade_delay_ms,
            catalog: Rc::clone(&self.catalog),
            bindings: Rc::clone(&self.bindings),
            policy: self.policy,
        }
    }

    /// Handle a click on the language button: begin now, complete after the fade delay.
    pub fn activate<D, S>(&mut self, dom: &D, scheduler: &S)
    where
        D: Dom + Clone + 'static,
        S: Scheduler + ?Sized,
    {
        let transition = self.begin(dom);
        leptos::logging::log!("switching language to {}", transition.language);
        let dom = dom.clone();
        scheduler.defer(
            transition.delay_ms,
            Box::new(move || {
                if let Err(err) = transition.complete(&dom) {
                    leptos::logging::warn!("language rewrite stopped: {err}");
                }
            }),
        );
    }
}

/// A language switch that has faded out and is waiting to rewrite.
#[derive(Clone, Debug)]
pub struct Transition {
    pub language: Language,
    pub delay_ms: u32,
    catalog: Rc<Catalog>,
    bindings: Rc<Bindings>,
    policy: MissingTargetPolicy,
}

impl Transition {
    /// Phase two: write this transition's dictionary into every bound node.
    ///
    /// Returns the number of nodes written.
    ///
    /// # Errors
    ///
    /// With [`MissingTargetPolicy::Fail`], returns
    /// [`LandingError::MissingTarget`] at the first bound node that is no
    /// longer in the document; nodes before it have already been rewritten.
    pub fn apply<D: Dom + ?Sized>(&self, dom: &D) -> Result<usize, LandingError> {
        let dictionary = self.catalog.dictionary(self.language);
        let mut written = 0;
        for binding in self.bindings.iter() {
            let Some(text) = dictionary.text(binding.slot) else {
                continue;
            };
            match binding.target.locate(dom) {
                Some(node) => {
                    dom.set_text(&node, text);
                    written += 1;
                }
                None if self.policy == MissingTargetPolicy::Fail => {
                    return Err(LandingError::MissingTarget {
                        selector: binding.target.selector.to_owned(),
                        index: binding.target.index,
                    });
                }
                None => {}
            }
        }
        Ok(written)
    }

    /// Phase three: fade the page back in.
    pub fn finish<D: Dom + ?Sized>(&self, dom: &D) {
        dom.set_body_opacity(1.0);
    }

    /// Rewrite and fade back in. The page is made visible again even when the
    /// rewrite stops early.
    pub fn complete<D: Dom + ?Sized>(self, dom: &D) -> Result<usize, LandingError> {
        let written = self.apply(dom);
        self.finish(dom);
        written
    }
}
