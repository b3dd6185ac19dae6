//! Slot-to-element binding table.
//!
//! Built once when the page starts: one entry per scalar slot, one per
//! dictionary list item. List collections are counted against the catalog
//! here, so a page whose markup has too few or too many nodes is reported
//! before the first language switch. Nodes are still looked up fresh on every
//! rewrite, so list items added after startup are picked up and items that
//! are gone are skipped.

#[cfg(test)]
#[path = "bindings_test.rs"]
mod bindings_test;

use crate::config::MissingTargetPolicy;
use crate::dom::Dom;
use crate::error::LandingError;

use super::{Catalog, ListKey, TextSlot};

/// Where a slot's text lives: the `index`-th match of `selector`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Target {
    pub selector: &'static str,
    pub index: usize,
}

impl Target {
    /// Look the node up in `dom` as it is right now.
    pub fn locate<D: Dom + ?Sized>(&self, dom: &D) -> Option<D::Node> {
        dom.nth(self.selector, self.index)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub slot: TextSlot,
    pub target: Target,
}

/// Ordered list of every rewritable slot on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<Binding>,
}

impl Bindings {
    /// Bind every slot in `catalog` to its element in `dom`.
    ///
    /// # Errors
    ///
    /// With [`MissingTargetPolicy::Fail`], returns
    /// [`LandingError::LengthMismatch`] for the first list whose node count
    /// differs from its dictionary length. With `Skip`, the mismatch is logged
    /// and every dictionary entry is still bound; whichever nodes exist when a
    /// rewrite runs receive their text.
    pub fn resolve<D: Dom + ?Sized>(
        dom: &D,
        catalog: &Catalog,
        policy: MissingTargetPolicy,
    ) -> Result<Self, LandingError> {
        let mut entries = TextSlot::SCALARS
            .iter()
            .map(|&slot| Binding { slot, target: Target { selector: slot.selector(), index: 0 } })
            .collect::<Vec<_>>();

        for key in ListKey::ALL {
            let selector = key.selector();
            let expected = catalog.list_len(key);
            let found = dom.count(selector);
            if found != expected {
                if policy == MissingTargetPolicy::Fail {
                    return Err(LandingError::LengthMismatch { slot: key.name(), selector, expected, found });
                }
                leptos::logging::warn!(
                    "{} has {expected} entries but {selector} matches {found} nodes",
                    key.name()
                );
            }
            entries.extend(
                (0..expected)
                    .map(|index| Binding { slot: TextSlot::Item(key, index), target: Target { selector, index } }),
            );
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of bound items for a list key.
    #[must_use]
    pub fn items_bound(&self, key: ListKey) -> usize {
        self.entries
            .iter()
            .filter(|binding| matches!(binding.slot, TextSlot::Item(k, _) if k == key))
            .count()
    }
}
