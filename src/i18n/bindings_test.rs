use super::*;
use crate::dom::memory::{MemoryDom, MemoryElement};
use crate::i18n::Language;

fn catalog() -> Catalog {
    Catalog::builtin().expect("builtin catalog")
}

#[test]
fn resolves_every_slot_on_a_complete_page() {
    let catalog = catalog();
    let dom = MemoryDom::landing(catalog.dictionary(Language::Tr));
    let bindings = Bindings::resolve(&dom, &catalog, MissingTargetPolicy::Fail).unwrap();

    // 10 scalars + 3 features + 2 downloads + 2 reviews + 2 news.
    assert_eq!(bindings.len(), 19);
    assert_eq!(bindings.items_bound(ListKey::Features), 3);
    assert_eq!(bindings.items_bound(ListKey::News), 2);
    for binding in bindings.iter() {
        assert!(binding.target.locate(&dom).is_some(), "{:?} unbound", binding.slot);
    }
}

#[test]
fn scalars_come_first_in_rewrite_order() {
    let catalog = catalog();
    let dom = MemoryDom::landing(catalog.dictionary(Language::Tr));
    let bindings = Bindings::resolve(&dom, &catalog, MissingTargetPolicy::Skip).unwrap();
    let first = bindings.iter().next().unwrap();
    assert_eq!(first.slot, TextSlot::HeroTitle);
    assert_eq!(first.target, Target { selector: ".hero h1", index: 0 });
}

#[test]
fn short_collection_fails_under_fail_policy() {
    let catalog = catalog();
    let dom = MemoryDom::landing(catalog.dictionary(Language::Tr));
    dom.remove_matching(".feature p");
    dom.insert(MemoryElement::new().matching(".feature p"));

    let err = Bindings::resolve(&dom, &catalog, MissingTargetPolicy::Fail).unwrap_err();
    assert!(matches!(
        err,
        LandingError::LengthMismatch { slot: "features", selector: ".feature p", expected: 3, found: 1 }
    ));
}

#[test]
fn short_collection_still_binds_every_entry_under_skip_policy() {
    let catalog = catalog();
    let dom = MemoryDom::landing(catalog.dictionary(Language::Tr));
    dom.remove_matching(".feature p");
    dom.insert(MemoryElement::new().matching(".feature p"));

    let bindings = Bindings::resolve(&dom, &catalog, MissingTargetPolicy::Skip).unwrap();
    assert_eq!(bindings.items_bound(ListKey::Features), 3);
    assert_eq!(bindings.len(), 19);
    let located = bindings
        .iter()
        .filter(|binding| matches!(binding.slot, TextSlot::Item(ListKey::Features, _)))
        .filter(|binding| binding.target.locate(&dom).is_some())
        .count();
    assert_eq!(located, 1);
}

#[test]
fn items_added_after_resolve_become_locatable() {
    let catalog = catalog();
    let dom = MemoryDom::landing(catalog.dictionary(Language::Tr));
    dom.remove_matching(".feature p");
    let bindings = Bindings::resolve(&dom, &catalog, MissingTargetPolicy::Skip).unwrap();

    dom.insert(MemoryElement::new().matching(".feature p"));
    dom.insert(MemoryElement::new().matching(".feature p"));
    let target = Target { selector: ".feature p", index: 1 };
    assert!(bindings.iter().any(|binding| binding.target == target));
    assert!(target.locate(&dom).is_some());
}

#[test]
fn long_collection_binds_only_dictionary_entries() {
    let catalog = catalog();
    let dom = MemoryDom::landing(catalog.dictionary(Language::Tr));
    dom.insert(MemoryElement::new().matching(".news li").text("extra"));

    assert!(Bindings::resolve(&dom, &catalog, MissingTargetPolicy::Fail).is_err());
    let bindings = Bindings::resolve(&dom, &catalog, MissingTargetPolicy::Skip).unwrap();
    assert_eq!(bindings.items_bound(ListKey::News), 2);
}

#[test]
fn empty_document_still_binds_every_slot() {
    let catalog = catalog();
    let dom = MemoryDom::new();
    let bindings = Bindings::resolve(&dom, &catalog, MissingTargetPolicy::Skip).unwrap();
    assert_eq!(bindings.len(), 19);
    assert!(bindings.iter().all(|binding| binding.target.locate(&dom).is_none()));
}
