// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reads the outline out of the document.
//!
//! Direct element children of a container are scanned in document order:
//! `<section>` elements nest, and `<step>` elements (or any element with
//! class `step`) become steps. Anything else is ignored, including its
//! descendants.

use alloc::format;
use alloc::vec::Vec;

use web_sys::{Element, HtmlElement};
use wasm_bindgen::JsCast as _;

use zoomdeck_core::outline::{Overrides, Section, Step};
use zoomdeck_core::step::StepRegistry;

/// Override names, each read from the matching `data-*` attribute.
pub(crate) const OVERRIDE_ATTRIBUTES: [&str; 8] = [
    "x", "y", "z", "rotate-x", "rotate-y", "rotate-z", "rotate", "scale",
];

/// What an outline element is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NodeKind {
    Section,
    Step,
    Other,
}

/// Classifies an element by tag name and class list.
pub(crate) fn classify(tag: &str, has_step_class: bool) -> NodeKind {
    if tag.eq_ignore_ascii_case("section") {
        NodeKind::Section
    } else if tag.eq_ignore_ascii_case("step") || has_step_class {
        NodeKind::Step
    } else {
        NodeKind::Other
    }
}

/// Builds the outline below `container`.
///
/// Returns the root section and the step elements in document order, which
/// is also registry order.
#[must_use]
pub fn read_outline(container: &Element) -> (Section, Vec<HtmlElement>) {
    let mut elements = Vec::new();
    let root = read_section(container, &mut elements);
    (root, elements)
}

fn read_section(container: &Element, elements: &mut Vec<HtmlElement>) -> Section {
    let mut section = Section::new();
    let children = container.children();
    for i in 0..children.length() {
        let Some(child) = children.item(i) else {
            continue;
        };
        match classify(&child.tag_name(), child.class_list().contains("step")) {
            NodeKind::Section => section.push(read_section(&child, elements)),
            NodeKind::Step => {
                section.push(read_step(&child));
                elements.push(child.unchecked_into());
            }
            NodeKind::Other => {}
        }
    }
    section
}

fn read_step(el: &Element) -> Step {
    let mut overrides = Overrides::default();
    for name in OVERRIDE_ATTRIBUTES {
        if let Some(value) = el.get_attribute(&format!("data-{name}")) {
            // Malformed values leave the computed default in place.
            let _ = overrides.set_attribute(name, &value);
        }
    }
    let id = el.id();
    let step = if id.is_empty() {
        Step::new()
    } else {
        Step::with_id(id)
    };
    step.overrides(overrides)
}

/// Gives every element without an `id` the identifier the registry assigned.
pub fn write_back_ids(registry: &StepRegistry, elements: &[HtmlElement]) {
    for ((_, id, _), el) in registry.iter().zip(elements) {
        if el.id().is_empty() {
            el.set_id(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_and_classes() {
        assert_eq!(classify("SECTION", false), NodeKind::Section);
        assert_eq!(classify("section", true), NodeKind::Section);
        assert_eq!(classify("STEP", false), NodeKind::Step);
        assert_eq!(classify("DIV", true), NodeKind::Step);
        assert_eq!(classify("DIV", false), NodeKind::Other);
    }

    #[test]
    fn every_attribute_is_understood() {
        for name in OVERRIDE_ATTRIBUTES {
            let mut o = Overrides::default();
            assert!(o.set_attribute(name, "2").is_ok(), "{name}");
            assert_ne!(o, Overrides::default(), "{name} was ignored");
        }
    }
}
