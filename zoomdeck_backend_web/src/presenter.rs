// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM presentation.
//!
//! Step elements get their forward transform once, in
//! [`place`](Presenter::place). Each [`Transition`] then rewrites the inline
//! styles of the two camera elements: the root (scale, perspective) and the
//! canvas (rotation, translation).

use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use web_sys::{CssStyleDeclaration, Element, HtmlElement, Window};

use zoomdeck_core::backend::Presenter;
use zoomdeck_core::camera::PhasedTransform;
use zoomdeck_core::deck::Transition;
use zoomdeck_core::step::{StepId, StepRegistry};

use crate::dom::css_ms;

/// Applies placements and camera moves to live DOM elements.
///
/// `steps` holds the step elements in registry order, as returned by
/// [`read_outline`](crate::read_outline).
pub struct DomPresenter {
    window: Window,
    root: HtmlElement,
    canvas: HtmlElement,
    steps: Vec<HtmlElement>,
}

impl core::fmt::Debug for DomPresenter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomPresenter")
            .field("root", &self.root.id())
            .field("steps", &self.steps.len())
            .finish_non_exhaustive()
    }
}

impl DomPresenter {
    /// Creates a presenter over a restructured root and its canvas.
    #[must_use]
    pub fn new(window: Window, root: HtmlElement, canvas: HtmlElement, steps: Vec<HtmlElement>) -> Self {
        Self {
            window,
            root,
            canvas,
            steps,
        }
    }

    /// Returns the element of `step`, if it exists.
    #[must_use]
    pub fn element(&self, step: StepId) -> Option<&HtmlElement> {
        self.steps.get(step.index() as usize)
    }

    /// Returns the position of `el` among the step elements.
    #[must_use]
    pub fn index_of(&self, el: &Element) -> Option<usize> {
        self.steps.iter().position(|s| {
            let s: &Element = s;
            s == el
        })
    }
}

impl Presenter for DomPresenter {
    fn place(&mut self, registry: &StepRegistry) {
        for (step, _, record) in registry.iter() {
            if let Some(el) = self.element(step) {
                let s = el.style();
                let _ = s.set_property("position", "absolute");
                let _ = s.set_property("transform", &record.transform().to_string());
                let _ = s.set_property("transform-style", "preserve-3d");
            }
        }
    }

    fn apply(&mut self, _registry: &StepRegistry, transition: &Transition) {
        // Focus changes can scroll the page even with `overflow: hidden`.
        self.window.scroll_to_with_x_and_y(0.0, 0.0);

        if let Some(el) = transition.previous.and_then(|p| self.element(p)) {
            let _ = el.class_list().remove_1("active");
        }
        if let Some(el) = self.element(transition.target) {
            let _ = el.class_list().add_1("active");
        }
        self.root.set_class_name(&transition.marker);

        let camera = &transition.camera;
        let root = self.root.style();
        let _ = root.set_property("perspective", &format!("{}px", camera.wrapper_perspective));
        apply_phase(&root, &camera.wrapper);
        apply_phase(&self.canvas.style(), &camera.canvas);
    }
}

fn apply_phase(style: &CssStyleDeclaration, phase: &PhasedTransform) {
    let _ = style.set_property("transform", &phase.transform.to_string());
    let _ = style.set_property("transition-delay", &css_ms(phase.delay));
}
