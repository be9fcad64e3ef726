// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard, pointer and `hashchange` wiring.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, KeyboardEvent, Window};

use zoomdeck_core::backend::Presenter as _;
use zoomdeck_core::deck::{Deck, Transition};
use zoomdeck_core::input::Key;

use crate::presenter::DomPresenter;
use crate::timeout::TimeoutQueue;

/// A mounted deck and its presenter.
pub(crate) struct Stage {
    pub(crate) deck: Deck<TimeoutQueue>,
    pub(crate) presenter: DomPresenter,
}

impl Stage {
    /// Presents `transition` if there is one. Returns whether it did.
    pub(crate) fn show(&mut self, transition: Option<Transition>) -> bool {
        match transition {
            Some(t) => {
                self.presenter.apply(self.deck.registry(), &t);
                true
            }
            None => false,
        }
    }

    fn on_key(&mut self, code: u32) -> bool {
        let outcome = self.deck.handle_key(Key::from_key_code(code));
        self.show(outcome.transition);
        outcome.suppress_default
    }

    /// Handles a click on `target`: a link, a step, or something inside one.
    fn on_click(&mut self, target: &Element) -> bool {
        let Ok(Some(hit)) = target.closest("a, step, .step") else {
            return false;
        };
        let transition = if hit.tag_name().eq_ignore_ascii_case("a") {
            match hit.get_attribute("href") {
                Some(href) => self.deck.activate_link(&href),
                None => None,
            }
        } else {
            match self
                .presenter
                .index_of(&hit)
                .and_then(|i| self.deck.registry().at(i))
            {
                Some(step) => self.deck.select(step),
                None => None,
            }
        };
        self.show(transition)
    }
}

/// Registers the document and window listeners. The closures are leaked;
/// they live as long as the page.
pub(crate) fn bind(
    window: &Window,
    document: &Document,
    stage: &Rc<RefCell<Stage>>,
) -> Result<(), JsValue> {
    let key_stage = Rc::clone(stage);
    let key_cb = Closure::wrap(Box::new(move |event: KeyboardEvent| {
        if key_stage.borrow_mut().on_key(event.key_code()) {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())?;
    key_cb.forget();

    let click_stage = Rc::clone(stage);
    let click_cb = Closure::wrap(Box::new(move |event: Event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if click_stage.borrow_mut().on_click(&target) {
            event.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    document.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;
    click_cb.forget();

    let hash_stage = Rc::clone(stage);
    let hash_window = window.clone();
    let hash_cb = Closure::wrap(Box::new(move |_event: Event| {
        let Ok(hash) = hash_window.location().hash() else {
            return;
        };
        let mut stage = hash_stage.borrow_mut();
        let transition = stage.deck.navigate_fragment(&hash);
        stage.show(transition);
    }) as Box<dyn FnMut(_)>);
    window.add_event_listener_with_callback("hashchange", hash_cb.as_ref().unchecked_ref())?;
    hash_cb.forget();

    Ok(())
}
