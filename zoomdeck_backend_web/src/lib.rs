// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for zoomdeck.
//!
//! This crate connects [`zoomdeck_core`] to the DOM:
//!
//! - [`supported`]: capability check (desktop user agent, CSS perspective)
//! - [`read_outline`]: `<section>` / `<step>` markup to an outline
//! - [`DomPresenter`]: inline-style placement and camera moves
//! - [`TimeoutQueue`]: `setTimeout`-backed fragment rewrites
//! - [`mount`]: all of the above plus keyboard, click and `hashchange`
//!   listeners

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

mod dom;
mod events;
mod presenter;
mod reader;
mod timeout;

pub use dom::{NOT_SUPPORTED_CLASS, supported};
pub use presenter::DomPresenter;
pub use reader::{read_outline, write_back_ids};
pub use timeout::{TimeoutId, TimeoutQueue};
pub use zoomdeck_core::backend::Presenter;

use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;

use zoomdeck_core::config::DeckConfig;
use zoomdeck_core::deck::Deck;

use events::Stage;

/// Turns the element with id `root_id` into a running deck.
///
/// Returns `Ok(false)` if the browser is not [`supported`]; the root then
/// carries [`NOT_SUPPORTED_CLASS`] and the document is left as it was.
/// Otherwise restructures the document, lays out and places every step,
/// binds input, and selects the step named by the current fragment (or the
/// first step).
pub fn mount(root_id: &str, config: DeckConfig) -> Result<bool, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let root: web_sys::HtmlElement = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str("deck root not found"))?
        .unchecked_into();

    if !supported(&window)? {
        root.set_class_name(NOT_SUPPORTED_CLASS);
        return Ok(false);
    }
    root.set_class_name("");

    let canvas = dom::restructure(&document, &root, &config)?;
    let (outline, elements) = read_outline(&canvas);
    let deck = Deck::new(&outline, config, TimeoutQueue::new());
    write_back_ids(deck.registry(), &elements);

    let mut presenter = DomPresenter::new(window.clone(), root, canvas, elements);
    presenter.place(deck.registry());

    let stage = Rc::new(RefCell::new(Stage { deck, presenter }));
    events::bind(&window, &document, &stage)?;

    let hash = window.location().hash()?;
    let mut stage = stage.borrow_mut();
    let fragment = (!hash.is_empty()).then_some(hash.as_str());
    let transition = stage.deck.start(fragment);
    stage.show(transition);
    Ok(true)
}
