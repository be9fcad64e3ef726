// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for host integrations.
//!
//! A backend crate provides the following pieces:
//!
//! - **Outline reader**: Builds a [`Section`](crate::outline::Section) tree
//!   from the host document, parsing per-step overrides with
//!   [`Overrides::set_attribute`](crate::outline::Overrides::set_attribute).
//!
//! - **Deferred queue**: Implements
//!   [`DeferredQueue`](crate::history::DeferredQueue) on a host timer and
//!   applies each [`FragmentUpdate`](crate::history::FragmentUpdate) when it
//!   fires.
//!
//! - **Input wiring**: Maps key presses through
//!   [`Key`](crate::input::Key) into [`Deck::handle_key`], link and step
//!   clicks into [`Deck::activate_link`] / [`Deck::select`], and fragment
//!   changes into [`Deck::navigate_fragment`].
//!
//! - **Presenter**: Implements [`Presenter`] to place steps once and then
//!   apply each [`Transition`].
//!
//! # Crate boundaries
//!
//! `zoomdeck_core` owns the outline model, layout, navigation and this
//! contract module. Backend crates depend on it and provide host glue.
//!
//! [`Deck::handle_key`]: crate::deck::Deck::handle_key
//! [`Deck::activate_link`]: crate::deck::Deck::activate_link
//! [`Deck::select`]: crate::deck::Deck::select
//! [`Deck::navigate_fragment`]: crate::deck::Deck::navigate_fragment

use crate::deck::Transition;
use crate::step::StepRegistry;

/// Applies layout and camera moves to a host presentation tree.
///
/// # Event pseudocode
///
/// ```rust,ignore
/// presenter.place(deck.registry());
/// if let Some(t) = deck.start(initial_fragment) {
///     presenter.apply(deck.registry(), &t);
/// }
///
/// fn on_key(code: u32) {
///     let out = deck.handle_key(Key::from_key_code(code));
///     if out.suppress_default { event.prevent_default(); }
///     if let Some(t) = out.transition {
///         presenter.apply(deck.registry(), &t);
///     }
/// }
/// ```
pub trait Presenter {
    /// Positions every step element at its forward transform. Called once
    /// after layout.
    fn place(&mut self, registry: &StepRegistry);

    /// Moves the active marker and the camera as described by `transition`.
    fn apply(&mut self, registry: &StepRegistry, transition: &Transition);
}
