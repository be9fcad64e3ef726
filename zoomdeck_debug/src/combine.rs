// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sink combinators.
//!
//! A [`Deck`](zoomdeck_core::deck::Deck) owns exactly one boxed sink. [`Tee`]
//! lets that one sink feed two, and [`Shared`] lets the caller keep reading a
//! sink after boxing a clone of the handle into the deck.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use zoomdeck_core::trace::{
    FragmentEvent, HistoryEvent, LayoutEvent, RejectEvent, SelectEvent, StepPlacedEvent,
    TraceSink,
};

/// Forwards every event to `A`, then to `B`.
#[derive(Debug, Default)]
pub struct Tee<A, B> {
    /// First receiver.
    pub first: A,
    /// Second receiver.
    pub second: B,
}

impl<A, B> Tee<A, B> {
    /// Combines two sinks.
    #[must_use]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits the tee back into its sinks.
    #[must_use]
    pub fn into_inner(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: TraceSink, B: TraceSink> TraceSink for Tee<A, B> {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.first.on_layout(e);
        self.second.on_layout(e);
    }

    fn on_step_placed(&mut self, e: &StepPlacedEvent) {
        self.first.on_step_placed(e);
        self.second.on_step_placed(e);
    }

    fn on_select(&mut self, e: &SelectEvent) {
        self.first.on_select(e);
        self.second.on_select(e);
    }

    fn on_select_rejected(&mut self, e: &RejectEvent) {
        self.first.on_select_rejected(e);
        self.second.on_select_rejected(e);
    }

    fn on_history_scheduled(&mut self, e: &HistoryEvent) {
        self.first.on_history_scheduled(e);
        self.second.on_history_scheduled(e);
    }

    fn on_fragment_resolved(&mut self, e: &FragmentEvent) {
        self.first.on_fragment_resolved(e);
        self.second.on_fragment_resolved(e);
    }
}

/// A cloneable handle to a sink.
///
/// Clones share the same sink. Events must not arrive while a
/// [`borrow`](Self::borrow) is held.
#[derive(Debug, Default)]
pub struct Shared<S> {
    inner: Rc<RefCell<S>>,
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> Shared<S> {
    /// Wraps `sink`.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            inner: Rc::new(RefCell::new(sink)),
        }
    }

    /// Borrows the sink.
    #[must_use]
    pub fn borrow(&self) -> Ref<'_, S> {
        self.inner.borrow()
    }

    /// Mutably borrows the sink.
    #[must_use]
    pub fn borrow_mut(&self) -> RefMut<'_, S> {
        self.inner.borrow_mut()
    }
}

impl<S: TraceSink> TraceSink for Shared<S> {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.inner.borrow_mut().on_layout(e);
    }

    fn on_step_placed(&mut self, e: &StepPlacedEvent) {
        self.inner.borrow_mut().on_step_placed(e);
    }

    fn on_select(&mut self, e: &SelectEvent) {
        self.inner.borrow_mut().on_select(e);
    }

    fn on_select_rejected(&mut self, e: &RejectEvent) {
        self.inner.borrow_mut().on_select_rejected(e);
    }

    fn on_history_scheduled(&mut self, e: &HistoryEvent) {
        self.inner.borrow_mut().on_history_scheduled(e);
    }

    fn on_fragment_resolved(&mut self, e: &FragmentEvent) {
        self.inner.borrow_mut().on_fragment_resolved(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;

    #[test]
    fn tee_feeds_both() {
        let mut tee = Tee::new(RecorderSink::new(), RecorderSink::new());
        tee.on_layout(&LayoutEvent {
            steps: 2,
            root_height: 1,
        });
        let (a, b) = tee.into_inner();
        assert_eq!(a.events(), b.events());
        assert_eq!(a.events().len(), 1);
    }

    #[test]
    fn shared_clones_see_the_same_sink() {
        let shared = Shared::new(RecorderSink::new());
        let mut handle = shared.clone();
        handle.on_fragment_resolved(&FragmentEvent {
            resolved: None,
            fell_back: true,
        });
        assert_eq!(shared.borrow().events().len(), 1);
    }
}
