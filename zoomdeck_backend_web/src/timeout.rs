// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `setTimeout`-backed deferred queue.
//!
//! [`TimeoutQueue`] implements [`DeferredQueue`] for the browser: each
//! scheduled [`FragmentUpdate`] becomes a timer that writes `location.hash`
//! when it fires.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::time::Duration;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use zoomdeck_core::history::{DeferredQueue, FragmentUpdate};

// Direct global bindings instead of `web_sys::Window` methods, so scheduling
// needs no Window handle.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "setTimeout")]
    fn set_timeout(handler: &JsValue, timeout: i32) -> i32;

    #[wasm_bindgen(js_name = "clearTimeout")]
    fn clear_timeout(handle: i32);
}

/// Identifies one `setTimeout` timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeoutId(pub i32);

type TimeoutClosure = Closure<dyn FnMut()>;

/// A [`DeferredQueue`] that runs fragment rewrites on browser timers.
///
/// The JS closure of every live timer is kept here and dropped on
/// [`cancel`](DeferredQueue::cancel). A timer that already fired keeps its
/// closure until it is cancelled, which [`HistorySync`] does on the next
/// selection.
///
/// [`HistorySync`]: zoomdeck_core::history::HistorySync
#[derive(Default)]
pub struct TimeoutQueue {
    timers: Vec<(TimeoutId, TimeoutClosure)>,
}

impl core::fmt::Debug for TimeoutQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TimeoutQueue")
            .field("timers", &self.timers.len())
            .finish()
    }
}

impl TimeoutQueue {
    /// Creates a queue with no timers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeferredQueue for TimeoutQueue {
    type Handle = TimeoutId;

    fn schedule(&mut self, delay: Duration, update: FragmentUpdate) -> TimeoutId {
        let fragment = update.fragment;
        let closure = Closure::wrap(Box::new(move || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_hash(&fragment);
            }
        }) as Box<dyn FnMut()>);
        let id = TimeoutId(set_timeout(
            closure.as_ref().unchecked_ref(),
            timeout_ms(delay),
        ));
        self.timers.push((id, closure));
        id
    }

    fn cancel(&mut self, handle: TimeoutId) {
        clear_timeout(handle.0);
        self.timers.retain(|(id, _)| *id != handle);
    }
}

impl Drop for TimeoutQueue {
    fn drop(&mut self) {
        for (id, _) in &self.timers {
            clear_timeout(id.0);
        }
    }
}

/// Converts a delay to the millisecond argument of `setTimeout`, saturating.
pub(crate) fn timeout_ms(delay: Duration) -> i32 {
    i32::try_from(delay.as_millis()).unwrap_or(i32::MAX)
}
