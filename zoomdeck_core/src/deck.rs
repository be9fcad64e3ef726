// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The navigation state machine.
//!
//! A [`Deck`] is either idle (no active step, only before the first
//! selection) or has exactly one active step. Every state change goes
//! through [`Deck::select`]; the prev/next, key, link and fragment entry
//! points all resolve a target and then call it.
//!
//! A successful selection produces a [`Transition`] for the
//! [`Presenter`](crate::backend::Presenter) and schedules a debounced
//! fragment rewrite on the deck's [`DeferredQueue`].

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::camera::CameraUpdate;
use crate::compose::Placement;
use crate::config::DeckConfig;
use crate::history::{DeferredQueue, HistorySync, step_id_from_fragment};
use crate::input::{Key, NavCommand};
use crate::outline::Section;
use crate::step::{StepId, StepRegistry};
use crate::trace::{
    FragmentEvent, HistoryEvent, LayoutEvent, RejectEvent, RejectReason, SelectEvent,
    StepPlacedEvent, TraceSink, Tracer,
};

/// The result of a successful [`Deck::select`].
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// The step that was active before, if any. Loses its active marker.
    pub previous: Option<StepId>,
    /// The newly active step. Gains the active marker.
    pub target: StepId,
    /// The presentation-wide marker, `step-<id>`.
    pub marker: String,
    /// The camera move.
    pub camera: CameraUpdate,
}

/// What a key press did.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyOutcome {
    /// Whether the host should suppress the key's default action. Set for
    /// every navigation key, even when the selection was a no-op.
    pub suppress_default: bool,
    /// The resulting transition, if the selection happened.
    pub transition: Option<Transition>,
}

/// A laid-out outline plus the navigation state over it.
pub struct Deck<Q: DeferredQueue> {
    registry: StepRegistry,
    config: DeckConfig,
    active: Option<StepId>,
    current: Placement,
    marker: Option<String>,
    history: HistorySync<Q::Handle>,
    queue: Q,
    sink: Option<Box<dyn TraceSink>>,
}

impl<Q: DeferredQueue> fmt::Debug for Deck<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("steps", &self.registry.len())
            .field("active", &self.active)
            .field("current", &self.current)
            .field("marker", &self.marker)
            .field("pending", &self.history.pending())
            .finish_non_exhaustive()
    }
}

impl<Q: DeferredQueue> Deck<Q> {
    /// Lays out `root` and creates an idle deck over it.
    #[must_use]
    pub fn new(root: &Section, config: DeckConfig, queue: Q) -> Self {
        Self::build(root, config, queue, None)
    }

    /// Like [`new`](Self::new), but reports layout and navigation to `sink`.
    #[must_use]
    pub fn new_with_sink(
        root: &Section,
        config: DeckConfig,
        queue: Q,
        sink: Box<dyn TraceSink>,
    ) -> Self {
        Self::build(root, config, queue, Some(sink))
    }

    fn build(
        root: &Section,
        config: DeckConfig,
        queue: Q,
        sink: Option<Box<dyn TraceSink>>,
    ) -> Self {
        let registry = StepRegistry::build(root, &config);
        let mut deck = Self {
            history: HistorySync::new(config.history_delay),
            registry,
            config,
            active: None,
            current: Placement::IDENTITY,
            marker: None,
            queue,
            sink,
        };
        deck.trace_layout();
        deck
    }

    fn trace_layout(&mut self) {
        let mut tracer = tracer_for(&mut self.sink);
        tracer.layout(&LayoutEvent {
            steps: self.registry.len().try_into().unwrap_or(u32::MAX),
            root_height: self.registry.root_height(),
        });
        for (step, _, record) in self.registry.iter() {
            tracer.step_placed(&StepPlacedEvent {
                step,
                grid_x: record.grid.x,
                grid_y: record.grid.y,
                scale: record.placement.scale,
            });
        }
    }

    fn reject(&mut self, target: Option<StepId>, reason: RejectReason) {
        tracer_for(&mut self.sink).select_rejected(&RejectEvent { target, reason });
    }

    /// The registered steps and their layout.
    #[must_use]
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// The configuration the deck was built with.
    #[must_use]
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// The active step, or `None` before the first selection.
    #[must_use]
    pub fn active(&self) -> Option<StepId> {
        self.active
    }

    /// Returns `true` if `step` is the active step.
    #[must_use]
    pub fn is_active(&self, step: StepId) -> bool {
        self.active == Some(step)
    }

    /// The camera placement last applied.
    #[must_use]
    pub fn current(&self) -> &Placement {
        &self.current
    }

    /// The presentation-wide marker (`step-<id>`) of the active step.
    #[must_use]
    pub fn marker(&self) -> Option<&str> {
        self.marker.as_deref()
    }

    /// The queue fragment rewrites are scheduled on.
    #[must_use]
    pub fn queue(&self) -> &Q {
        &self.queue
    }

    /// Mutable access to the queue, e.g. to advance a virtual clock.
    pub fn queue_mut(&mut self) -> &mut Q {
        &mut self.queue
    }

    /// Makes `target` the active step.
    ///
    /// Returns `None` and changes nothing if `target` does not belong to this
    /// deck or is already active. Otherwise moves the camera to the inverse of
    /// the step's placement, updates the marker, and replaces any pending
    /// fragment rewrite with one for `target`.
    pub fn select(&mut self, target: StepId) -> Option<Transition> {
        let Some(record) = self.registry.record(target) else {
            self.reject(Some(target), RejectReason::Unknown);
            return None;
        };
        if self.is_active(target) {
            self.reject(Some(target), RejectReason::AlreadyActive);
            return None;
        }

        let camera_target = record.placement.inverse();
        let camera = CameraUpdate::plan(&self.current, &camera_target, &self.config);
        let id = String::from(self.registry.id(target).unwrap_or_default());
        let marker = format!("step-{id}");

        let previous = self.active.replace(target);
        self.current = camera_target;
        self.marker = Some(marker.clone());
        let replaced_pending = self.history.schedule(&mut self.queue, &id);

        let mut tracer = tracer_for(&mut self.sink);
        tracer.select(&SelectEvent {
            from: previous,
            to: target,
            zooming_in: camera.zooming_in,
            scale: camera_target.scale,
        });
        tracer.history_scheduled(&HistoryEvent {
            step: target,
            replaced_pending,
        });

        Some(Transition {
            previous,
            target,
            marker,
            camera,
        })
    }

    /// Selects the step with string identifier `id`.
    pub fn select_id(&mut self, id: &str) -> Option<Transition> {
        match self.registry.lookup(id) {
            Some(step) => self.select(step),
            None => {
                self.reject(None, RejectReason::Unknown);
                None
            }
        }
    }

    /// Selects the step before the active one, wrapping to the last. With no
    /// active step, selects the last.
    pub fn select_prev(&mut self) -> Option<Transition> {
        let target = self.registry.prev(self.active);
        self.select_opt(target)
    }

    /// Selects the step after the active one, wrapping to the first. With no
    /// active step, selects the first.
    pub fn select_next(&mut self) -> Option<Transition> {
        let target = self.registry.next(self.active);
        self.select_opt(target)
    }

    fn select_opt(&mut self, target: Option<StepId>) -> Option<Transition> {
        match target {
            Some(step) => self.select(step),
            None => {
                self.reject(None, RejectReason::Unknown);
                None
            }
        }
    }

    /// Runs the navigation bound to `key`, if any.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        let transition = match key.command() {
            Some(NavCommand::Prev) => self.select_prev(),
            Some(NavCommand::Next) => self.select_next(),
            None => {
                return KeyOutcome {
                    suppress_default: false,
                    transition: None,
                };
            }
        };
        KeyOutcome {
            suppress_default: true,
            transition,
        }
    }

    /// Follows an in-document link.
    ///
    /// `href` must start with `#`; both `#id` and `#/id` are accepted. The
    /// host should suppress the link's default navigation only when this
    /// returns `Some`.
    pub fn activate_link(&mut self, href: &str) -> Option<Transition> {
        if !href.starts_with('#') {
            return None;
        }
        self.select_id(&step_id_from_fragment(href))
    }

    /// Resolves a navigation fragment to a step, falling back to the first
    /// step when it names none.
    pub fn resolve_fragment(&mut self, fragment: &str) -> Option<StepId> {
        let named = self.registry.lookup(&step_id_from_fragment(fragment));
        let fell_back = named.is_none();
        let resolved = named.or_else(|| self.registry.first());
        tracer_for(&mut self.sink).fragment_resolved(&FragmentEvent {
            resolved,
            fell_back,
        });
        resolved
    }

    /// Handles an external fragment change: resolves it and selects the
    /// result. Navigating to the fragment the deck itself just wrote is a
    /// no-op, because that step is already active.
    pub fn navigate_fragment(&mut self, fragment: &str) -> Option<Transition> {
        let target = self.resolve_fragment(fragment);
        self.select_opt(target)
    }

    /// Performs the initial selection from the startup fragment, if any.
    pub fn start(&mut self, fragment: Option<&str>) -> Option<Transition> {
        self.navigate_fragment(fragment.unwrap_or_default())
    }
}

fn tracer_for(sink: &mut Option<Box<dyn TraceSink>>) -> Tracer<'_> {
    match sink.as_deref_mut() {
        Some(sink) => Tracer::new(sink),
        None => Tracer::none(),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::time::Duration;

    use super::*;
    use crate::compose::{RotationOrder, compose};
    use crate::history::{FragmentUpdate, ManualQueue};
    use crate::outline::{Overrides, Step};
    use crate::transform::Transform3d;

    /// The three-level outline: A, [C, [E], D].
    fn worked_example() -> Section {
        Section::new()
            .with(Step::with_id("a"))
            .with(
                Section::new()
                    .with(Step::with_id("c"))
                    .with(Section::new().with(Step::with_id("e")))
                    .with(Step::with_id("d")),
            )
    }

    fn deck(root: &Section) -> Deck<ManualQueue> {
        Deck::new(root, DeckConfig::standard(), ManualQueue::new())
    }

    fn id_of(deck: &Deck<ManualQueue>, step: StepId) -> &str {
        deck.registry().id(step).unwrap()
    }

    #[test]
    fn select_then_reselect_is_a_no_op() {
        let root = worked_example();
        let mut deck = deck(&root);
        let c = deck.registry().lookup("c").unwrap();

        let t = deck.select(c).expect("first selection succeeds");
        assert_eq!(t.previous, None);
        assert_eq!(t.marker, "step-c");
        let current = *deck.current();

        assert!(deck.select(c).is_none());
        assert_eq!(deck.active(), Some(c));
        assert_eq!(*deck.current(), current);
        assert_eq!(deck.marker(), Some("step-c"));
    }

    #[test]
    fn unknown_target_changes_nothing() {
        let root = worked_example();
        let mut deck = deck(&root);
        assert!(deck.select(StepId(99)).is_none());
        assert!(deck.select_id("missing").is_none());
        assert_eq!(deck.active(), None);
        assert_eq!(*deck.current(), Placement::IDENTITY);
        assert!(deck.queue().pending().is_empty());
    }

    #[test]
    fn next_cycles_back_to_start() {
        let root = worked_example();
        let mut deck = deck(&root);
        let n = deck.registry().len();
        let start = deck.registry().at(2).unwrap();
        deck.select(start);
        for _ in 0..n {
            assert!(deck.select_next().is_some());
        }
        assert_eq!(deck.active(), Some(start));
        for _ in 0..n {
            assert!(deck.select_prev().is_some());
        }
        assert_eq!(deck.active(), Some(start));
    }

    #[test]
    fn idle_deck_navigates_to_the_ends() {
        let root = worked_example();
        let mut next = deck(&root);
        let t = next.select_next().unwrap();
        assert_eq!(id_of(&next, t.target), "a");

        let mut prev = deck(&root);
        let t = prev.select_prev().unwrap();
        assert_eq!(id_of(&prev, t.target), "d");
    }

    #[test]
    fn camera_is_the_inverse_of_the_step() {
        let root = Section::new().with(Step::with_id("tilted").overrides(Overrides {
            x: Some(-300.0),
            y: Some(120.0),
            z: Some(40.0),
            rotate_x: Some(10.0),
            rotate_y: Some(-20.0),
            rotate_z: Some(30.0),
            scale: Some(3.0),
            ..Overrides::default()
        }));
        let mut deck = deck(&root);
        let step = deck.registry().first().unwrap();
        let placement = deck.registry().record(step).unwrap().placement;
        let t = deck.select(step).unwrap();

        assert_eq!(t.camera.target, placement.inverse());
        assert!(*deck.current() == placement.inverse());

        let forward = compose(&placement, RotationOrder::Forward).to_matrix(kurbo::Size::ZERO);
        let camera = t.camera.wrapper.transform.to_matrix(kurbo::Size::ZERO)
            * t.camera.canvas.transform.to_matrix(kurbo::Size::ZERO);
        let combined = camera * forward;
        assert!(combined.approx_eq(&Transform3d::IDENTITY), "{combined:?}");
    }

    #[test]
    fn phases_follow_zoom_direction() {
        let root = worked_example();
        let mut deck = deck(&root);
        let a = deck.registry().lookup("a").unwrap();
        let e = deck.registry().lookup("e").unwrap();
        let c = deck.registry().lookup("c").unwrap();

        let d = deck.registry().lookup("d").unwrap();

        // Idle camera sits at scale 1; `a` has scale 3, so camera scale 1/3.
        let t = deck.select(a).unwrap();
        assert!(!t.camera.zooming_in);
        assert_eq!(t.camera.wrapper.delay, Duration::ZERO);
        assert_eq!(t.camera.canvas.delay, Duration::from_millis(500));

        // `a` (scale 3) to `e` (scale 1): camera scale grows.
        let t = deck.select(e).unwrap();
        assert!(t.camera.zooming_in);
        assert_eq!(t.camera.wrapper.delay, Duration::from_millis(500));
        assert_eq!(t.camera.canvas.delay, Duration::ZERO);

        // `e` (scale 1) back out to `c` (scale 2).
        let t = deck.select(c).unwrap();
        assert!(!t.camera.zooming_in);
        assert_eq!(t.previous, Some(e));

        // `c` to `d`: both scale 2, equal counts as zooming in.
        let t = deck.select(d).unwrap();
        assert!(t.camera.zooming_in);
    }

    #[test]
    fn rapid_selects_debounce_to_one_update() {
        let root = worked_example();
        let mut deck = deck(&root);
        deck.select_next();
        deck.queue_mut().advance(Duration::from_millis(300));
        deck.select_next();

        assert_eq!(deck.queue().pending().len(), 1);
        let fired = deck.queue_mut().advance(Duration::from_millis(1000));
        assert_eq!(fired, [FragmentUpdate::for_step("c")]);
    }

    #[test]
    fn fragment_rewrite_waits_for_the_animation() {
        let root = worked_example();
        let mut deck = deck(&root);
        deck.select_next();
        assert!(deck.queue_mut().advance(Duration::from_millis(999)).is_empty());
        let fired = deck.queue_mut().advance(Duration::from_millis(1));
        assert_eq!(fired[0].fragment, "#/a");
    }

    #[test]
    fn fragments_resolve_in_both_forms() {
        let root = worked_example();
        let mut deck = deck(&root);
        let d = deck.registry().lookup("d");
        assert_eq!(deck.resolve_fragment("#/d"), d);
        assert_eq!(deck.resolve_fragment("#d"), d);
        assert_eq!(deck.resolve_fragment("#/nope"), deck.registry().first());
        assert_eq!(deck.resolve_fragment(""), deck.registry().first());
    }

    #[test]
    fn own_fragment_echo_is_a_no_op() {
        let root = worked_example();
        let mut deck = deck(&root);
        let t = deck.start(Some("#/e")).unwrap();
        assert_eq!(id_of(&deck, t.target), "e");
        let fired = deck.queue_mut().advance(Duration::from_secs(1));
        assert!(deck.navigate_fragment(&fired[0].fragment).is_none());
        assert!(deck.queue().pending().is_empty());
    }

    #[test]
    fn encoded_echo_keeps_non_ascii_step_active() {
        let root = Section::new()
            .with(Step::with_id("intro"))
            .with(Step::with_id("café"));
        let mut deck = deck(&root);
        deck.start(None);
        deck.select_next();
        let cafe = deck.registry().lookup("café");
        assert_eq!(deck.active(), cafe);

        let fired = deck.queue_mut().advance(Duration::from_secs(1));
        assert_eq!(fired, [FragmentUpdate::for_step("café")]);
        // Browsers hand the fragment back percent-encoded.
        assert!(deck.navigate_fragment("#/caf%C3%A9").is_none());
        assert_eq!(deck.active(), cafe, "echo must not fall back to the first step");
        assert!(deck.activate_link("#caf%C3%A9").is_none());
    }

    #[test]
    fn start_without_fragment_selects_first() {
        let root = worked_example();
        let mut deck = deck(&root);
        let t = deck.start(None).unwrap();
        assert_eq!(Some(t.target), deck.registry().first());
    }

    #[test]
    fn empty_deck_ignores_everything() {
        let mut deck = deck(&Section::new());
        assert!(deck.start(None).is_none());
        assert!(deck.select_next().is_none());
        assert!(deck.select_prev().is_none());
        assert!(deck.activate_link("#/x").is_none());
        let out = deck.handle_key(Key::Right);
        assert!(out.suppress_default);
        assert!(out.transition.is_none());
        assert_eq!(deck.active(), None);
        assert_eq!(deck.marker(), None);
    }

    #[test]
    fn navigation_keys_always_suppress() {
        let root = Section::new().with(Step::with_id("only"));
        let mut deck = deck(&root);
        assert!(deck.handle_key(Key::Space).transition.is_some());
        // Single step: next wraps onto the active step.
        let out = deck.handle_key(Key::Space);
        assert!(out.suppress_default);
        assert!(out.transition.is_none());

        let out = deck.handle_key(Key::Other);
        assert!(!out.suppress_default);
    }

    #[test]
    fn links_select_named_steps() {
        let root = worked_example();
        let mut deck = deck(&root);
        let t = deck.activate_link("#/d").unwrap();
        assert_eq!(id_of(&deck, t.target), "d");
        assert!(deck.activate_link("#d").is_none(), "already active");
        assert!(deck.activate_link("https://example.com/#a").is_none());
        assert!(deck.activate_link("#missing").is_none());
        assert!(deck.activate_link("#a").is_some());
    }

    #[test]
    fn marker_tracks_auto_ids() {
        let root = Section::new().with(Step::new()).with(Step::new());
        let mut deck = deck(&root);
        let steps: Vec<_> = deck.registry().iter().map(|(s, _, _)| s).collect();
        let t = deck.select(steps[1]).unwrap();
        assert_eq!(t.marker, "step-step-2");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn sink_sees_layout_and_navigation() {
        use alloc::rc::Rc;
        use core::cell::RefCell;

        #[derive(Default)]
        struct Counts {
            placed: u32,
            selected: u32,
            rejected: Vec<RejectReason>,
            fell_back: u32,
        }
        struct Probe(Rc<RefCell<Counts>>);
        impl TraceSink for Probe {
            fn on_step_placed(&mut self, _: &StepPlacedEvent) {
                self.0.borrow_mut().placed += 1;
            }
            fn on_select(&mut self, _: &SelectEvent) {
                self.0.borrow_mut().selected += 1;
            }
            fn on_select_rejected(&mut self, e: &RejectEvent) {
                self.0.borrow_mut().rejected.push(e.reason);
            }
            fn on_fragment_resolved(&mut self, e: &FragmentEvent) {
                if e.fell_back {
                    self.0.borrow_mut().fell_back += 1;
                }
            }
        }

        let counts = Rc::new(RefCell::new(Counts::default()));
        let root = worked_example();
        let mut deck = Deck::new_with_sink(
            &root,
            DeckConfig::standard(),
            ManualQueue::new(),
            Box::new(Probe(counts.clone())),
        );
        deck.start(None);
        deck.navigate_fragment("#/a");
        deck.select(StepId(42));

        let counts = counts.borrow();
        assert_eq!(counts.placed, 4);
        assert_eq!(counts.selected, 1);
        assert_eq!(
            counts.rejected,
            [RejectReason::AlreadyActive, RejectReason::Unknown]
        );
        assert_eq!(counts.fell_back, 1);
    }
}
