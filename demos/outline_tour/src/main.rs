// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lays out a small outline and tours it without a browser.
//!
//! Events go to both a [`PrettyPrintSink`](zoomdeck_debug::pretty::PrettyPrintSink)
//! on stdout and a [`RecorderSink`](zoomdeck_debug::recorder::RecorderSink);
//! the recording is exported to `trace.json` at the end. Fragment rewrites
//! run on a [`ManualQueue`] whose clock advances by the transition length
//! after every move, and each rewrite is fed back as a fragment change the
//! way a browser's `hashchange` would.

use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

use zoomdeck_core::config::DeckConfig;
use zoomdeck_core::deck::{Deck, Transition};
use zoomdeck_core::history::ManualQueue;
use zoomdeck_core::input::Key;
use zoomdeck_core::outline::{Overrides, Section, Step};

use zoomdeck_debug::combine::{Shared, Tee};
use zoomdeck_debug::pretty::PrettyPrintSink;
use zoomdeck_debug::recorder::RecorderSink;

fn outline() -> Section {
    Section::new()
        .with(Step::with_id("title"))
        .with(
            Section::new()
                .with(Step::with_id("problem"))
                .with(Section::new().with(Step::new()).with(Step::new()))
                .with(Step::with_id("approach")),
        )
        .with(Step::with_id("summary").overrides(Overrides::from_attributes([
            ("rotate", "90"),
            ("z", "-500"),
            ("scale", "not-a-number"),
        ])))
}

fn main() {
    let config = DeckConfig::standard();
    let recorder = Shared::new(RecorderSink::new());
    let sink = Tee::new(
        PrettyPrintSink::new(Box::new(std::io::stdout())),
        recorder.clone(),
    );
    let mut deck = Deck::new_with_sink(&outline(), config, ManualQueue::new(), Box::new(sink));

    println!("-- placements");
    for (_, id, record) in deck.registry().iter() {
        println!("{id:>10}: {}", record.transform());
    }

    println!("-- tour");
    let transition = deck.start(Some("#/problem"));
    settle(&mut deck, transition.as_ref());

    let keys = [Key::Right, Key::Down, Key::Space, Key::Tab, Key::Right, Key::Left];
    for key in keys {
        let outcome = deck.handle_key(key);
        settle(&mut deck, outcome.transition.as_ref());
    }

    // Two quick moves: only the second rewrites the fragment.
    deck.select_next();
    let transition = deck.select_next();
    settle(&mut deck, transition.as_ref());

    let transition = deck.activate_link("#title");
    settle(&mut deck, transition.as_ref());

    // -- export ------------------------------------------------------------
    let path = "trace.json";
    let file = File::create(path).expect("failed to create trace.json");
    let mut writer = BufWriter::new(file);
    let recorded = recorder.borrow();
    zoomdeck_debug::json::export(recorded.events(), &mut writer)
        .expect("failed to write trace.json");

    println!("Wrote {path} ({} events)", recorded.events().len());
}

/// Prints the camera move, lets the animation finish, and feeds any fragment
/// rewrite back into the deck.
fn settle(deck: &mut Deck<ManualQueue>, transition: Option<&Transition>) {
    if let Some(t) = transition {
        println!(
            "   marker={} wrapper=[{}] after {:?}, canvas=[{}] after {:?}",
            t.marker,
            t.camera.wrapper.transform,
            t.camera.wrapper.delay,
            t.camera.canvas.transform,
            t.camera.canvas.delay,
        );
    }
    let duration: Duration = deck.config().transition_duration;
    for update in deck.queue_mut().advance(duration) {
        println!("   fragment -> {}", update.fragment);
        deck.navigate_fragment(&update.fragment);
    }
}
