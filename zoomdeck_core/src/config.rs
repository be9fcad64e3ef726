// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck configuration.

use core::time::Duration;

use kurbo::Size;

/// Tunables shared by layout, camera sequencing and history sync.
///
/// Passed to [`Deck::new`](crate::deck::Deck::new). Start from
/// [`DeckConfig::standard`] and adjust fields as needed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckConfig {
    /// Length units per grid column (`width`) and row (`height`). A step's
    /// default translation is its grid cell multiplied by this size.
    pub cell: Size,
    /// Base perspective distance in px. The camera wrapper receives
    /// `perspective × target scale` so distortion looks the same at every
    /// zoom level.
    pub perspective: f64,
    /// Delay separating the two animation phases. When zooming in, the
    /// wrapper (scale) waits this long; when zooming out, the canvas
    /// (rotation/translation) does.
    pub phase_delay: Duration,
    /// Length of each transition the presenter applies.
    pub transition_duration: Duration,
    /// How long after a selection the navigation fragment is rewritten. Kept
    /// at the full animation length so the rewrite never interrupts it.
    pub history_delay: Duration,
}

impl DeckConfig {
    /// The standard configuration: 2000 × 1000 cells, 1000 px perspective,
    /// 500 ms phase stagger, 1 s transitions, 1 s history debounce.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            cell: Size::new(2000.0, 1000.0),
            perspective: 1000.0,
            phase_delay: Duration::from_millis(500),
            transition_duration: Duration::from_millis(1000),
            history_delay: Duration::from_millis(1000),
        }
    }
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self::standard()
    }
}
