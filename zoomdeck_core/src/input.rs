// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic input mapping.
//!
//! Hosts translate their native key events into [`Key`] and feed them to
//! [`Deck::handle_key`](crate::deck::Deck::handle_key). Pointer input needs no
//! mapping: hosts resolve the clicked step or link themselves and call
//! [`Deck::select`](crate::deck::Deck::select) or
//! [`Deck::activate_link`](crate::deck::Deck::activate_link).

/// A key the deck may react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Tab.
    Tab,
    /// Space bar.
    Space,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Left arrow.
    Left,
    /// Up arrow.
    Up,
    /// Right arrow.
    Right,
    /// Down arrow.
    Down,
    /// Anything else.
    Other,
}

impl Key {
    /// Maps a DOM `keyCode` value.
    #[must_use]
    pub const fn from_key_code(code: u32) -> Self {
        match code {
            9 => Self::Tab,
            32 => Self::Space,
            33 => Self::PageUp,
            34 => Self::PageDown,
            37 => Self::Left,
            38 => Self::Up,
            39 => Self::Right,
            40 => Self::Down,
            _ => Self::Other,
        }
    }

    /// The navigation this key triggers, if any.
    #[must_use]
    pub const fn command(self) -> Option<NavCommand> {
        match self {
            Self::PageUp | Self::Left | Self::Up => Some(NavCommand::Prev),
            Self::Tab | Self::Space | Self::PageDown | Self::Right | Self::Down => {
                Some(NavCommand::Next)
            }
            Self::Other => None,
        }
    }
}

/// A relative navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Go to the previous step, wrapping to the last.
    Prev,
    /// Go to the next step, wrapping to the first.
    Next,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_codes() {
        let prev = [33, 37, 38];
        let next = [9, 32, 34, 39, 40];
        for code in prev {
            assert_eq!(Key::from_key_code(code).command(), Some(NavCommand::Prev), "{code}");
        }
        for code in next {
            assert_eq!(Key::from_key_code(code).command(), Some(NavCommand::Next), "{code}");
        }
        for code in [13, 27, 35, 36, 41, 65] {
            assert_eq!(Key::from_key_code(code), Key::Other, "{code}");
            assert_eq!(Key::from_key_code(code).command(), None);
        }
    }
}
