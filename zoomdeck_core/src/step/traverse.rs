// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document-order traversal of an outline.

use alloc::vec::Vec;
use core::slice;

use crate::outline::{OutlineNode, Section, Step};

/// An iterator over every step below a section, in document (pre-)order.
///
/// Created by [`Steps::new`].
#[derive(Debug)]
pub struct Steps<'a> {
    stack: Vec<slice::Iter<'a, OutlineNode>>,
}

impl<'a> Steps<'a> {
    /// Starts a traversal at `root`.
    #[must_use]
    pub fn new(root: &'a Section) -> Self {
        let mut stack = Vec::new();
        stack.push(root.children.iter());
        Self { stack }
    }
}

impl<'a> Iterator for Steps<'a> {
    type Item = &'a Step;

    fn next(&mut self) -> Option<&'a Step> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(OutlineNode::Step(step)) => return Some(step),
                Some(OutlineNode::Section(section)) => self.stack.push(section.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn visits_in_document_order() {
        let root = Section::new()
            .with(Step::with_id("a"))
            .with(
                Section::new()
                    .with(Step::with_id("b"))
                    .with(Section::new().with(Step::with_id("c"))),
            )
            .with(Section::new())
            .with(Step::with_id("d"));
        let ids: Vec<_> = Steps::new(&root)
            .map(|s| s.id.as_deref().unwrap_or(""))
            .collect();
        assert_eq!(ids, ["a", "b", "c", "d"]);
    }

    #[test]
    fn empty_outline() {
        assert_eq!(Steps::new(&Section::new()).count(), 0);
    }
}
