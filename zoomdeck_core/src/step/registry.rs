// Copyright 2026 the Zoomdeck Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered step registry.

use alloc::collections::{BTreeMap, BTreeSet};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::config::DeckConfig;
use crate::outline::Section;

use super::id::StepId;
use super::layout::{self, LayoutRecord};
use super::traverse::Steps;

/// All steps of one outline, in document order, with their identifiers and
/// layout records.
///
/// Built once by [`StepRegistry::build`] and never mutated afterwards.
#[derive(Debug)]
pub struct StepRegistry {
    ids: Vec<String>,
    records: Vec<LayoutRecord>,
    by_id: BTreeMap<String, StepId>,
    root_height: u32,
}

impl StepRegistry {
    /// Registers and lays out every step below `root`.
    ///
    /// Steps without an identifier (or with an empty one) are named `step-N`,
    /// N being their 1-based document position. If that name is already in
    /// use, N counts upwards until a free name is found. Authored duplicates
    /// are kept as written; [`lookup`](Self::lookup) resolves them to the
    /// first in document order.
    #[must_use]
    pub fn build(root: &Section, config: &DeckConfig) -> Self {
        let authored: Vec<Option<&str>> = Steps::new(root)
            .map(|s| s.id.as_deref().filter(|id| !id.is_empty()))
            .collect();
        let mut taken: BTreeSet<String> = authored.iter().flatten().map(|&id| id.into()).collect();

        let mut auto = Vec::new();
        for (pos, id) in authored.iter().enumerate() {
            if id.is_some() {
                continue;
            }
            let mut n = pos + 1;
            let mut candidate = format!("step-{n}");
            while taken.contains(&candidate) {
                n += 1;
                candidate = format!("step-{n}");
            }
            taken.insert(candidate.clone());
            auto.push((pos, candidate));
        }

        let mut ids: Vec<String> = authored
            .iter()
            .map(|id| id.map(String::from).unwrap_or_default())
            .collect();
        for (pos, name) in auto {
            ids[pos] = name;
        }

        let mut by_id = BTreeMap::new();
        for (pos, id) in ids.iter().enumerate() {
            by_id.entry(id.clone()).or_insert(StepId(slot_to_u32(pos)));
        }

        let (records, root_height) = layout::assign(root, config);

        Self {
            ids,
            records,
            by_id,
            root_height,
        }
    }

    /// Number of registered steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if the outline contained no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Height of the outline root (the default scale of its direct steps).
    #[must_use]
    pub fn root_height(&self) -> u32 {
        self.root_height
    }

    /// Returns the handle for the step at `index` in document order.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<StepId> {
        (index < self.ids.len()).then(|| StepId(slot_to_u32(index)))
    }

    /// Returns the string identifier of `id`.
    #[must_use]
    pub fn id(&self, id: StepId) -> Option<&str> {
        self.ids.get(id.slot()).map(String::as_str)
    }

    /// Returns the layout record of `id`.
    #[must_use]
    pub fn record(&self, id: StepId) -> Option<&LayoutRecord> {
        self.records.get(id.slot())
    }

    /// Resolves a string identifier to a step.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<StepId> {
        self.by_id.get(id).copied()
    }

    /// The first step in document order.
    #[must_use]
    pub fn first(&self) -> Option<StepId> {
        self.at(0)
    }

    /// The last step in document order.
    #[must_use]
    pub fn last(&self) -> Option<StepId> {
        self.len().checked_sub(1).and_then(|i| self.at(i))
    }

    /// The step after `from`, wrapping to the first. With no `from`, the
    /// first step.
    #[must_use]
    pub fn next(&self, from: Option<StepId>) -> Option<StepId> {
        match from {
            Some(id) if id.slot() + 1 < self.len() => self.at(id.slot() + 1),
            _ => self.first(),
        }
    }

    /// The step before `from`, wrapping to the last. With no `from`, the last
    /// step.
    #[must_use]
    pub fn prev(&self, from: Option<StepId>) -> Option<StepId> {
        match from {
            Some(id) if id.slot() > 0 && id.slot() < self.len() => self.at(id.slot() - 1),
            _ => self.last(),
        }
    }

    /// Iterates over all steps in document order.
    pub fn iter(&self) -> impl Iterator<Item = (StepId, &str, &LayoutRecord)> + '_ {
        self.ids
            .iter()
            .zip(&self.records)
            .enumerate()
            .map(|(i, (id, rec))| (StepId(slot_to_u32(i)), id.as_str(), rec))
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "outlines are author-sized; step counts fit in u32"
)]
fn slot_to_u32(slot: usize) -> u32 {
    slot as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::Step;

    fn ids(reg: &StepRegistry) -> Vec<&str> {
        reg.iter().map(|(_, id, _)| id).collect()
    }

    #[test]
    fn auto_ids_follow_document_position() {
        let root = Section::new()
            .with(Step::new())
            .with(Step::with_id("intro"))
            .with(Section::new().with(Step::new()));
        let reg = StepRegistry::build(&root, &DeckConfig::standard());
        assert_eq!(ids(&reg), ["step-1", "intro", "step-3"]);
        assert_eq!(reg.lookup("step-3"), reg.at(2));
    }

    #[test]
    fn empty_ids_count_as_missing() {
        let root = Section::new().with(Step::with_id(""));
        let reg = StepRegistry::build(&root, &DeckConfig::standard());
        assert_eq!(ids(&reg), ["step-1"]);
    }

    #[test]
    fn auto_ids_skip_authored_names() {
        let root = Section::new()
            .with(Step::new())
            .with(Step::with_id("step-1"))
            .with(Step::with_id("step-2"))
            .with(Step::new());
        let reg = StepRegistry::build(&root, &DeckConfig::standard());
        assert_eq!(ids(&reg), ["step-3", "step-1", "step-2", "step-4"]);
    }

    #[test]
    fn auto_ids_are_unique() {
        let root = Section::new()
            .with(Step::with_id("step-2"))
            .with(Step::new())
            .with(Step::with_id("step-3"))
            .with(Step::new())
            .with(Step::new());
        let reg = StepRegistry::build(&root, &DeckConfig::standard());
        let all = ids(&reg);
        let unique: BTreeSet<&str> = all.iter().copied().collect();
        assert_eq!(unique.len(), all.len(), "ids: {all:?}");
        assert!(all.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn duplicate_authored_ids_resolve_to_first() {
        let root = Section::new()
            .with(Step::with_id("dup"))
            .with(Step::with_id("dup"));
        let reg = StepRegistry::build(&root, &DeckConfig::standard());
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.lookup("dup"), reg.first());
        assert_eq!(reg.id(reg.at(1).unwrap()), Some("dup"));
    }

    #[test]
    fn cyclic_neighbours() {
        let root = Section::new()
            .with(Step::new())
            .with(Step::new())
            .with(Step::new());
        let reg = StepRegistry::build(&root, &DeckConfig::standard());
        let (a, b, c) = (reg.at(0), reg.at(1), reg.at(2));
        assert_eq!(reg.next(a), b);
        assert_eq!(reg.next(c), a);
        assert_eq!(reg.prev(a), c);
        assert_eq!(reg.prev(b), a);
        assert_eq!(reg.next(None), a);
        assert_eq!(reg.prev(None), c);
    }

    #[test]
    fn stale_handles_are_rejected() {
        let root = Section::new().with(Step::new());
        let reg = StepRegistry::build(&root, &DeckConfig::standard());
        assert!(reg.record(StepId(0)).is_some());
        assert!(reg.id(StepId(5)).is_none());
        assert!(reg.record(StepId(5)).is_none());
    }

    #[test]
    fn empty_registry() {
        let reg = StepRegistry::build(&Section::new(), &DeckConfig::standard());
        assert!(reg.is_empty());
        assert_eq!(reg.first(), None);
        assert_eq!(reg.next(None), None);
        assert_eq!(reg.prev(None), None);
    }
}
