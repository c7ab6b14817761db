// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained mark scene.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::diff::MarkDiff;
use crate::mark::{GroupId, Mark, MarkId, MarkPayload};

/// A retained set of marks keyed by [`MarkId`].
///
/// The scene is the single source of truth for what is currently displayed. Every mutation
/// returns the [`MarkDiff`]s a renderer needs to stay in sync.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, Mark>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the scene has no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns a mark by id.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.marks.get(&id)
    }

    /// Returns `true` if a mark with this id exists.
    pub fn contains(&self, id: MarkId) -> bool {
        self.marks.contains_key(&id)
    }

    /// Reconciles the scene against a complete list of marks.
    ///
    /// Marks with new ids enter, marks whose payload or z-index changed update, and marks not
    /// present in `marks` exit. Unchanged marks produce no diff. Diffs are ordered by
    /// `(z_index, id)` with exits last, so the output is deterministic.
    ///
    /// If `marks` contains duplicate ids, the last one wins.
    pub fn tick(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut incoming: HashMap<MarkId, Mark> = HashMap::new();
        for m in marks {
            incoming.insert(m.id, m);
        }

        let mut exits: Vec<&Mark> = self
            .marks
            .values()
            .filter(|m| !incoming.contains_key(&m.id))
            .collect();
        exits.sort_by_key(|m| (m.z_index, m.id));
        let exit_diffs: Vec<MarkDiff> = exits.into_iter().map(MarkDiff::exit).collect();
        self.marks.retain(|id, _| incoming.contains_key(id));

        let mut ordered: Vec<Mark> = incoming.into_values().collect();
        ordered.sort_by_key(|m| (m.z_index, m.id));

        let mut out = Vec::new();
        for m in ordered {
            if let Some(diff) = self.insert(m) {
                out.push(diff);
            }
        }
        out.extend(exit_diffs);
        out
    }

    /// Inserts or replaces a single mark.
    ///
    /// Returns `None` if an identical mark was already present.
    pub fn insert(&mut self, mark: Mark) -> Option<MarkDiff> {
        match self.marks.entry(mark.id) {
            Entry::Occupied(mut e) => {
                if *e.get() == mark {
                    return None;
                }
                let diff = MarkDiff::update(e.get(), &mark);
                e.insert(mark);
                Some(diff)
            }
            Entry::Vacant(e) => {
                let diff = MarkDiff::enter(&mark);
                e.insert(mark);
                Some(diff)
            }
        }
    }

    /// Mutates the payload of an existing mark in place.
    ///
    /// Returns an `Update` diff if the payload changed, `None` if the mark is missing or the
    /// closure left it unchanged.
    pub fn modify(&mut self, id: MarkId, f: impl FnOnce(&mut MarkPayload)) -> Option<MarkDiff> {
        let mark = self.marks.get_mut(&id)?;
        let before = mark.clone();
        f(&mut mark.payload);
        if before.payload == mark.payload {
            None
        } else {
            Some(MarkDiff::update(&before, mark))
        }
    }

    /// Removes a mark.
    pub fn remove(&mut self, id: MarkId) -> Option<MarkDiff> {
        self.marks.remove(&id).map(|m| MarkDiff::exit(&m))
    }

    /// Returns the ids of all marks in `group`, sorted.
    pub fn group_members(&self, group: GroupId) -> Vec<MarkId> {
        let mut ids: Vec<MarkId> = self
            .marks
            .values()
            .filter(|m| m.group == Some(group))
            .map(|m| m.id)
            .collect();
        ids.sort();
        ids
    }

    /// Removes every mark in `group`.
    pub fn remove_group(&mut self, group: GroupId) -> Vec<MarkDiff> {
        self.group_members(group)
            .into_iter()
            .filter_map(|id| self.remove(id))
            .collect()
    }

    /// Returns all marks in render order, `(z_index, id)`.
    pub fn sorted(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.values().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::mark::MarkKind;

    fn dot(id: u64, x: f64) -> Mark {
        Mark::builder(MarkId(id))
            .circle()
            .center((x, 0.0))
            .radius(1.0)
            .build()
    }

    #[test]
    fn tick_reports_enter_update_exit() {
        let mut scene = Scene::new();
        let diffs = scene.tick([dot(1, 0.0), dot(2, 0.0)]);
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Enter { .. })));

        let diffs = scene.tick([dot(2, 5.0), dot(3, 0.0)]);
        let kinds: Vec<_> = diffs
            .iter()
            .map(|d| match d {
                MarkDiff::Enter { id, .. } => ("enter", id.0),
                MarkDiff::Update { id, .. } => ("update", id.0),
                MarkDiff::Exit { id, .. } => ("exit", id.0),
            })
            .collect();
        assert_eq!(kinds, vec![("update", 2), ("enter", 3), ("exit", 1)]);
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn unchanged_marks_produce_no_diffs() {
        let mut scene = Scene::new();
        scene.tick([dot(1, 0.0)]);
        assert!(scene.tick([dot(1, 0.0)]).is_empty());
        assert!(scene.insert(dot(1, 0.0)).is_none());
    }

    #[test]
    fn modify_only_reports_real_changes() {
        let mut scene = Scene::new();
        scene.insert(dot(1, 0.0));
        assert!(scene.modify(MarkId(1), |_| {}).is_none());
        assert!(scene.modify(MarkId(9), |p| p.set_opacity(0.0)).is_none());

        let diff = scene
            .modify(MarkId(1), |p| {
                p.set_radius(3.0);
            })
            .expect("radius changed");
        let MarkDiff::Update {
            kind,
            old_bounds,
            new_bounds,
            ..
        } = diff
        else {
            panic!("expected update");
        };
        assert_eq!(kind, MarkKind::Circle);
        assert_ne!(old_bounds, new_bounds);
    }

    #[test]
    fn remove_group_only_touches_members() {
        let mut scene = Scene::new();
        let g = GroupId(4);
        scene.insert(
            Mark::builder(MarkId(1))
                .group(g)
                .path()
                .build(),
        );
        scene.insert(Mark::builder(MarkId(2)).text().group(g).build());
        scene.insert(dot(3, 0.0));

        assert_eq!(scene.group_members(g), vec![MarkId(1), MarkId(2)]);
        let diffs = scene.remove_group(g);
        assert_eq!(diffs.len(), 2);
        assert!(diffs.iter().all(|d| matches!(d, MarkDiff::Exit { .. })));
        assert_eq!(scene.len(), 1);
        assert!(scene.contains(MarkId(3)));
    }

    #[test]
    fn sorted_orders_by_z_then_id() {
        let mut scene = Scene::new();
        scene.insert(Mark::builder(MarkId(5)).z_index(1).rect().build());
        scene.insert(Mark::builder(MarkId(9)).z_index(0).rect().build());
        scene.insert(Mark::builder(MarkId(2)).z_index(1).rect().build());
        let ids: Vec<u64> = scene.sorted().into_iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }
}
