// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene diffs.

extern crate alloc;

use alloc::boxed::Box;

use kurbo::Rect;

use crate::mark::{Mark, MarkId, MarkKind};

/// A change to the retained scene, as seen by a renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark appeared.
    Enter {
        /// Mark identity.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Render order.
        z_index: i32,
        /// Geometric bounds, if known.
        bounds: Option<Rect>,
        /// The new mark.
        new: Box<Mark>,
    },
    /// A mark changed payload or render order.
    Update {
        /// Mark identity.
        id: MarkId,
        /// Mark kind after the update.
        kind: MarkKind,
        /// Render order before the update.
        old_z_index: i32,
        /// Render order after the update.
        new_z_index: i32,
        /// Bounds before the update.
        old_bounds: Option<Rect>,
        /// Bounds after the update.
        new_bounds: Option<Rect>,
        /// The updated mark.
        new: Box<Mark>,
    },
    /// A mark was removed.
    Exit {
        /// Mark identity.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Bounds of the removed mark.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }

    pub(crate) fn enter(mark: &Mark) -> Self {
        Self::Enter {
            id: mark.id,
            kind: mark.kind(),
            z_index: mark.z_index,
            bounds: mark.payload.bounds(),
            new: Box::new(mark.clone()),
        }
    }

    pub(crate) fn update(old: &Mark, new: &Mark) -> Self {
        Self::Update {
            id: new.id,
            kind: new.kind(),
            old_z_index: old.z_index,
            new_z_index: new.z_index,
            old_bounds: old.payload.bounds(),
            new_bounds: new.payload.bounds(),
            new: Box::new(new.clone()),
        }
    }

    pub(crate) fn exit(mark: &Mark) -> Self {
        Self::Exit {
            id: mark.id,
            kind: mark.kind(),
            bounds: mark.payload.bounds(),
        }
    }
}
