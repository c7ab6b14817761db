// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-dot interaction state.

use ringplot_core::{GroupId, MarkId};
use smallvec::SmallVec;

/// Whether the pointer is over a dot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HoverState {
    /// The pointer is elsewhere.
    #[default]
    Idle,
    /// The pointer is over the dot.
    Hovered,
}

/// Where an overlay is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayPhase {
    /// Fading in after a hover enter.
    FadingIn,
    /// Fully shown.
    Shown,
    /// Fading out after a hover leave; removed when the fade completes.
    FadingOut,
}

/// Ownership of one dot's overlay marks.
///
/// The handle lives from the hover enter that creates the overlay until the fade-out that
/// removes its last mark completes.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayHandle {
    /// Group of every overlay mark.
    pub group: GroupId,
    /// Overlay marks still in the scene.
    pub marks: SmallVec<[MarkId; 4]>,
    /// Lifecycle phase.
    pub phase: OverlayPhase,
}

impl OverlayHandle {
    pub(crate) fn new(group: GroupId, marks: impl IntoIterator<Item = MarkId>) -> Self {
        Self {
            group,
            marks: marks.into_iter().collect(),
            phase: OverlayPhase::FadingIn,
        }
    }

    /// Forgets a removed mark; returns `true` once no marks remain.
    pub(crate) fn release(&mut self, mark: MarkId) -> bool {
        self.marks.retain(|m| *m != mark);
        self.marks.is_empty()
    }
}

/// Hover state plus the overlay a dot owns, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct DotInteraction {
    pub(crate) state: HoverState,
    pub(crate) overlay: Option<OverlayHandle>,
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn release_reports_when_the_last_mark_is_gone() {
        let mut h = OverlayHandle::new(GroupId(2), [MarkId(10), MarkId(11)]);
        assert_eq!(h.phase, OverlayPhase::FadingIn);
        assert!(!h.release(MarkId(10)));
        assert!(!h.release(MarkId(99)));
        assert!(h.release(MarkId(11)));
    }

    #[test]
    fn dots_start_idle_without_overlay() {
        let d = DotInteraction::default();
        assert_eq!(d.state, HoverState::Idle);
        assert!(d.overlay.is_none());
    }
}
