// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained-mode runtime for `ringplot`.
//!
//! This crate owns three concerns:
//! - **Marks**: stable-identity visual primitives (rects, circles, paths, text) with an
//!   explicit `z_index` and optional group membership.
//! - **Scenes**: a retained set of marks that reconciles new mark lists into
//!   [`MarkDiff`]s (`Enter`/`Update`/`Exit`) for downstream renderers.
//! - **Transitions**: a tween scheduler driven by caller-supplied timestamps, with easing,
//!   per-mark interruption, cancellation and completion events.
//!
//! Rendering itself is out of scope; renderers consume diffs.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod diff;
mod ease;
#[cfg(not(feature = "std"))]
mod float;
mod mark;
mod scene;
mod transition;

pub use diff::MarkDiff;
pub use ease::Easing;
pub use mark::{
    CircleBuilder, CircleMark, GroupId, Mark, MarkBuilder, MarkId, MarkKind, MarkPayload,
    PathBuilder, PathMark, RectBuilder, RectMark, TextAnchor, TextBaseline, TextBuilder, TextMark,
};
pub use scene::Scene;
pub use transition::{
    Advance, Channel, DEFAULT_DURATION_MS, Timeline, Transition, TransitionEvent, TransitionId,
};
