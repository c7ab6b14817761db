// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic mark identities.
//!
//! Every mark the visualization creates has an id derived from what it shows, so reconciling the
//! same state twice yields the same ids and overlays for a dot can be found (and removed) without
//! bookkeeping. Ids are partitioned into disjoint ranges:
//!
//! | range                 | marks                           |
//! |-----------------------|---------------------------------|
//! | `1`                   | container frame                 |
//! | `100_000..200_000`    | bottom axis                     |
//! | `200_000..300_000`    | left axis                       |
//! | `1_000_000..`         | dot `i` at `1_000_000 + i`      |
//! | `1 << 32..`           | overlay lines of dot `i`        |
//! | `2 << 32..`           | overlay label of dot `i`        |

extern crate alloc;

use alloc::format;
use alloc::string::String;

use ringplot_charts::AXIS_ID_SPAN;
use ringplot_core::{GroupId, MarkId};

/// The container outline.
pub const FRAME: MarkId = MarkId(1);
/// Id base of the bottom axis (see `AxisSpec::id_base`).
pub const X_AXIS_BASE: u64 = 100_000;
/// Id base of the left axis.
pub const Y_AXIS_BASE: u64 = 200_000;

const DOT_BASE: u64 = 1_000_000;
const LINE_BASE: u64 = 1 << 32;
const LABEL_BASE: u64 = 2 << 32;
/// Line slots reserved per dot.
const LINE_SLOTS: u64 = 4;

const _: () = assert!(
    X_AXIS_BASE + AXIS_ID_SPAN <= Y_AXIS_BASE && Y_AXIS_BASE + AXIS_ID_SPAN <= DOT_BASE,
    "axis id ranges overlap"
);

/// The circle mark of dot `index`.
pub fn dot(index: usize) -> MarkId {
    MarkId(DOT_BASE + index as u64)
}

/// Overlay line `slot` of dot `index`.
pub fn overlay_line(index: usize, slot: usize) -> MarkId {
    debug_assert!((slot as u64) < LINE_SLOTS, "line slot {slot} out of range");
    MarkId(LINE_BASE + index as u64 * LINE_SLOTS + slot as u64)
}

/// The overlay label of dot `index`.
pub fn overlay_label(index: usize) -> MarkId {
    MarkId(LABEL_BASE + index as u64)
}

/// The group holding every overlay mark of dot `index`.
pub fn overlay_group(index: usize) -> GroupId {
    GroupId(index as u64)
}

/// What a mark id refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    /// The container outline.
    Frame,
    /// A mark of the bottom or left axis.
    Axis,
    /// The circle of a dot.
    Dot(usize),
    /// One of a dot's overlay lines.
    OverlayLine {
        /// The hovered dot.
        index: usize,
        /// Line slot; `0` is the connector.
        slot: usize,
    },
    /// A dot's overlay label.
    OverlayLabel(usize),
}

/// Classifies a mark id produced by this module.
pub fn element(id: MarkId) -> Option<Element> {
    let raw = id.0;
    let index = |v: u64| usize::try_from(v).ok();
    if id == FRAME {
        Some(Element::Frame)
    } else if (X_AXIS_BASE..Y_AXIS_BASE + AXIS_ID_SPAN).contains(&raw) {
        Some(Element::Axis)
    } else if raw >= LABEL_BASE {
        index(raw - LABEL_BASE).map(Element::OverlayLabel)
    } else if raw >= LINE_BASE {
        let offset = raw - LINE_BASE;
        let slot = usize::try_from(offset % LINE_SLOTS).ok()?;
        index(offset / LINE_SLOTS).map(|index| Element::OverlayLine { index, slot })
    } else if raw >= DOT_BASE {
        index(raw - DOT_BASE).map(Element::Dot)
    } else {
        None
    }
}

/// The document-style element name of a mark: `dot-i`, `line-i` or `desc-i`.
///
/// The connector is `line-i`; the legs of a right-angle overlay are `line-i-<slot>`. Frame and
/// axis marks have no name.
pub fn element_name(id: MarkId) -> Option<String> {
    match element(id)? {
        Element::Dot(i) => Some(format!("dot-{i}")),
        Element::OverlayLine { index, slot: 0 } => Some(format!("line-{index}")),
        Element::OverlayLine { index, slot } => Some(format!("line-{index}-{slot}")),
        Element::OverlayLabel(i) => Some(format!("desc-{i}")),
        Element::Frame | Element::Axis => None,
    }
}

/// The document-style name of an overlay group: `over-i`.
pub fn group_name(group: GroupId) -> String {
    format!("over-{}", group.0)
}
