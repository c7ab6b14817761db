// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! `ringplot_core` marks carry an explicit `z_index` for render ordering. The chart layer sets
//! z-indexes consistently so callers don't have to hand-tune paint order.
//!
//! These values are intentionally coarse. Renderers should sort by `(z_index, MarkId)` for a
//! deterministic tie-break.

/// Plot background/frame.
pub const PLOT_BACKGROUND: i32 = -100;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;

/// Point series marks.
pub const SERIES_POINTS: i32 = 50;

/// Hover overlay lines, drawn above the points they connect.
pub const OVERLAY_LINES: i32 = 60;
/// Hover overlay labels.
pub const OVERLAY_LABELS: i32 = 70;
