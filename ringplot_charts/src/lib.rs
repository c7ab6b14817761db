// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `ringplot_core`.
//!
//! This crate is a small, reusable layer above `ringplot_core`:
//! - **Scales** map data values into screen coordinates, with optional "nice" domains.
//! - **Guides** (axes) are built by generating `ringplot_core::Mark`s from an instantiated
//!   scale, so guides and series always share one mapping.
//! - **Mark helpers** (rules, text, rects) wrap the core builders with chart defaults.
//!
//! Text shaping and layout are out of scope; text marks store unshaped strings.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod axis;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod rect_mark;
mod rule_mark;
mod scale;
mod text_mark;
mod z_order;

pub use axis::{AXIS_ID_SPAN, AxisOrient, AxisSpec, AxisStyle, StrokeStyle};
pub use format::format_tick_with_step;
pub use rect_mark::RectMarkSpec;
pub use rule_mark::RuleMarkSpec;
pub use scale::{MAX_TICKS, ScaleLinear, ScaleLinearSpec, infer_max_f64};
pub use text_mark::TextMarkSpec;
pub use z_order::*;
