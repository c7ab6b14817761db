// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An animated circular scatterplot built on `ringplot_core` and `ringplot_charts`.
//!
//! Dots are placed evenly around a circle, plus one at its center, and drawn over bottom/left
//! axes. On [`CircleVis::mount`] every dot animates in with a staggered delay; once the last one
//! has settled, hovering a ring dot grows it and fades in an overlay (lines from the center and
//! a rotated label). Leaving fades the overlay out and removes it when the fade completes.
//!
//! ```
//! use ringplot_circle::{CircleVis, CircleVisConfig};
//!
//! let mut vis = CircleVis::new(CircleVisConfig::default()).unwrap();
//! vis.mount(0.0);
//! let mut now = 0.0;
//! while !vis.is_interactive() {
//!     now += 16.0;
//!     vis.advance(now);
//! }
//! vis.pointer_enter(0, now).unwrap();
//! assert!(vis.overlay_exists(0));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod hover;
pub mod ids;
mod overlay;
mod points;
mod scales;
mod vis;

#[cfg(test)]
mod scenarios;

pub use config::{CircleVisConfig, OverlayStyle};
pub use error::CircleVisError;
pub use hover::{HoverState, OverlayHandle, OverlayPhase};
pub use overlay::OverlayGeometry;
pub use points::{Dot, DotSet};
pub use scales::PlotScales;
pub use vis::{CircleVis, Cue};
