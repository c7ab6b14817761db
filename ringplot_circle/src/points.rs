// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The point generator.

extern crate alloc;

use alloc::vec::Vec;
use core::f64::consts::TAU;

use ringplot_charts::infer_max_f64;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A point in data coordinates, plus its display radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Horizontal data coordinate.
    pub x: f64,
    /// Vertical data coordinate.
    pub y: f64,
    /// Display radius in pixels.
    pub r: f64,
}

/// The fixed set of dots: ring points in angle order, then the center point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DotSet {
    dots: Vec<Dot>,
}

impl DotSet {
    /// Generates points evenly spaced around a circle of `radius`, plus its center.
    ///
    /// Ring points sit at angles `0, step, 2 * step, ...` below `2π` (a half-open range, so
    /// there are `ceil(2π / step)` of them) at `(radius * cos θ + radius, radius * sin θ + radius)`
    /// with display radius `ring_r`. The center `(radius, radius)` with display radius `center_r`
    /// is appended last.
    ///
    /// A non-finite or non-positive `step` generates no ring points.
    pub fn generate(radius: f64, step: f64, ring_r: f64, center_r: f64) -> Self {
        let count = ring_point_count(step);
        let mut dots = Vec::with_capacity(count + 1);
        dots.extend((0..count).map(|i| {
            let (sin, cos) = (i as f64 * step).sin_cos();
            Dot {
                x: radius * cos + radius,
                y: radius * sin + radius,
                r: ring_r,
            }
        }));
        dots.push(Dot {
            x: radius,
            y: radius,
            r: center_r,
        });
        Self { dots }
    }

    /// Returns the number of dots, center included.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// Returns `true` if there are no dots.
    ///
    /// Generated sets always contain the center, so this is only `true` for `DotSet::default()`.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Returns the dot at `index`.
    pub fn get(&self, index: usize) -> Option<&Dot> {
        self.dots.get(index)
    }

    /// Iterates dots in index order.
    pub fn iter(&self) -> core::slice::Iter<'_, Dot> {
        self.dots.iter()
    }

    /// Index of the center dot (always the last one).
    pub fn center_index(&self) -> Option<usize> {
        self.dots.len().checked_sub(1)
    }

    /// Returns `true` if `index` names a ring point (not the center, not out of range).
    pub fn is_ring(&self, index: usize) -> bool {
        index < self.ring_count()
    }

    /// Number of ring points.
    pub fn ring_count(&self) -> usize {
        self.dots.len().saturating_sub(1)
    }

    /// Largest finite `x`, if any.
    pub fn max_x(&self) -> Option<f64> {
        infer_max_f64(self.dots.iter().map(|d| d.x))
    }

    /// Largest finite `y`, if any.
    pub fn max_y(&self) -> Option<f64> {
        infer_max_f64(self.dots.iter().map(|d| d.y))
    }
}

impl<'a> IntoIterator for &'a DotSet {
    type Item = &'a Dot;
    type IntoIter = core::slice::Iter<'a, Dot>;

    fn into_iter(self) -> Self::IntoIter {
        self.dots.iter()
    }
}

fn ring_point_count(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let n = (TAU / step).ceil();
    if !n.is_finite() || n <= 0.0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "finite and positive; saturates for absurdly small steps"
    )]
    {
        n as usize
    }
}
