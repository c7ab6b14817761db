// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! A scale is specified as a domain plus options ([`ScaleLinearSpec`]) and instantiated for a
//! concrete output range ([`ScaleLinear`]). Instantiate once and share the instance between
//! series marks and guides so they stay mutually consistent.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A linear mapping from a continuous domain to a continuous range.
///
/// Domains may be reversed (`d0 > d1`), which flips the mapping; this is how screen-space y
/// axes grow upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

/// Specification for a linear scale (domain + options, no range yet).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinearSpec {
    /// Domain in data units.
    pub domain: (f64, f64),
    /// Whether to "nice" the domain based on tick generation.
    pub nice: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = r1 - r0;
        if denom == 0.0 {
            return d0;
        }
        let t = (y - r0) / denom;
        d0 + t * (d1 - d0)
    }

    /// Returns the domain (as resolved at instantiation).
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the output range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns “nice-ish” tick values for the domain, in ascending order.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

impl ScaleLinearSpec {
    /// Creates a new linear scale spec.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Enables or disables nice-domain behavior.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// Returns the effective domain after applying `nice` (if enabled).
    ///
    /// Bounds are rounded outward to the tick step; a reversed domain stays reversed.
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if !self.nice {
            return self.domain;
        }
        let ticks = nice_ticks(self.domain.0, self.domain.1, tick_count);
        match (ticks.first(), ticks.last()) {
            (Some(&lo), Some(&hi)) if ticks.len() >= 2 => {
                if self.domain.0 > self.domain.1 {
                    (hi, lo)
                } else {
                    (lo, hi)
                }
            }
            _ => self.domain,
        }
    }

    /// Instantiates a concrete scale for a given output range.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleLinear {
        ScaleLinear::new(self.domain, range)
    }

    /// Instantiates a concrete scale using the `resolved_domain` (respecting `nice`).
    pub fn instantiate_resolved(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

/// Upper bound on the number of values [`ScaleLinear::ticks`] returns.
pub const MAX_TICKS: u64 = 10_001;

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    if min > max {
        core::mem::swap(&mut min, &mut max);
    }
    let span = max - min;
    let step0 = span / count.max(1) as f64;
    let step = nice_step(step0);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;

    let n_f = ((stop - start) / step).round();
    let n = if n_f.is_finite() && n_f >= 0.0 {
        let n_f = n_f.min((MAX_TICKS - 1) as f64);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/non-negative checks and capped at MAX_TICKS - 1"
        )]
        {
            n_f as u64
        }
    } else {
        0
    };
    (0..=n).map(|i| start + step * i as f64).collect()
}

/// Error thresholds for rounding a raw step up to 10, 5 or 2 times its power of ten.
const SQRT_50: f64 = 7.071_067_811_865_475;
const SQRT_10: f64 = 3.162_277_660_168_379_5;

/// Rounds `step` to 1, 2, 5 or 10 times a power of ten, switching at the geometric means
/// (√2, √10, √50) so the chosen step is the closest in ratio to the raw one.
fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= SQRT_50 {
        10.0
    } else if error >= SQRT_10 {
        5.0
    } else if error >= core::f64::consts::SQRT_2 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// Infers the maximum of a sequence of values.
///
/// Non-finite values are ignored. Returns `None` if no finite values are present.
pub fn infer_max_f64(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_scale_maps_endpoints_to_range() {
        let s = ScaleLinear::new((0.0, 600.0), (30.0, 570.0));
        assert!((s.map(0.0) - 30.0).abs() < 1e-9);
        assert!((s.map(600.0) - 570.0).abs() < 1e-9);
        assert!((s.invert(s.map(123.0)) - 123.0).abs() < 1e-9);
    }

    #[test]
    fn reversed_domain_flips_mapping() {
        let s = ScaleLinear::new((600.0, 0.0), (30.0, 570.0));
        assert!((s.map(600.0) - 30.0).abs() < 1e-9);
        assert!((s.map(0.0) - 570.0).abs() < 1e-9);
        assert!(s.map(100.0) > s.map(200.0));
    }

    #[test]
    fn nice_domain_rounds_outward() {
        let spec = ScaleLinearSpec::new((0.0, 599.93)).with_nice(true);
        assert_eq!(spec.resolved_domain(10), (0.0, 600.0));

        let spec = ScaleLinearSpec::new((0.3, 9.2)).with_nice(true);
        assert_eq!(spec.resolved_domain(10), (0.0, 10.0));
    }

    #[test]
    fn nice_steps_switch_at_geometric_means() {
        // 14.5 is past √2 * 10, so the step rounds up to 20.
        let spec = ScaleLinearSpec::new((0.0, 145.0)).with_nice(true);
        assert_eq!(spec.resolved_domain(10), (0.0, 160.0));
        assert_eq!(nice_step(1.4), 1.0);
        assert_eq!(nice_step(3.2), 5.0);
        assert_eq!(nice_step(7.2), 10.0);
    }

    #[test]
    fn nice_domain_keeps_reversed_orientation() {
        let spec = ScaleLinearSpec::new((599.93, 0.0)).with_nice(true);
        assert_eq!(spec.resolved_domain(10), (600.0, 0.0));
    }

    #[test]
    fn nice_is_opt_in() {
        let spec = ScaleLinearSpec::new((0.0, 599.93));
        assert_eq!(spec.resolved_domain(10), (0.0, 599.93));
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = ScaleLinear::new((5.0, 5.0), (10.0, 20.0));
        assert_eq!(s.map(5.0), 10.0);
        assert_eq!(s.ticks(10), alloc::vec![5.0]);
        let spec = ScaleLinearSpec::new((5.0, 5.0)).with_nice(true);
        assert_eq!(spec.resolved_domain(10), (5.0, 5.0));
    }

    #[test]
    fn ticks_ascend_even_for_reversed_domains() {
        let s = ScaleLinear::new((600.0, 0.0), (0.0, 1.0));
        let ticks = s.ticks(10);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert_eq!(ticks.last().copied(), Some(600.0));
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn infer_max_skips_non_finite_values() {
        assert_eq!(infer_max_f64([1.0, f64::NAN, 3.0, f64::INFINITY]), Some(3.0));
        assert_eq!(infer_max_f64([f64::NAN]), None);
        assert_eq!(infer_max_f64(core::iter::empty::<f64>()), None);
    }
}
