// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for transitions.
//!
//! The curves follow the shapes popularized by d3-ease: `CubicInOut` is the default transition
//! ease and `ElasticOut` overshoots and settles like a spring.

use core::f64::consts::TAU;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// An easing curve mapping normalized time `t` in `[0, 1]` to progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// Identity: progress equals time.
    Linear,
    /// Symmetric cubic ease-in-out.
    #[default]
    CubicInOut,
    /// Elastic ease-out.
    ElasticOut {
        /// Overshoot amplitude (clamped to at least 1).
        amplitude: f64,
        /// Oscillation period in normalized time.
        period: f64,
    },
}

impl Easing {
    /// Elastic ease-out with amplitude 1 and period 0.3.
    pub fn elastic() -> Self {
        Self::ElasticOut {
            amplitude: 1.0,
            period: 0.3,
        }
    }

    /// Returns this curve with a different elastic period.
    ///
    /// Non-elastic curves are returned unchanged.
    pub fn with_period(self, period: f64) -> Self {
        match self {
            Self::ElasticOut { amplitude, .. } => Self::ElasticOut { amplitude, period },
            other => other,
        }
    }

    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    ///
    /// Every curve maps `0` to `0` and `1` to `1`.
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match *self {
            Self::Linear => t,
            Self::CubicInOut => {
                let t = t * 2.0;
                if t <= 1.0 {
                    t * t * t / 2.0
                } else {
                    let t = t - 2.0;
                    (t * t * t + 2.0) / 2.0
                }
            }
            Self::ElasticOut { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    let a = amplitude.max(1.0);
    let p = if period.is_finite() && period > 0.0 {
        period / TAU
    } else {
        0.3 / TAU
    };
    let s = (1.0 / a).asin() * p;
    1.0 - a * tpmt(t) * ((t + s) / p).sin()
}

/// `2^(-10 t)`, shifted and rescaled so it is exactly 1 at `t = 0` and 0 at `t = 1`.
fn tpmt(t: f64) -> f64 {
    (2.0_f64.powf(-10.0 * t) - 0.000_976_562_5) * 1.000_977_517_106_549_4
}
