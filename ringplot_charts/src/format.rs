// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting.

extern crate alloc;

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a tick value using just enough decimals to distinguish ticks spaced `step` apart.
///
/// A `step` of `0` (or a non-finite step) falls back to the shortest round-trip formatting.
pub fn format_tick_with_step(value: f64, step: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    if !step.is_finite() || step <= 0.0 {
        return format!("{value}");
    }
    let decimals = (-step.log10().floor()).clamp(0.0, 12.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to a small non-negative range"
    )]
    let decimals = decimals as usize;
    let out = format!("{value:.decimals$}");
    // Avoid "-0" for values that round to zero.
    if out.starts_with('-') && out[1..].chars().all(|c| c == '0' || c == '.') {
        return String::from(&out[1..]);
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integer_steps_have_no_decimals() {
        assert_eq!(format_tick_with_step(50.0, 50.0), "50");
        assert_eq!(format_tick_with_step(600.0, 100.0), "600");
    }

    #[test]
    fn fractional_steps_keep_needed_decimals() {
        assert_eq!(format_tick_with_step(0.5, 0.5), "0.5");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
    }

    #[test]
    fn negative_zero_is_normalized() {
        assert_eq!(format_tick_with_step(-0.0001, 1.0), "0");
    }

    #[test]
    fn zero_step_falls_back_to_shortest() {
        assert_eq!(format_tick_with_step(1.5, 0.0), "1.5");
    }
}
