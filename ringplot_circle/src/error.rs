// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the circle visualization.

use core::fmt;

/// Errors reported while building or driving a [`CircleVis`](crate::CircleVis).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CircleVisError {
    /// The dot set has no finite coordinates to derive scale domains from.
    EmptyDomain,
    /// The surface leaves no drawable range once padding is removed.
    InvalidSurface {
        /// Surface width.
        width: f64,
        /// Surface height.
        height: f64,
        /// Padding on every side.
        padding: f64,
    },
    /// A pointer event named a dot index that does not exist.
    UnknownDot(usize),
}

impl fmt::Display for CircleVisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain => f.write_str("dot set has no finite coordinates"),
            Self::InvalidSurface {
                width,
                height,
                padding,
            } => write!(
                f,
                "surface {width}x{height} with padding {padding} has no drawable area"
            ),
            Self::UnknownDot(index) => write!(f, "no dot with index {index}"),
        }
    }
}

impl core::error::Error for CircleVisError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        assert_eq!(
            CircleVisError::UnknownDot(200).to_string(),
            "no dot with index 200"
        );
        let e = CircleVisError::InvalidSurface {
            width: 40.0,
            height: 600.0,
            padding: 30.0,
        };
        assert_eq!(
            e.to_string(),
            "surface 40x600 with padding 30 has no drawable area"
        );
    }
}
