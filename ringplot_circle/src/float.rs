// Copyright 2025 the Ringplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! Trigonometry (`f64::sin_cos`, `f64::atan2`) and rounding are not available in `core`, so
//! they dispatch to `libm` when `std` is disabled.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn sin_cos(self) -> (Self, Self)
    where
        Self: Sized;
    fn atan2(self, other: Self) -> Self;
    fn ceil(self) -> Self;
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
impl FloatExt for f64 {
    fn sin_cos(self) -> (Self, Self) {
        (libm::sin(self), libm::cos(self))
    }

    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }

    fn ceil(self) -> Self {
        libm::ceil(self)
    }
}

#[cfg(all(not(feature = "std"), not(feature = "libm")))]
compile_error!("ringplot_circle requires either the `std` or `libm` feature");
