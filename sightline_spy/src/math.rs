// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float rounding that works under both `std` and `libm`.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("sightline_spy requires either the `std` or `libm` feature");

#[cfg(feature = "std")]
pub(crate) fn ceil(x: f64) -> f64 {
    x.ceil()
}

#[cfg(feature = "std")]
pub(crate) fn trunc(x: f64) -> f64 {
    x.trunc()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn ceil(x: f64) -> f64 {
    libm::ceil(x)
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn trunc(x: f64) -> f64 {
    libm::trunc(x)
}
