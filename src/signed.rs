// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sign-correct rounding primitives.
//!
//! The standard library's `floor`/`ceil`/`round` move towards −∞ or +∞
//! regardless of sign, which biases negative durations.  The functions in
//! this module apply the rounding rule to the **magnitude** and then
//! restore the sign, so that `floor(-1.5) == -1` and `ceil(-1.5) == -2`.
//! Zero (including `-0.0`) always maps to `0`.

/// Rounds half away from zero, on the magnitude.
#[inline]
pub fn round_half(value: f64) -> i64 {
    apply(value, f64::round)
}

/// Floors the magnitude, keeping the sign.
#[inline]
pub fn floor(value: f64) -> i64 {
    apply(value, f64::floor)
}

/// Ceils the magnitude, keeping the sign.
#[inline]
pub fn ceil(value: f64) -> i64 {
    apply(value, f64::ceil)
}

/// Integer counterpart of [`floor`] for `dividend / divisor`.
///
/// Rust's integer division already truncates towards zero, which is exactly
/// the magnitude floor; this wrapper names the intent at call sites.
#[inline]
pub const fn floor_div(dividend: i64, divisor: i64) -> i64 {
    dividend / divisor
}

#[inline]
fn apply(value: f64, rule: fn(f64) -> f64) -> i64 {
    let magnitude = rule(value.abs()) as i64;
    if magnitude == 0 {
        0
    } else if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}
