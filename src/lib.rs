// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil time values
//!
//! This crate provides calendar dates, times of day and signed durations
//! with cascading rounding, unit-wise arithmetic and precision-aware
//! comparison.
//!
//! # Core types
//!
//! - [`CalendarDate`] — a normalised proleptic Gregorian `(year, month, day)`.
//! - [`Clock<K>`] — a millisecond count parameterised by a [`ClockKind`] marker.
//! - [`ClockTime`] — type alias for `Clock<TimeOfDay>`.
//! - [`ClockDelta`] — type alias for `Clock<Elapsed>`.
//! - [`Value`] — any one of the above, tagged with its [`ValueKind`].
//!
//! # Precision and rounding
//!
//! Every rounding and comparison operation takes a [`RoundingOptions`]:
//!
//! | Type | Units (coarse → fine) | Round default | Compare default |
//! |------|-----------------------|---------------|-----------------|
//! | [`CalendarDate`] | [`DateUnit`] year, month, day | day, down | day, down |
//! | [`ClockTime`] / [`ClockDelta`] | [`ClockUnit`] h, m, s, ms | ms, nearest | ms, down |
//!
//! Rounding to a level first settles every finer level, so a carry can
//! propagate upwards (`01:29:29.500` rounds to `02:00` at the hour).
//!
//! # Signs
//!
//! Clock values are stored as one signed millisecond count and every
//! component is derived from it with truncating division: all non-zero
//! components of a negative value are negative.
//!
//! # Features
//!
//! | Feature | Default | Effect |
//! |---------|---------|--------|
//! | `serde` | yes | `Serialize`/`Deserialize` and JSON snapshots |
//! | `log` | no | diagnostics through the [`log`](https://docs.rs/log) facade |

/// Forwards to the `log` crate when the `log` feature is enabled.
macro_rules! log_event {
    ($lvl:ident, $($args:tt)+) => {{
        #[cfg(feature = "log")]
        {
            log::$lvl!($($args)+);
        }
    }};
}
pub(crate) use log_event;

mod clock;
mod clock_delta_ext;
mod clock_time_ext;
mod date;
mod error;
mod format;
mod kinds;
mod linear;
mod options;
pub mod signed;
mod value;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use clock::{Clock, ClockDelta, ClockTime};
pub use date::CalendarDate;
pub use error::{Error, Result};
pub use kinds::{ClockKind, Elapsed, TimeOfDay};
pub use linear::{MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
pub use options::{
    ClockUnit, DateFormat, DateUnit, DigitalOptions, IntoSteps, ReadableOptions, Rounding,
    RoundingOptions, Step,
};
pub use value::{Tagged, Value, ValueKind};
