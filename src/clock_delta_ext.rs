// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Duration (`Clock<Elapsed>`) specific extensions.

use qtty::*;
use std::fmt;
use std::ops::Neg;

use super::clock::ClockDelta;
use super::format::{digital, pad};
use super::options::{ClockUnit, ReadableOptions};
use super::signed;

/// `(plural, singular, terse)` unit names.
const NAMES: [(ClockUnit, &str, &str, &str); 4] = [
    (ClockUnit::Hour, "hours", "hour", "h"),
    (ClockUnit::Minute, "minutes", "minute", "m"),
    (ClockUnit::Second, "seconds", "second", "s"),
    (ClockUnit::Millisecond, "milliseconds", "millisecond", "ms"),
];

impl ClockDelta {
    /// Digital readout such as `01:02` or `-01:02:03:004`.
    ///
    /// Precision defaults to minutes.
    pub fn to_digital(&self, precision: impl Into<Option<ClockUnit>>) -> String {
        let precision = precision.into().unwrap_or(ClockUnit::Minute);
        let shown = self.abs();
        let body = digital(
            &pad(shown.hours(), 2),
            shown.minutes(),
            shown.seconds(),
            shown.milliseconds(),
            precision,
        );
        if self.is_negative() {
            format!("-{body}")
        } else {
            body
        }
    }

    /// Worded readout such as `1h 2m` or `negative 1 hour 2 minutes`.
    ///
    /// Precision defaults to minutes; zero-valued fields are skipped unless
    /// [`ReadableOptions::include_zeroes`] is set.
    pub fn to_readable(&self, options: impl Into<ReadableOptions>) -> String {
        let options = options.into();
        let precision = options.precision.unwrap_or(ClockUnit::Minute);
        let shown = self.abs();

        let terms: Vec<String> = NAMES
            .iter()
            .filter(|(unit, ..)| *unit <= precision)
            .filter_map(|&(unit, plural, singular, terse)| {
                let value = shown.field(unit);
                if value == 0 && !options.include_zeroes {
                    None
                } else if options.verbose {
                    let name = if value == 1 { singular } else { plural };
                    Some(format!("{value} {name}"))
                } else {
                    Some(format!("{value}{terse}"))
                }
            })
            .collect();

        let prefix = match (self.is_negative(), options.verbose) {
            (true, true) => "negative ",
            (true, false) => "-",
            (false, _) => "",
        };
        format!("{prefix}{}", terms.join(" ")).trim_end().to_owned()
    }

    // ── qtty interop ──────────────────────────────────────────────────

    /// The duration as a [`Seconds`] quantity.
    #[inline]
    pub fn to_seconds(&self) -> Seconds {
        Seconds::new(self.raw_milliseconds() as f64 / 1_000.0)
    }

    /// The duration as a [`Days`] quantity.
    #[inline]
    pub fn to_days(&self) -> Days {
        self.to_seconds().to::<Day>()
    }

    /// Build from seconds, rounding half away from zero to the millisecond.
    pub fn from_seconds(seconds: Seconds) -> Self {
        Self::from_millis(signed::round_half(seconds.value() * 1_000.0))
    }

    /// Build from days, rounding half away from zero to the millisecond.
    pub fn from_days(days: Days) -> Self {
        Self::from_seconds(days.to::<Second>())
    }
}

impl Neg for ClockDelta {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_millis(self.raw_milliseconds().saturating_neg())
    }
}

impl fmt::Display for ClockDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_digital(None))
    }
}
