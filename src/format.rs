// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Zero-padding and colon-joined readout helpers.

use crate::options::ClockUnit;

/// Left-pads `value` with zeros to `width` digits; the sign goes in front.
pub(crate) fn pad(value: i64, width: usize) -> String {
    if value < 0 {
        format!("-{:0width$}", value.unsigned_abs())
    } else {
        format!("{value:0width$}")
    }
}

/// `HH[:MM[:SS[:mmm]]]`, stopping after `precision`.
///
/// `hours` is passed pre-rendered so 12-hour readouts can substitute `12`.
pub(crate) fn digital(hours: &str, minutes: i64, seconds: i64, millis: i64, precision: ClockUnit) -> String {
    let mut out = String::from(hours);
    if precision >= ClockUnit::Minute {
        out.push(':');
        out.push_str(&pad(minutes, 2));
    }
    if precision >= ClockUnit::Second {
        out.push(':');
        out.push_str(&pad(seconds, 2));
    }
    if precision >= ClockUnit::Millisecond {
        out.push(':');
        out.push_str(&pad(millis, 3));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_width() {
        assert_eq!(pad(1, 2), "01");
        assert_eq!(pad(4, 3), "004");
        assert_eq!(pad(2021, 4), "2021");
        assert_eq!(pad(12345, 4), "12345");
        assert_eq!(pad(-5, 4), "-0005");
    }

    #[test]
    fn digital_stops_at_precision() {
        assert_eq!(digital("01", 2, 3, 4, ClockUnit::Hour), "01");
        assert_eq!(digital("01", 2, 3, 4, ClockUnit::Minute), "01:02");
        assert_eq!(digital("01", 2, 3, 4, ClockUnit::Second), "01:02:03");
        assert_eq!(digital("01", 2, 3, 4, ClockUnit::Millisecond), "01:02:03:004");
    }
}
