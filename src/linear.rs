// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Linear millisecond count and its field decomposition.
//!
//! Both clock kinds store nothing but one signed millisecond count.  Every
//! component getter is *derived* from it with sign-correct (towards-zero)
//! division, so all fields of a value share the count's sign:
//!
//! ```text
//! hours        = count / 3_600_000
//! raw_minutes  = count / 60_000          minutes      = raw_minutes − hours·60
//! raw_seconds  = count / 1_000           seconds      = raw_seconds − raw_minutes·60
//!                                        milliseconds = count − raw_seconds·1000
//! ```
//!
//! Setters are the inverse: they remove the field's current contribution
//! from the count and add the new one.  Out-of-range values (`minutes = 65`)
//! are legal and simply renormalise on the next read.

use crate::options::{ClockUnit, Rounding};
use crate::signed::floor_div;

/// Milliseconds in one second.
pub const MS_PER_SECOND: i64 = 1_000;
/// Milliseconds in one minute.
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
/// Milliseconds in one hour.
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Nearest-rounding threshold for the minute and second fields.
const SIXTY_MIDPOINT: i64 = 30;
/// Nearest-rounding threshold for the millisecond field.
const MILLI_MIDPOINT: i64 = 500;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct LinearMillis(i64);

impl LinearMillis {
    #[inline]
    pub(crate) const fn new(count: i64) -> Self {
        Self(count)
    }

    /// Recombines component fields; saturates instead of overflowing.
    pub(crate) const fn from_fields(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        Self(
            hours
                .saturating_mul(MS_PER_HOUR)
                .saturating_add(minutes.saturating_mul(MS_PER_MINUTE))
                .saturating_add(seconds.saturating_mul(MS_PER_SECOND))
                .saturating_add(millis),
        )
    }

    #[inline]
    pub(crate) const fn count(self) -> i64 {
        self.0
    }

    // ── getters ───────────────────────────────────────────────────────

    #[inline]
    pub(crate) const fn hours(self) -> i64 {
        floor_div(self.0, MS_PER_HOUR)
    }

    #[inline]
    pub(crate) const fn raw_minutes(self) -> i64 {
        floor_div(self.0, MS_PER_MINUTE)
    }

    #[inline]
    pub(crate) const fn minutes(self) -> i64 {
        self.raw_minutes() - self.hours() * 60
    }

    #[inline]
    pub(crate) const fn raw_seconds(self) -> i64 {
        floor_div(self.0, MS_PER_SECOND)
    }

    #[inline]
    pub(crate) const fn seconds(self) -> i64 {
        self.raw_seconds() - self.raw_minutes() * 60
    }

    #[inline]
    pub(crate) const fn milliseconds(self) -> i64 {
        self.0 - self.raw_seconds() * MS_PER_SECOND
    }

    /// The component field that `unit` addresses.
    #[inline]
    pub(crate) const fn field(self, unit: ClockUnit) -> i64 {
        match unit {
            ClockUnit::Hour => self.hours(),
            ClockUnit::Minute => self.minutes(),
            ClockUnit::Second => self.seconds(),
            ClockUnit::Millisecond => self.milliseconds(),
        }
    }

    // ── setters ───────────────────────────────────────────────────────

    /// Replaces one field's contribution to the count.
    pub(crate) fn set_field(&mut self, unit: ClockUnit, value: i64) {
        let scale = unit.millis();
        self.0 = self
            .0
            .saturating_sub(self.field(unit).saturating_mul(scale))
            .saturating_add(value.saturating_mul(scale));
    }

    pub(crate) fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }

    // ── cascading rounding ────────────────────────────────────────────

    /// Rounds to `unit`, settling every finer level first.
    ///
    /// Each level is decided from the *rounded* next-finer field, never from
    /// the raw one.  Decisions are taken on magnitudes, so a negative value
    /// rounds exactly like its absolute value with the sign reapplied.
    pub(crate) fn round(self, unit: ClockUnit, mode: Rounding) -> Self {
        let sign = if self.0 < 0 { -1 } else { 1 };
        match unit {
            ClockUnit::Millisecond => self,
            ClockUnit::Second => {
                let carry = mode.carry(self.milliseconds(), 0, MILLI_MIDPOINT, sign);
                Self::from_fields(self.hours(), self.minutes(), self.seconds() + carry, 0)
            }
            ClockUnit::Minute => {
                let r = self.round(ClockUnit::Second, mode);
                let carry = mode.carry(r.seconds(), 0, SIXTY_MIDPOINT, sign);
                Self::from_fields(r.hours(), r.minutes() + carry, 0, 0)
            }
            ClockUnit::Hour => {
                let r = self.round(ClockUnit::Minute, mode);
                let carry = mode.carry(r.minutes(), 0, SIXTY_MIDPOINT, sign);
                Self::from_fields(r.hours() + carry, 0, 0, 0)
            }
        }
    }

    /// Field tuple, coarse → fine.
    #[inline]
    pub(crate) const fn fields(self) -> (i64, i64, i64, i64) {
        (
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.milliseconds(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_of_fields_matches(count: i64) -> bool {
        let (h, m, s, ms) = LinearMillis::new(count).fields();
        [h, m, s, ms]
            .iter()
            .all(|f| f.signum() == 0 || f.signum() == count.signum())
    }

    #[test]
    fn decomposes_positive_counts() {
        let t = LinearMillis::from_fields(1, 2, 3, 4);
        assert_eq!(t.count(), 3_723_004);
        assert_eq!(t.fields(), (1, 2, 3, 4));
        assert_eq!(t.raw_minutes(), 62);
        assert_eq!(t.raw_seconds(), 3_723);
    }

    #[test]
    fn decomposes_negative_counts_without_mixed_signs() {
        let t = LinearMillis::from_fields(-1, -2, -3, -4);
        assert_eq!(t.fields(), (-1, -2, -3, -4));

        let t = LinearMillis::new(-3_420_000);
        assert_eq!(t.fields(), (0, -57, 0, 0));

        for count in [-7_384_005, -3_600_001, -59_999, -1, 0, 1, 59_999, 86_399_999] {
            assert!(sign_of_fields_matches(count), "count = {count}");
        }
    }

    #[test]
    fn setters_renormalise_out_of_range_values() {
        let mut t = LinearMillis::default();
        t.set_field(ClockUnit::Hour, t.hours() + 1);
        assert_eq!(t.hours(), 1);
        t.set_field(ClockUnit::Hour, t.hours() - 2);
        assert_eq!(t.hours(), -1);
        t.set_field(ClockUnit::Minute, t.minutes() + 3);
        assert_eq!(t.hours(), 0);
        assert_eq!(t.minutes(), -57);

        let mut t = LinearMillis::from_fields(1, 0, 0, 0);
        t.set_field(ClockUnit::Minute, 65);
        assert_eq!(t.fields(), (2, 5, 0, 0));
    }

    #[test]
    fn rounds_each_level() {
        let t = LinearMillis::from_fields(1, 4, 4, 499);
        assert_eq!(t.round(ClockUnit::Millisecond, Rounding::Up), t);
        assert_eq!(t.round(ClockUnit::Second, Rounding::Nearest).fields(), (1, 4, 4, 0));
        assert_eq!(t.round(ClockUnit::Second, Rounding::Up).fields(), (1, 4, 5, 0));
        assert_eq!(t.round(ClockUnit::Minute, Rounding::Up).fields(), (1, 5, 0, 0));
        assert_eq!(t.round(ClockUnit::Hour, Rounding::Up).fields(), (2, 0, 0, 0));
        assert_eq!(t.round(ClockUnit::Hour, Rounding::Down).fields(), (1, 0, 0, 0));
    }

    #[test]
    fn nearest_cascades_through_rounded_fields() {
        // 01:29:29.500 → 01:29:30 → 01:30 → 02:00
        let t = LinearMillis::from_fields(1, 29, 29, 500);
        assert_eq!(t.round(ClockUnit::Second, Rounding::Nearest).fields(), (1, 29, 30, 0));
        assert_eq!(t.round(ClockUnit::Minute, Rounding::Nearest).fields(), (1, 30, 0, 0));
        assert_eq!(t.round(ClockUnit::Hour, Rounding::Nearest).fields(), (2, 0, 0, 0));

        // without the cascade 01:29:29 would stay at 01:00
        let t = LinearMillis::from_fields(1, 29, 29, 499);
        assert_eq!(t.round(ClockUnit::Hour, Rounding::Nearest).fields(), (1, 0, 0, 0));
    }

    #[test]
    fn negative_values_round_by_magnitude() {
        let t = LinearMillis::from_fields(-1, -29, -29, -500);
        assert_eq!(
            t.round(ClockUnit::Hour, Rounding::Nearest).fields(),
            (-2, 0, 0, 0)
        );
        assert_eq!(t.round(ClockUnit::Minute, Rounding::Down).fields(), (-1, -29, 0, 0));
        assert_eq!(t.round(ClockUnit::Minute, Rounding::Up).fields(), (-1, -30, 0, 0));
    }

    #[test]
    fn up_always_carries_one_unit() {
        let t = LinearMillis::from_fields(1, 0, 0, 0);
        assert_eq!(t.round(ClockUnit::Second, Rounding::Up).fields(), (1, 0, 1, 0));
        assert_eq!(t.round(ClockUnit::Minute, Rounding::Up).fields(), (1, 1, 0, 0));
        assert_eq!(t.round(ClockUnit::Hour, Rounding::Up).fields(), (2, 0, 0, 0));

        let once = LinearMillis::from_fields(0, 0, 0, 1).round(ClockUnit::Second, Rounding::Up);
        assert_eq!(once.fields(), (0, 0, 1, 0));
        assert_eq!(once.round(ClockUnit::Second, Rounding::Up).fields(), (0, 0, 2, 0));

        let zero = LinearMillis::default();
        assert_eq!(zero.round(ClockUnit::Second, Rounding::Up).fields(), (0, 0, 1, 0));
        let negative = LinearMillis::from_fields(-1, 0, 0, 0);
        assert_eq!(negative.round(ClockUnit::Second, Rounding::Up).fields(), (-1, 0, -1, 0));
    }
}
