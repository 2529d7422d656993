// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day (`Clock<TimeOfDay>`) specific extensions.

use chrono::{Local, NaiveTime, Timelike};
use std::fmt;
use std::ops::Sub;

use super::clock::{ClockDelta, ClockTime};
use super::format::{digital, pad};
use super::linear::{MS_PER_HOUR, MS_PER_SECOND};
use super::options::{ClockUnit, DigitalOptions};

const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

impl ClockTime {
    /// Current local wall-clock time.
    pub fn now() -> Self {
        Self::from(Local::now().time())
    }

    /// Componentwise `t2 − t1`.
    pub fn calc_delta(t1: &ClockTime, t2: &ClockTime) -> ClockDelta {
        ClockDelta::new(
            t2.hours() - t1.hours(),
            t2.minutes() - t1.minutes(),
            t2.seconds() - t1.seconds(),
            t2.milliseconds() - t1.milliseconds(),
        )
    }

    /// Digital readout such as `01:02:03 AM` or `13:02` (24-hour mode).
    ///
    /// Precision defaults to seconds.  In 12-hour mode hours 12 and above
    /// print as `PM` with 12 subtracted (an exact noon prints `12`), and
    /// midnight prints `00 AM`.
    ///
    /// ```
    /// use civtime::{ClockTime, ClockUnit, DigitalOptions};
    ///
    /// let t = ClockTime::new(13, 2, 3, 4);
    /// assert_eq!(t.to_digital(DigitalOptions::default()), "01:02:03 PM");
    /// let opts = DigitalOptions { military: true, precision: Some(ClockUnit::Minute) };
    /// assert_eq!(t.to_digital(opts), "13:02");
    /// ```
    pub fn to_digital(&self, options: impl Into<DigitalOptions>) -> String {
        let options = options.into();
        let precision = options.precision.unwrap_or(ClockUnit::Second);

        let mut shown = self.abs();
        let pm = !options.military && shown.hours() >= 12;
        if pm {
            shown.set_hours(shown.hours() - 12);
        }
        let hours = if pm && shown.hours() == 0 {
            String::from("12")
        } else {
            pad(shown.hours(), 2)
        };

        let mut out = String::new();
        if self.is_negative() {
            out.push('-');
        }
        out.push_str(&digital(
            &hours,
            shown.minutes(),
            shown.seconds(),
            shown.milliseconds(),
            precision,
        ));
        if !options.military {
            out.push_str(if pm { " PM" } else { " AM" });
        }
        out
    }

    /// `chrono` time when the value lies within one day.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let millis = self.raw_milliseconds();
        if !(0..MS_PER_DAY).contains(&millis) {
            return None;
        }
        let secs = u32::try_from(millis / MS_PER_SECOND).ok()?;
        let nanos = u32::try_from(millis % MS_PER_SECOND).ok()? * 1_000_000;
        NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        // leap seconds report nanos past 1e9; clamp into the last millisecond
        let millis = (time.nanosecond() / 1_000_000).min(999);
        Self::from_millis(
            i64::from(time.num_seconds_from_midnight()) * MS_PER_SECOND + i64::from(millis),
        )
    }
}

impl Sub for ClockTime {
    type Output = ClockDelta;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        ClockTime::calc_delta(&rhs, &self)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_digital(DigitalOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digital_readout_in_12_hour_mode() {
        let t = ClockTime::new(1, 2, 3, 4);
        assert_eq!(t.to_digital(DigitalOptions::default()), "01:02:03 AM");
        assert_eq!(t.to_digital(ClockUnit::Millisecond), "01:02:03:004 AM");
        assert_eq!(t.to_digital(ClockUnit::Second), "01:02:03 AM");
        assert_eq!(t.to_digital(ClockUnit::Minute), "01:02 AM");
        assert_eq!(t.to_digital(ClockUnit::Hour), "01 AM");
        assert_eq!(t.to_string(), "01:02:03 AM");
    }

    #[test]
    fn afternoon_and_noon_use_pm() {
        assert_eq!(ClockTime::new(12, 30, 0, 0).to_string(), "12:30:00 PM");
        assert_eq!(ClockTime::new(23, 59, 59, 0).to_string(), "11:59:59 PM");
        assert_eq!(ClockTime::new(0, 2, 3, 0).to_string(), "00:02:03 AM");
    }

    #[test]
    fn military_mode_has_no_suffix() {
        let opts = DigitalOptions {
            military: true,
            precision: Some(ClockUnit::Millisecond),
        };
        assert_eq!(ClockTime::new(18, 5, 0, 7).to_digital(opts), "18:05:00:007");
    }

    #[test]
    fn negative_values_get_a_leading_minus() {
        let t = ClockTime::new(0, -30, 0, 0);
        assert_eq!(t.to_digital(ClockUnit::Minute), "-00:30 AM");
    }

    #[test]
    fn calc_delta_is_componentwise() {
        let t1 = ClockTime::new(9, 15, 0, 0);
        let t2 = ClockTime::new(10, 0, 30, 0);
        let d = ClockTime::calc_delta(&t1, &t2);
        assert_eq!(d.fields(), (0, 45, 30, 0));
        assert_eq!(t2 - t1, d);
        assert_eq!(t1 + d, t2);
    }

    #[test]
    fn chrono_interop_stays_within_a_day() {
        let naive = NaiveTime::from_hms_milli_opt(7, 8, 9, 10).unwrap();
        let t = ClockTime::from(naive);
        assert_eq!(t.fields(), (7, 8, 9, 10));
        assert_eq!(t.to_naive_time(), Some(naive));
        assert_eq!(ClockTime::new(24, 0, 0, 0).to_naive_time(), None);
        assert_eq!(ClockTime::new(0, 0, 0, -1).to_naive_time(), None);
    }

    #[test]
    fn now_is_a_time_of_day() {
        let now = ClockTime::now();
        assert!(now.to_naive_time().is_some());
    }
}
