// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar date.
//!
//! [`CalendarDate`] wraps a `chrono::NaiveDate`, which acts as the host
//! calendar primitive.  Any `(year, month, day)` triple is accepted and
//! normalised the way a civil calendar carries overflow: month 13 rolls into
//! the next year, day 32 into the next month, day 0 back to the previous
//! month's last day.

use chrono::{Datelike, Local, NaiveDate, TimeDelta};
use qtty::Days;
use std::fmt;
use std::ops::Sub;

use crate::format::pad;
use crate::options::{DateFormat, DateUnit, IntoSteps, Rounding, RoundingOptions};
use crate::value::Tagged;

#[cfg(feature = "serde")]
use crate::{error::Error, value::ValueKind};
#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Nearest-rounding threshold when rounding to the month.
///
/// Fixed regardless of the month's actual length.
const MONTH_MIDPOINT_DAY: i64 = 15;
/// Nearest-rounding threshold when rounding to the year.
const YEAR_MIDPOINT_MONTH: i64 = 6;

/// A normalised calendar date.
///
/// Operations return new values; the `set_*` methods are the only in-place
/// mutation and each re-derives the full normalised triple.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    date: NaiveDate,
}

impl CalendarDate {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from a possibly out-of-range triple.
    ///
    /// ```
    /// use civtime::CalendarDate;
    ///
    /// let d = CalendarDate::new(2021, 13, 32);
    /// assert_eq!((d.year(), d.month(), d.day()), (2022, 2, 1));
    /// ```
    pub fn new(year: i64, month: i64, day: i64) -> Self {
        Self {
            date: normalize(year, month, day),
        }
    }

    /// Today's local date.
    pub fn today() -> Self {
        Self::from(Local::now().date_naive())
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month of the year, `1..=12`.
    #[inline]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Day of the month, `1..=31`.
    #[inline]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// English month name.
    pub fn month_name(&self) -> String {
        self.date.format("%B").to_string()
    }

    /// The field that `unit` addresses.
    #[inline]
    pub fn field(&self, unit: DateUnit) -> i64 {
        match unit {
            DateUnit::Year => i64::from(self.year()),
            DateUnit::Month => i64::from(self.month()),
            DateUnit::Day => i64::from(self.day()),
        }
    }

    // ── setters ───────────────────────────────────────────────────────

    pub fn set_year(&mut self, year: i64) {
        self.set_field(DateUnit::Year, year);
    }

    pub fn set_month(&mut self, month: i64) {
        self.set_field(DateUnit::Month, month);
    }

    pub fn set_day(&mut self, day: i64) {
        self.set_field(DateUnit::Day, day);
    }

    /// Replaces one field and renormalises the triple.
    pub fn set_field(&mut self, unit: DateUnit, value: i64) {
        let (mut year, mut month, mut day) = (
            self.field(DateUnit::Year),
            self.field(DateUnit::Month),
            self.field(DateUnit::Day),
        );
        match unit {
            DateUnit::Year => year = value,
            DateUnit::Month => month = value,
            DateUnit::Day => day = value,
        }
        self.date = normalize(year, month, day);
    }

    #[must_use]
    pub fn with_year(&self, year: i64) -> Self {
        self.with_field(DateUnit::Year, year)
    }

    #[must_use]
    pub fn with_month(&self, month: i64) -> Self {
        self.with_field(DateUnit::Month, month)
    }

    #[must_use]
    pub fn with_day(&self, day: i64) -> Self {
        self.with_field(DateUnit::Day, day)
    }

    #[must_use]
    pub fn with_field(&self, unit: DateUnit, value: i64) -> Self {
        let mut out = *self;
        out.set_field(unit, value);
        out
    }

    // ── rounding ──────────────────────────────────────────────────────

    /// Round to a precision level, settling every finer level first.
    ///
    /// Defaults: precision [`DateUnit::Day`] (an exact copy), rounding
    /// [`Rounding::Down`].  `Nearest` uses fixed thresholds: day 15 when
    /// rounding to the month and month 6 when rounding to the year.
    ///
    /// ```
    /// use civtime::{CalendarDate, DateUnit, Rounding};
    ///
    /// let d = CalendarDate::new(2021, 3, 23);
    /// let r = d.round((DateUnit::Month, Rounding::Nearest));
    /// assert_eq!((r.year(), r.month(), r.day()), (2021, 4, 1));
    /// ```
    #[must_use]
    pub fn round(&self, options: impl Into<RoundingOptions<DateUnit>>) -> Self {
        let (precision, rounding) = options.into().resolve(DateUnit::Day, Rounding::Down);
        self.round_to(precision, rounding)
    }

    fn round_to(&self, precision: DateUnit, rounding: Rounding) -> Self {
        match precision {
            DateUnit::Day => *self,
            DateUnit::Month => {
                let r = self.round_to(DateUnit::Day, rounding);
                let carry = rounding.carry(r.field(DateUnit::Day), 1, MONTH_MIDPOINT_DAY, 1);
                Self::new(
                    r.field(DateUnit::Year),
                    r.field(DateUnit::Month) + carry,
                    1,
                )
            }
            DateUnit::Year => {
                let r = self.round_to(DateUnit::Month, rounding);
                let carry = rounding.carry(r.field(DateUnit::Month), 1, YEAR_MIDPOINT_MONTH, 1);
                Self::new(r.field(DateUnit::Year) + carry, 1, 1)
            }
        }
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Apply one step or an ordered sequence of steps (default: one day).
    ///
    /// Each step goes through the field setter, so a step's overflow is
    /// already normalised when the next one starts.
    ///
    /// ```
    /// use civtime::{CalendarDate, DateUnit, Step};
    ///
    /// let d = CalendarDate::new(2021, 3, 23).add([
    ///     Step::new(DateUnit::Day, 1),
    ///     Step::new(DateUnit::Month, 1),
    ///     Step::new(DateUnit::Year, 1),
    /// ]);
    /// assert_eq!(d.to_string(), "24/04/2022");
    /// ```
    #[must_use]
    pub fn add(self, steps: impl IntoSteps<DateUnit>) -> Self {
        let mut out = self;
        for step in steps.into_steps() {
            let current = out.field(step.unit);
            out.set_field(step.unit, current.saturating_add(step.value));
        }
        out
    }

    /// [`CalendarDate::add`] with every step's value negated.
    #[must_use]
    pub fn subtract(self, steps: impl IntoSteps<DateUnit>) -> Self {
        let negated: Vec<_> = steps.into_steps().into_iter().map(|s| s.negated()).collect();
        self.add(negated)
    }

    /// Whole days from `self` to `other` (negative when `other` is earlier).
    pub fn days_until(&self, other: &Self) -> Days {
        *other - *self
    }

    // ── comparison ────────────────────────────────────────────────────
    //
    // Both operands are rounded with the same options before comparing the
    // (year, month, day) tuples.  Defaults: precision day, rounding down.

    fn rounded_pair(
        &self,
        other: &Self,
        options: impl Into<RoundingOptions<DateUnit>>,
    ) -> ((i32, u32, u32), (i32, u32, u32)) {
        let (precision, rounding) = options.into().resolve(DateUnit::Day, Rounding::Down);
        let a = self.round_to(precision, rounding);
        let b = other.round_to(precision, rounding);
        (
            (a.year(), a.month(), a.day()),
            (b.year(), b.month(), b.day()),
        )
    }

    pub fn equals(&self, other: &Self, options: impl Into<RoundingOptions<DateUnit>>) -> bool {
        let (a, b) = self.rounded_pair(other, options);
        a == b
    }

    pub fn is_before(&self, other: &Self, options: impl Into<RoundingOptions<DateUnit>>) -> bool {
        let (a, b) = self.rounded_pair(other, options);
        a < b
    }

    pub fn is_after(&self, other: &Self, options: impl Into<RoundingOptions<DateUnit>>) -> bool {
        let (a, b) = self.rounded_pair(other, options);
        a > b
    }

    /// Inclusive of both bounds; `start` and `end` may come in either order.
    pub fn is_between(
        &self,
        start: &Self,
        end: &Self,
        options: impl Into<RoundingOptions<DateUnit>>,
    ) -> bool {
        let options = options.into();
        self.equals(start, options)
            || self.equals(end, options)
            || (self.is_after(start, options) && self.is_before(end, options))
            || (self.is_after(end, options) && self.is_before(start, options))
    }

    // ── readouts ──────────────────────────────────────────────────────

    /// Render with one of the four [`DateFormat`] layouts.
    pub fn to_readable(&self, format: DateFormat) -> String {
        let day = pad(self.field(DateUnit::Day), 2);
        let month = pad(self.field(DateUnit::Month), 2);
        let year = pad(self.field(DateUnit::Year), 4);
        match format {
            DateFormat::DayMonthYear => format!("{day}/{month}/{year}"),
            DateFormat::MonthDayYear => format!("{month}/{day}/{year}"),
            DateFormat::YearMonthDay => format!("{year}/{month}/{day}"),
            DateFormat::MonthNameDayYear => format!("{} {day}, {year}", self.month_name()),
        }
    }
}

/// Proleptic year 0, January 1st.
impl Default for CalendarDate {
    fn default() -> Self {
        Self::new(0, 1, 1)
    }
}

impl Tagged for CalendarDate {
    const KIND: crate::value::ValueKind = crate::value::ValueKind::CalendarDate;
}

/// Carries months into years, then adds `day − 1` days to the first of the
/// resulting month.  Saturates at chrono's representable range.
fn normalize(year: i64, month: i64, day: i64) -> NaiveDate {
    let months = year
        .saturating_mul(12)
        .saturating_add(month.saturating_sub(1));
    let (y, m) = (months.div_euclid(12), months.rem_euclid(12) + 1);

    let first = i32::try_from(y)
        .ok()
        .and_then(|y| NaiveDate::from_ymd_opt(y, m as u32, 1));
    let normalized = first.and_then(|first| {
        TimeDelta::try_days(day.saturating_sub(1)).and_then(|offset| first.checked_add_signed(offset))
    });

    normalized.unwrap_or_else(|| {
        let saturated = match first {
            Some(_) if day < 1 => NaiveDate::MIN,
            Some(_) => NaiveDate::MAX,
            None if y < 0 => NaiveDate::MIN,
            None => NaiveDate::MAX,
        };
        crate::log_event!(
            warn,
            "date ({}, {}, {}) is out of range; saturating to {}",
            year,
            month,
            day,
            saturated
        );
        saturated
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversions and operators
// ═══════════════════════════════════════════════════════════════════════════

impl From<NaiveDate> for CalendarDate {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl From<CalendarDate> for NaiveDate {
    #[inline]
    fn from(date: CalendarDate) -> Self {
        date.date
    }
}

impl Sub for CalendarDate {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Days::new((self.date - rhs.date).num_days() as f64)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_readable(DateFormat::default()))
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("CalendarDate", 2)?;
        s.serialize_field("kind", &ValueKind::CalendarDate)?;
        s.serialize_field("date", &self.date)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            kind: Option<ValueKind>,
            date: NaiveDate,
        }

        let raw = Raw::deserialize(deserializer)?;
        match raw.kind {
            Some(kind) if kind != ValueKind::CalendarDate => Err(serde::de::Error::custom(
                format!("expected a `calendar_date` snapshot, found `{kind}`"),
            )),
            _ => Ok(Self::from(raw.date)),
        }
    }
}

#[cfg(feature = "serde")]
impl CalendarDate {
    /// Structural snapshot: the kind tag and the ISO-8601 date.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": ValueKind::CalendarDate,
            "date": self.date,
        })
    }

    /// Rebuild from a [`CalendarDate::to_json`] snapshot.
    ///
    /// Fails with [`Error::InvalidInput`] when `date` is absent or unparseable.
    pub fn from_json(json: &serde_json::Value) -> crate::Result<Self> {
        Self::deserialize(json).map_err(|err| {
            crate::log_event!(debug, "rejected calendar_date snapshot: {}", err);
            Error::invalid_input(err.to_string())
        })
    }

    /// [`CalendarDate::from_json`] on a JSON document.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|err| Error::invalid_input(err.to_string()))?;
        Self::from_json(&value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
