// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Parameter objects shared by the date and clock families.
//!
//! Every option is optional at the call site; each operation resolves the
//! missing pieces to its own documented default.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

// ═══════════════════════════════════════════════════════════════════════════
// Rounding mode
// ═══════════════════════════════════════════════════════════════════════════

/// How a value is settled at a precision level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Always carry one unit, even when the finer field is already at rest.
    Up,
    /// Drop the finer field.
    #[default]
    Down,
    /// Carry one unit when the finer field reaches a fixed midpoint.
    Nearest,
}

impl Rounding {
    /// Units to carry into the coarser field.
    ///
    /// `finer` is the already-rounded next-finer field, `minimum` its resting
    /// value and `midpoint` the threshold used by [`Rounding::Nearest`].
    /// `sign` is the sign of the whole value (`-1` or `1`); [`Rounding::Up`]
    /// carries one unit in that direction.  `Nearest` decides on the
    /// magnitude of the offset and carries with the offset's sign.
    #[inline]
    pub(crate) fn carry(self, finer: i64, minimum: i64, midpoint: i64, sign: i64) -> i64 {
        let offset = finer - minimum;
        match self {
            Self::Down => 0,
            Self::Up => sign,
            Self::Nearest if offset.abs() >= midpoint - minimum => offset.signum(),
            Self::Nearest => 0,
        }
    }
}

impl FromStr for Rounding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "nearest" => Ok(Self::Nearest),
            _ => Err(Error::invalid_input(format!("unknown rounding mode `{s}`"))),
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Nearest => "nearest",
        }
        .fmt(f)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Units
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar precision levels, ordered coarse → fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateUnit {
    Year,
    Month,
    Day,
}

impl FromStr for DateUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "y" | "year" | "years" => Ok(Self::Year),
            "m" | "month" | "months" => Ok(Self::Month),
            "d" | "day" | "days" => Ok(Self::Day),
            _ => Err(Error::invalid_input(format!("unknown date unit `{s}`"))),
        }
    }
}

impl fmt::Display for DateUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year => "y",
            Self::Month => "m",
            Self::Day => "d",
        }
        .fmt(f)
    }
}

/// Clock precision levels, ordered coarse → fine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClockUnit {
    Hour,
    Minute,
    Second,
    Millisecond,
}

impl ClockUnit {
    /// Length of one unit in milliseconds.
    #[inline]
    pub const fn millis(self) -> i64 {
        match self {
            Self::Hour => crate::linear::MS_PER_HOUR,
            Self::Minute => crate::linear::MS_PER_MINUTE,
            Self::Second => crate::linear::MS_PER_SECOND,
            Self::Millisecond => 1,
        }
    }
}

impl FromStr for ClockUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "h" | "hour" | "hours" => Ok(Self::Hour),
            "m" | "minute" | "minutes" => Ok(Self::Minute),
            "s" | "second" | "seconds" => Ok(Self::Second),
            "ms" | "millisecond" | "milliseconds" => Ok(Self::Millisecond),
            _ => Err(Error::invalid_input(format!("unknown clock unit `{s}`"))),
        }
    }
}

impl fmt::Display for ClockUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hour => "h",
            Self::Minute => "m",
            Self::Second => "s",
            Self::Millisecond => "ms",
        }
        .fmt(f)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Rounding / comparison options
// ═══════════════════════════════════════════════════════════════════════════

/// Precision and rounding mode for `round` and the comparison family.
///
/// ```
/// use civtime::{ClockUnit, Rounding, RoundingOptions};
///
/// let explicit = RoundingOptions::new(ClockUnit::Second, Rounding::Up);
/// let from_unit: RoundingOptions<ClockUnit> = ClockUnit::Second.into();
/// assert_eq!(explicit.precision, from_unit.precision);
/// assert_eq!(from_unit.rounding, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundingOptions<U> {
    /// The precision level to settle at.
    pub precision: Option<U>,
    /// The rounding mode used at every level of the cascade.
    pub rounding: Option<Rounding>,
}

impl<U> Default for RoundingOptions<U> {
    fn default() -> Self {
        Self {
            precision: None,
            rounding: None,
        }
    }
}

impl<U: Copy> RoundingOptions<U> {
    /// Fully specified options.
    pub const fn new(precision: U, rounding: Rounding) -> Self {
        Self {
            precision: Some(precision),
            rounding: Some(rounding),
        }
    }

    /// Fills missing fields with the caller's defaults.
    #[inline]
    pub(crate) fn resolve(self, precision: U, rounding: Rounding) -> (U, Rounding) {
        (
            self.precision.unwrap_or(precision),
            self.rounding.unwrap_or(rounding),
        )
    }
}

impl From<DateUnit> for RoundingOptions<DateUnit> {
    fn from(precision: DateUnit) -> Self {
        Self {
            precision: Some(precision),
            rounding: None,
        }
    }
}

impl From<ClockUnit> for RoundingOptions<ClockUnit> {
    fn from(precision: ClockUnit) -> Self {
        Self {
            precision: Some(precision),
            rounding: None,
        }
    }
}

impl<U: Copy> From<(U, Rounding)> for RoundingOptions<U> {
    fn from((precision, rounding): (U, Rounding)) -> Self {
        Self::new(precision, rounding)
    }
}

impl<U> From<Rounding> for RoundingOptions<U> {
    fn from(rounding: Rounding) -> Self {
        Self {
            precision: None,
            rounding: Some(rounding),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Arithmetic steps
// ═══════════════════════════════════════════════════════════════════════════

/// One `add`/`subtract` instruction: move `unit` by `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step<U> {
    pub unit: U,
    pub value: i64,
}

impl<U> Step<U> {
    pub const fn new(unit: U, value: i64) -> Self {
        Self { unit, value }
    }

    #[inline]
    pub(crate) fn negated(self) -> Self {
        Self {
            unit: self.unit,
            value: self.value.saturating_neg(),
        }
    }
}

/// One day.
impl Default for Step<DateUnit> {
    fn default() -> Self {
        Self::new(DateUnit::Day, 1)
    }
}

/// One second.
impl Default for Step<ClockUnit> {
    fn default() -> Self {
        Self::new(ClockUnit::Second, 1)
    }
}

impl From<DateUnit> for Step<DateUnit> {
    fn from(unit: DateUnit) -> Self {
        Self::new(unit, 1)
    }
}

impl From<ClockUnit> for Step<ClockUnit> {
    fn from(unit: ClockUnit) -> Self {
        Self::new(unit, 1)
    }
}

/// Anything that can drive `add`/`subtract`: a single step or an ordered
/// sequence of steps applied one after the other.
pub trait IntoSteps<U> {
    type Steps: IntoIterator<Item = Step<U>>;

    fn into_steps(self) -> Self::Steps;
}

impl<U> IntoSteps<U> for Step<U> {
    type Steps = std::iter::Once<Step<U>>;

    fn into_steps(self) -> Self::Steps {
        std::iter::once(self)
    }
}

impl<U> IntoSteps<U> for (U, i64) {
    type Steps = std::iter::Once<Step<U>>;

    fn into_steps(self) -> Self::Steps {
        std::iter::once(Step::new(self.0, self.1))
    }
}

impl<U> IntoSteps<U> for Vec<Step<U>> {
    type Steps = Self;

    fn into_steps(self) -> Self::Steps {
        self
    }
}

impl<U, const N: usize> IntoSteps<U> for [Step<U>; N] {
    type Steps = Self;

    fn into_steps(self) -> Self::Steps {
        self
    }
}

impl<'a, U: Copy> IntoSteps<U> for &'a [Step<U>] {
    type Steps = std::iter::Copied<std::slice::Iter<'a, Step<U>>>;

    fn into_steps(self) -> Self::Steps {
        self.iter().copied()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Readout options
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar readout layouts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `DD/MM/YYYY`
    #[default]
    DayMonthYear,
    /// `MM/DD/YYYY`
    MonthDayYear,
    /// `YYYY/MM/DD`
    YearMonthDay,
    /// `Month DD, YYYY`
    MonthNameDayYear,
}

impl FromStr for DateFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "DD/MM/YYYY" => Ok(Self::DayMonthYear),
            "MM/DD/YYYY" => Ok(Self::MonthDayYear),
            "YYYY/MM/DD" => Ok(Self::YearMonthDay),
            "Month DD, YYYY" => Ok(Self::MonthNameDayYear),
            _ => Err(Error::invalid_input(format!("unknown date format `{s}`"))),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::YearMonthDay => "YYYY/MM/DD",
            Self::MonthNameDayYear => "Month DD, YYYY",
        }
        .fmt(f)
    }
}

/// Options for the colon-joined digital clock readout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitalOptions {
    /// 24-hour mode without an `AM`/`PM` suffix.
    pub military: bool,
    /// Finest field to print.
    pub precision: Option<ClockUnit>,
}

impl From<ClockUnit> for DigitalOptions {
    fn from(precision: ClockUnit) -> Self {
        Self {
            military: false,
            precision: Some(precision),
        }
    }
}

/// Options for the worded duration readout.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReadableOptions {
    /// Finest field to print.
    pub precision: Option<ClockUnit>,
    /// Spell out unit names (`"2 minutes"` instead of `"2m"`).
    pub verbose: bool,
    /// Print zero-valued fields too.
    pub include_zeroes: bool,
}

impl From<ClockUnit> for ReadableOptions {
    fn from(precision: ClockUnit) -> Self {
        Self {
            precision: Some(precision),
            ..Self::default()
        }
    }
}
