// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Generic kind-parameterised clock value.
//!
//! [`Clock<K>`] stores a single signed millisecond count whose *meaning* is
//! determined by the compile-time marker `K: ClockKind`.  Decomposition,
//! cascading rounding, unit arithmetic, comparison and serialisation are
//! implemented generically; behaviour that only makes sense for one kind
//! (12-hour readouts for [`ClockTime`], worded readouts for [`ClockDelta`])
//! lives in inherent `impl` blocks gated on the concrete marker.

use crate::kinds::{ClockKind, Elapsed, TimeOfDay};
use crate::linear::LinearMillis;
use crate::options::{ClockUnit, IntoSteps, Rounding, RoundingOptions, Step};
use crate::value::Tagged;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use crate::{error::Error, value::ValueKind};
#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Time of day, counted in milliseconds from midnight.
pub type ClockTime = Clock<TimeOfDay>;

/// Signed elapsed duration in milliseconds.
pub type ClockDelta = Clock<Elapsed>;

/// A clock reading of kind `K`.
///
/// All four component getters are derived from one linear count and always
/// share its sign.  Ordering and hashing use the exact count; use
/// [`Clock::equals`] and friends for precision-aware comparison.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clock<K: ClockKind> {
    millis: LinearMillis,
    _kind: PhantomData<K>,
}

impl<K: ClockKind> Clock<K> {
    // ── constructors ──────────────────────────────────────────────────

    /// Create from component fields; fields may be out of range or mixed-sign.
    #[inline]
    pub const fn new(hours: i64, minutes: i64, seconds: i64, milliseconds: i64) -> Self {
        Self::from_linear(LinearMillis::from_fields(
            hours,
            minutes,
            seconds,
            milliseconds,
        ))
    }

    /// Create from a raw linear millisecond count.
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Self::from_linear(LinearMillis::new(millis))
    }

    #[inline]
    pub(crate) const fn from_linear(millis: LinearMillis) -> Self {
        Self {
            millis,
            _kind: PhantomData,
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn hours(&self) -> i64 {
        self.millis.hours()
    }

    /// Minutes within the hour.
    #[inline]
    pub const fn minutes(&self) -> i64 {
        self.millis.minutes()
    }

    /// Whole minutes in the full count.
    #[inline]
    pub const fn raw_minutes(&self) -> i64 {
        self.millis.raw_minutes()
    }

    /// Seconds within the minute.
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.millis.seconds()
    }

    /// Whole seconds in the full count.
    #[inline]
    pub const fn raw_seconds(&self) -> i64 {
        self.millis.raw_seconds()
    }

    /// Milliseconds within the second.
    #[inline]
    pub const fn milliseconds(&self) -> i64 {
        self.millis.milliseconds()
    }

    /// The linear count itself.
    #[inline]
    pub const fn raw_milliseconds(&self) -> i64 {
        self.millis.count()
    }

    /// The component field that `unit` addresses.
    #[inline]
    pub const fn field(&self, unit: ClockUnit) -> i64 {
        self.millis.field(unit)
    }

    /// `(hours, minutes, seconds, milliseconds)`.
    #[inline]
    pub const fn fields(&self) -> (i64, i64, i64, i64) {
        self.millis.fields()
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.millis.count() < 0
    }

    // ── setters ───────────────────────────────────────────────────────
    //
    // Each setter swaps the field's contribution to the count; every other
    // getter is recomputed on the next read, so `t.set_minutes(t.minutes() + 65)`
    // may change `hours()`.

    pub fn set_hours(&mut self, hours: i64) {
        self.millis.set_field(ClockUnit::Hour, hours);
    }

    pub fn set_minutes(&mut self, minutes: i64) {
        self.millis.set_field(ClockUnit::Minute, minutes);
    }

    pub fn set_seconds(&mut self, seconds: i64) {
        self.millis.set_field(ClockUnit::Second, seconds);
    }

    pub fn set_milliseconds(&mut self, milliseconds: i64) {
        self.millis.set_field(ClockUnit::Millisecond, milliseconds);
    }

    /// Copy with `unit`'s field replaced by `value`.
    #[must_use]
    pub fn with_field(&self, unit: ClockUnit, value: i64) -> Self {
        let mut out = *self;
        out.millis.set_field(unit, value);
        out
    }

    #[must_use]
    pub fn with_hours(&self, hours: i64) -> Self {
        self.with_field(ClockUnit::Hour, hours)
    }

    #[must_use]
    pub fn with_minutes(&self, minutes: i64) -> Self {
        self.with_field(ClockUnit::Minute, minutes)
    }

    #[must_use]
    pub fn with_seconds(&self, seconds: i64) -> Self {
        self.with_field(ClockUnit::Second, seconds)
    }

    #[must_use]
    pub fn with_milliseconds(&self, milliseconds: i64) -> Self {
        self.with_field(ClockUnit::Millisecond, milliseconds)
    }

    // ── rounding ──────────────────────────────────────────────────────

    /// Absolute value of every component.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_linear(self.millis.abs())
    }

    /// Round to a precision level, settling every finer level first.
    ///
    /// Defaults: precision [`ClockUnit::Millisecond`] (an exact copy),
    /// rounding [`Rounding::Nearest`].
    ///
    /// ```
    /// use civtime::{ClockTime, ClockUnit};
    ///
    /// let t = ClockTime::new(1, 29, 29, 500);
    /// assert_eq!(t.round(ClockUnit::Second).fields(), (1, 29, 30, 0));
    /// assert_eq!(t.round(ClockUnit::Hour).fields(), (2, 0, 0, 0));
    /// ```
    #[must_use]
    pub fn round(&self, options: impl Into<RoundingOptions<ClockUnit>>) -> Self {
        let (precision, rounding) = options
            .into()
            .resolve(ClockUnit::Millisecond, Rounding::Nearest);
        self.round_to(precision, rounding)
    }

    #[inline]
    fn round_to(&self, precision: ClockUnit, rounding: Rounding) -> Self {
        Self::from_linear(self.millis.round(precision, rounding))
    }

    // ── arithmetic ────────────────────────────────────────────────────

    /// Apply one step or an ordered sequence of steps (default: one second).
    ///
    /// Steps run one after another through the field setters, so each step
    /// starts from the previous step's renormalised value.  A [`ClockDelta`]
    /// is accepted too and applies all four of its components.
    ///
    /// ```
    /// use civtime::ClockDelta;
    ///
    /// let sum = ClockDelta::new(1, 2, 3, 4).add(ClockDelta::new(-2, -3, -4, -5));
    /// assert_eq!(sum.to_digital(None), "-01:01");
    /// ```
    #[must_use]
    pub fn add(self, steps: impl IntoSteps<ClockUnit>) -> Self {
        let mut out = self;
        for step in steps.into_steps() {
            let current = out.millis.field(step.unit);
            out.millis
                .set_field(step.unit, current.saturating_add(step.value));
        }
        out
    }

    /// [`Clock::add`] with every step's value negated.
    #[must_use]
    pub fn subtract(self, steps: impl IntoSteps<ClockUnit>) -> Self {
        let negated: Vec<_> = steps.into_steps().into_iter().map(|s| s.negated()).collect();
        self.add(negated)
    }

    /// Componentwise sum with a duration.
    #[must_use]
    pub fn add_delta(&self, delta: &ClockDelta) -> Self {
        Self::new(
            self.hours() + delta.hours(),
            self.minutes() + delta.minutes(),
            self.seconds() + delta.seconds(),
            self.milliseconds() + delta.milliseconds(),
        )
    }

    /// Componentwise difference with a duration.
    #[must_use]
    pub fn subtract_delta(&self, delta: &ClockDelta) -> Self {
        Self::new(
            self.hours() - delta.hours(),
            self.minutes() - delta.minutes(),
            self.seconds() - delta.seconds(),
            self.milliseconds() - delta.milliseconds(),
        )
    }

    // ── comparison ────────────────────────────────────────────────────
    //
    // Both operands are rounded with the same options before comparing.
    // Defaults: precision milliseconds, rounding down.

    fn rounded_pair(
        &self,
        other: &Self,
        options: impl Into<RoundingOptions<ClockUnit>>,
    ) -> ((i64, i64, i64, i64), (i64, i64, i64, i64)) {
        let (precision, rounding) = options
            .into()
            .resolve(ClockUnit::Millisecond, Rounding::Down);
        (
            self.round_to(precision, rounding).fields(),
            other.round_to(precision, rounding).fields(),
        )
    }

    pub fn equals(&self, other: &Self, options: impl Into<RoundingOptions<ClockUnit>>) -> bool {
        let (a, b) = self.rounded_pair(other, options);
        a == b
    }

    pub fn is_before(&self, other: &Self, options: impl Into<RoundingOptions<ClockUnit>>) -> bool {
        let (a, b) = self.rounded_pair(other, options);
        a < b
    }

    pub fn is_after(&self, other: &Self, options: impl Into<RoundingOptions<ClockUnit>>) -> bool {
        let (a, b) = self.rounded_pair(other, options);
        a > b
    }

    /// Inclusive of both bounds; `start` and `end` may come in either order.
    pub fn is_between(
        &self,
        start: &Self,
        end: &Self,
        options: impl Into<RoundingOptions<ClockUnit>>,
    ) -> bool {
        let options = options.into();
        self.equals(start, options)
            || self.equals(end, options)
            || (self.is_after(start, options) && self.is_before(end, options))
            || (self.is_after(end, options) && self.is_before(start, options))
    }
}

impl<K: ClockKind> Tagged for Clock<K> {
    const KIND: crate::value::ValueKind = K::KIND;
}

/// A duration drives `add`/`subtract` as its four component steps.
impl IntoSteps<ClockUnit> for ClockDelta {
    type Steps = [Step<ClockUnit>; 4];

    fn into_steps(self) -> Self::Steps {
        let (hours, minutes, seconds, millis) = self.fields();
        [
            Step::new(ClockUnit::Hour, hours),
            Step::new(ClockUnit::Minute, minutes),
            Step::new(ClockUnit::Second, seconds),
            Step::new(ClockUnit::Millisecond, millis),
        ]
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Operators
// ═══════════════════════════════════════════════════════════════════════════

impl<K: ClockKind> Add<ClockDelta> for Clock<K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: ClockDelta) -> Self::Output {
        self.add_delta(&rhs)
    }
}

impl<K: ClockKind> AddAssign<ClockDelta> for Clock<K> {
    #[inline]
    fn add_assign(&mut self, rhs: ClockDelta) {
        *self = self.add_delta(&rhs);
    }
}

impl<K: ClockKind> Sub<ClockDelta> for Clock<K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: ClockDelta) -> Self::Output {
        self.subtract_delta(&rhs)
    }
}

impl<K: ClockKind> SubAssign<ClockDelta> for Clock<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: ClockDelta) {
        *self = self.subtract_delta(&rhs);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serde
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
impl<K: ClockKind> Serialize for Clock<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Clock", 2)?;
        s.serialize_field("kind", &K::KIND)?;
        s.serialize_field("millis", &self.raw_milliseconds())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, K: ClockKind> Deserialize<'de> for Clock<K> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            kind: Option<ValueKind>,
            millis: i64,
        }

        let raw = Raw::deserialize(deserializer)?;
        match raw.kind {
            Some(kind) if kind != K::KIND => Err(serde::de::Error::custom(format!(
                "expected a `{}` snapshot, found `{kind}`",
                K::KIND
            ))),
            _ => Ok(Self::from_millis(raw.millis)),
        }
    }
}

#[cfg(feature = "serde")]
impl<K: ClockKind> Clock<K> {
    /// Structural snapshot: the kind tag and the linear count.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "kind": K::KIND,
            "millis": self.raw_milliseconds(),
        })
    }

    /// Rebuild from a [`Clock::to_json`] snapshot.
    ///
    /// Fails with [`Error::InvalidInput`] when `millis` is absent or the
    /// snapshot belongs to another kind.
    pub fn from_json(json: &serde_json::Value) -> crate::Result<Self> {
        Self::deserialize(json).map_err(|err| {
            crate::log_event!(debug, "rejected {} snapshot: {}", K::KIND, err);
            Error::invalid_input(err.to_string())
        })
    }

    /// [`Clock::from_json`] on a JSON document.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|err| Error::invalid_input(err.to_string()))?;
        Self::from_json(&value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Step;

    #[test]
    fn getters_split_the_count() {
        let d = ClockDelta::new(1, 2, 3, 4);
        assert_eq!(d.hours(), 1);
        assert_eq!(d.minutes(), 2);
        assert_eq!(d.raw_minutes(), 62);
        assert_eq!(d.seconds(), 3);
        assert_eq!(d.raw_seconds(), 3_723);
        assert_eq!(d.milliseconds(), 4);
        assert_eq!(d.raw_milliseconds(), 3_723_004);
    }

    #[test]
    fn setters_build_the_same_value_as_new() {
        let mut t = ClockTime::default();
        t.set_hours(1);
        t.set_minutes(2);
        t.set_seconds(3);
        t.set_milliseconds(4);
        assert_eq!(t, ClockTime::new(1, 2, 3, 4));
        assert_eq!(t.with_minutes(65).fields(), (2, 5, 3, 4));
        assert_eq!(t.fields(), (1, 2, 3, 4));
    }

    #[test]
    fn round_defaults_to_an_exact_copy() {
        let t = ClockTime::new(1, 4, 4, 499);
        assert_eq!(t.round(RoundingOptions::default()), t);
        assert_eq!(t.round(ClockUnit::Second).fields(), (1, 4, 4, 0));
        assert_eq!(t.round(ClockUnit::Minute).fields(), (1, 4, 0, 0));
        assert_eq!(t.round(ClockUnit::Hour).fields(), (1, 0, 0, 0));
        assert_eq!(
            t.round((ClockUnit::Hour, Rounding::Up)).fields(),
            (2, 0, 0, 0)
        );
    }

    #[test]
    fn add_and_subtract_by_unit() {
        let t = ClockTime::new(1, 2, 3, 4);
        assert_eq!(t.add(Step::default()).fields(), (1, 2, 4, 4));
        assert_eq!(t.add((ClockUnit::Minute, 1)).fields(), (1, 3, 3, 4));
        assert_eq!(t.add((ClockUnit::Hour, 1)).fields(), (2, 2, 3, 4));
        assert_eq!(
            t.add([
                Step::new(ClockUnit::Second, 1),
                Step::new(ClockUnit::Minute, 1),
                Step::new(ClockUnit::Hour, 1),
            ])
            .fields(),
            (2, 3, 4, 4)
        );
        assert_eq!(t.subtract(Step::default()).fields(), (1, 2, 2, 4));
        assert_eq!(t.subtract((ClockUnit::Hour, 1)).fields(), (0, 2, 3, 4));
        assert_eq!(
            t.subtract(vec![
                Step::new(ClockUnit::Second, 1),
                Step::new(ClockUnit::Minute, 1),
                Step::new(ClockUnit::Hour, 1),
            ])
            .fields(),
            (0, 1, 2, 4)
        );
    }

    #[test]
    fn add_carries_into_coarser_fields() {
        let t = ClockTime::new(0, 59, 59, 999);
        assert_eq!(t.add((ClockUnit::Millisecond, 1)).fields(), (1, 0, 0, 0));
        let steps = [Step::new(ClockUnit::Minute, 90)];
        assert_eq!(t.add(&steps[..]).fields(), (2, 29, 59, 999));
    }

    #[test]
    fn delta_arithmetic_is_componentwise() {
        let d = ClockDelta::new(1, 2, 3, 4);
        let neg = ClockDelta::new(-2, -3, -4, -5);
        assert_eq!(d.add_delta(&neg).fields(), (-1, -1, -1, -1));
        assert_eq!(d + ClockDelta::new(2, 3, 4, 5), ClockDelta::new(3, 5, 7, 9));
        assert_eq!(d - neg, ClockDelta::new(3, 5, 7, 9));

        let mut t = ClockTime::new(10, 0, 0, 0);
        t += ClockDelta::new(0, 90, 0, 0);
        assert_eq!(t.fields(), (11, 30, 0, 0));
        t -= ClockDelta::new(12, 0, 0, 0);
        assert_eq!(t.fields(), (0, -30, 0, 0));
    }

    #[test]
    fn add_and_subtract_accept_a_delta() {
        let d = ClockDelta::new(1, 2, 3, 4);
        let neg = ClockDelta::new(-2, -3, -4, -5);
        let sum = d.add(neg);
        assert_eq!(sum, d.add_delta(&neg));
        assert_eq!(sum.fields(), (-1, -1, -1, -1));
        assert_eq!(d.subtract(neg), d - neg);

        let t = ClockTime::new(10, 0, 0, 0);
        assert_eq!(t.add(ClockDelta::new(0, 90, 0, 0)).fields(), (11, 30, 0, 0));
        assert_eq!(t.subtract(ClockDelta::new(0, 90, 0, 0)).fields(), (8, 30, 0, 0));
    }

    #[test]
    fn subtracting_the_most_negative_step_saturates() {
        let d = ClockDelta::default().subtract((ClockUnit::Millisecond, i64::MIN));
        assert_eq!(d.raw_milliseconds(), i64::MAX);
    }

    #[test]
    fn comparison_honours_precision() {
        let a = ClockTime::new(1, 2, 3, 4);
        let b = ClockTime::new(1, 2, 3, 4);
        let c = ClockTime::new(1, 2, 3, 5);

        assert!(a.equals(&b, RoundingOptions::default()));
        assert!(!a.equals(&c, RoundingOptions::default()));
        assert!(a.equals(&c, ClockUnit::Second));
        assert!(a.equals(&c, ClockUnit::Hour));

        assert!(a.is_before(&c, RoundingOptions::default()));
        assert!(!c.is_before(&a, RoundingOptions::default()));
        assert!(!a.is_before(&c, ClockUnit::Minute));
        assert!(c.is_after(&a, RoundingOptions::default()));
        assert!(!a.is_after(&c, ClockUnit::Minute));
    }

    #[test]
    fn is_between_ignores_bound_order() {
        let early = ClockTime::new(8, 0, 0, 0);
        let mid = ClockTime::new(12, 0, 0, 0);
        let late = ClockTime::new(18, 0, 0, 0);
        let opts = RoundingOptions::default();

        assert!(mid.is_between(&early, &late, opts));
        assert!(mid.is_between(&late, &early, opts));
        assert!(early.is_between(&early, &late, opts));
        assert!(!late.is_between(&early, &mid, opts));
        assert!(!late.is_between(&mid, &early, opts));
    }

    #[test]
    fn abs_drops_the_sign() {
        let d = ClockDelta::new(-1, -2, -3, -4);
        assert!(d.is_negative());
        assert_eq!(d.abs().fields(), (1, 2, 3, 4));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_snapshot_roundtrips() {
        let t = ClockTime::new(1, 2, 3, 4);
        let json = t.to_json();
        assert_eq!(json["millis"], 3_723_004);
        assert_eq!(json["kind"], "clock_time");
        assert_eq!(ClockTime::from_json(&json).unwrap(), t);

        let text = serde_json::to_string(&t).unwrap();
        assert_eq!(ClockTime::from_json_str(&text).unwrap(), t);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_snapshot_requires_millis() {
        let err = ClockTime::from_json(&serde_json::json!({ "kind": "clock_time" })).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(ClockDelta::from_json_str("{}").is_err());
        assert!(ClockDelta::from_json_str("not json").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_snapshot_checks_the_kind_tag() {
        let json = ClockTime::new(1, 0, 0, 0).to_json();
        assert!(ClockDelta::from_json(&json).is_err());
        let untagged = serde_json::json!({ "millis": 42 });
        assert_eq!(ClockDelta::from_json(&untagged).unwrap().raw_milliseconds(), 42);
    }
}
