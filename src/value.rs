// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Runtime kind tags and the heterogeneous [`Value`] wrapper.

use std::cmp::Ordering;
use std::fmt;

use crate::clock::{ClockDelta, ClockTime};
use crate::date::CalendarDate;

#[cfg(feature = "serde")]
use crate::error::Error;
#[cfg(feature = "serde")]
use serde::Deserialize;

/// Which of the three value types something is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ValueKind {
    CalendarDate,
    ClockTime,
    ClockDelta,
}

impl ValueKind {
    /// The lowercase tag used in snapshots.
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::CalendarDate => "calendar_date",
            ValueKind::ClockTime => "clock_time",
            ValueKind::ClockDelta => "clock_delta",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Types carrying a static [`ValueKind`].
pub trait Tagged {
    const KIND: ValueKind;

    /// `true` when `other` holds the same kind as `Self`.
    ///
    /// ```
    /// use civtime::{CalendarDate, ClockTime, Tagged, Value};
    ///
    /// let d = CalendarDate::new(2021, 3, 23);
    /// assert!(d.type_of(&Value::from(CalendarDate::default())));
    /// assert!(!d.type_of(&Value::from(ClockTime::default())));
    /// ```
    fn type_of(&self, other: &Value) -> bool {
        other.kind() == Self::KIND
    }
}

/// Any one of the three value types.
///
/// Values of different kinds are unordered: `partial_cmp` returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    Date(CalendarDate),
    Time(ClockTime),
    Delta(ClockDelta),
}

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Date(_) => ValueKind::CalendarDate,
            Value::Time(_) => ValueKind::ClockTime,
            Value::Delta(_) => ValueKind::ClockDelta,
        }
    }

    #[inline]
    pub fn same_kind(&self, other: &Value) -> bool {
        self.kind() == other.kind()
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Time(a), Value::Time(b)) => Some(a.cmp(b)),
            (Value::Delta(a), Value::Delta(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl From<CalendarDate> for Value {
    fn from(value: CalendarDate) -> Self {
        Value::Date(value)
    }
}

impl From<ClockTime> for Value {
    fn from(value: ClockTime) -> Self {
        Value::Time(value)
    }
}

impl From<ClockDelta> for Value {
    fn from(value: ClockDelta) -> Self {
        Value::Delta(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Date(v) => v.fmt(f),
            Value::Time(v) => v.fmt(f),
            Value::Delta(v) => v.fmt(f),
        }
    }
}

#[cfg(feature = "serde")]
impl Value {
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Date(v) => v.to_json(),
            Value::Time(v) => v.to_json(),
            Value::Delta(v) => v.to_json(),
        }
    }

    /// Rebuild from any snapshot, dispatching on its `kind` tag.
    ///
    /// Unlike the per-type constructors, the tag is mandatory here.
    pub fn from_json(json: &serde_json::Value) -> crate::Result<Self> {
        let tag = json
            .get("kind")
            .ok_or_else(|| Error::invalid_input("snapshot has no `kind` tag"))?;
        let kind = ValueKind::deserialize(tag)
            .map_err(|err| Error::invalid_input(format!("unknown kind: {err}")))?;
        Ok(match kind {
            ValueKind::CalendarDate => Value::Date(CalendarDate::from_json(json)?),
            ValueKind::ClockTime => Value::Time(ClockTime::from_json(json)?),
            ValueKind::ClockDelta => Value::Delta(ClockDelta::from_json(json)?),
        })
    }

    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|err| Error::invalid_input(err.to_string()))?;
        Self::from_json(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_identify_their_values() {
        let d = Value::from(CalendarDate::new(2021, 3, 23));
        let t = Value::from(ClockTime::new(1, 2, 3, 4));
        let e = Value::from(ClockDelta::new(1, 2, 3, 4));
        assert_eq!(d.kind(), ValueKind::CalendarDate);
        assert_eq!(t.kind(), ValueKind::ClockTime);
        assert_eq!(e.kind(), ValueKind::ClockDelta);
        assert!(!t.same_kind(&e));
        assert!(ClockTime::default().type_of(&t));
        assert!(!ClockTime::default().type_of(&e));
        assert!(ClockDelta::default().type_of(&e));
        assert_eq!(<ClockDelta as Tagged>::KIND.to_string(), "clock_delta");
    }

    #[test]
    fn mixed_kinds_are_unordered() {
        let t = Value::from(ClockTime::new(1, 0, 0, 0));
        let e = Value::from(ClockDelta::new(1, 0, 0, 0));
        assert_eq!(t.partial_cmp(&e), None);
        assert_ne!(t, e);

        let later = Value::from(ClockTime::new(2, 0, 0, 0));
        assert!(t < later);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_dispatches_on_kind() {
        for value in [
            Value::from(CalendarDate::new(2021, 3, 23)),
            Value::from(ClockTime::new(1, 2, 3, 4)),
            Value::from(ClockDelta::new(-1, -2, -3, -4)),
        ] {
            let json = value.to_json();
            assert_eq!(Value::from_json(&json).unwrap(), value);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_requires_a_known_kind() {
        let untagged = serde_json::json!({ "millis": 5 });
        assert!(matches!(Value::from_json(&untagged), Err(Error::InvalidInput(_))));
        let unknown = serde_json::json!({ "kind": "fortnight", "millis": 5 });
        assert!(Value::from_json(&unknown).is_err());
        assert!(Value::from_json_str("not json").is_err());
    }
}
