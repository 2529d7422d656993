// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock-kind marker types.
//!
//! Each zero-sized type identifies what a [`Clock`](crate::Clock) count
//! *means*; the count itself is interpreted identically by both.
//!
//! | Marker | Alias | Meaning |
//! |--------|-------|---------|
//! | [`TimeOfDay`] | [`ClockTime`](crate::ClockTime) | milliseconds since midnight |
//! | [`Elapsed`] | [`ClockDelta`](crate::ClockDelta) | signed elapsed duration |

use crate::value::ValueKind;
use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for clock kinds.
pub trait ClockKind:
    Copy + Clone + Debug + Default + PartialEq + Eq + PartialOrd + Ord + Hash + 'static
{
    /// Runtime tag carried across the serialisation boundary.
    const KIND: ValueKind;
}

/// Absolute time of day, counted from midnight.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay;

impl ClockKind for TimeOfDay {
    const KIND: ValueKind = ValueKind::ClockTime;
}

/// Signed elapsed duration.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Elapsed;

impl ClockKind for Elapsed {
    const KIND: ValueKind = ValueKind::ClockDelta;
}
