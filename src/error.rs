// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for the kalends crate.

/// Error type for all fallible conversions in the crate.
///
/// Every failure is local to a single conversion call and is surfaced
/// to the immediate caller; nothing here is fatal to a host process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when an input lies outside its documented domain
    /// (time-of-day component out of bounds, fractional digits above
    /// 100, a negative Julian day time, ...).
    #[error("invalid parameter: {what}")]
    InvalidParameter {
        /// Which domain constraint was violated.
        what: &'static str,
    },

    /// Returned when a (month, day, leap-year) combination fails the
    /// standard days-in-month check.
    #[error("invalid date components: month {month}, day {day} (leap year: {leap})")]
    InvalidDateComponents {
        /// The month number that was provided.
        month: u8,
        /// The day number that was provided.
        day: u8,
        /// Whether the year was treated as a leap year.
        leap: bool,
    },

    /// Returned when a civil date falls outside the range the Julian
    /// day formulas support (before -4713-11-24, or too far in the
    /// future to count whole days in 64 bits).
    #[error("date {year}-{month:02}-{day:02} is outside the supported Julian day range")]
    DateOutOfRange {
        /// Astronomical year number of the rejected date.
        year: i64,
        /// Month of the rejected date.
        month: u8,
        /// Day of the rejected date.
        day: u8,
    },
}
