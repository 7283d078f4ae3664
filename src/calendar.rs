// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar rule sets and leap-year classification.
//!
//! A [`Calendar`] selects one of four proleptic leap-year rules.  The
//! rules are pure functions of the astronomical year number (year 0
//! exists and precedes year 1) and are total: every `i64` year has a
//! defined answer under every calendar.
//!
//! | Calendar | Leap rule |
//! |----------|-----------|
//! | [`Calendar::Gregorian`] | every 4th year, except centuries not divisible by 400 |
//! | [`Calendar::Julian`] | every 4th year, no exception |
//! | [`Calendar::RevisedJulian`] | every 4th year; centuries only when `year mod 900` is 200 or 600 |
//! | [`Calendar::RevisedGoucherParker`] | every 4th year; vetoed when divisible by 128; forced when divisible by 454 545 |
//!
//! Negative years use floor-style modulo (`rem_euclid`), so the
//! remainder is always non-negative and the rules read the same on
//! both sides of year 0.

use crate::civil;

/// One of the four supported calendrical rule sets.
///
/// Used purely as a classification selector; it carries no state.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Calendar {
    /// Proleptic Gregorian calendar.
    Gregorian,
    /// Proleptic Julian calendar.
    Julian,
    /// Revised Julian (Milanković) calendar.
    RevisedJulian,
    /// Revised Goucher-Parker calendar: a fourth-year rule with a
    /// 128-year veto and a 454 545-year override. The veto dominates.
    RevisedGoucherParker,
}

impl Calendar {
    /// Whether `year` is a leap year under this calendar's rule.
    ///
    /// Total over all of `i64`; never fails.
    #[inline]
    pub fn is_leap_year(self, year: i64) -> bool {
        match self {
            Calendar::Gregorian => {
                if year.rem_euclid(100) == 0 {
                    year.rem_euclid(400) == 0
                } else {
                    year.rem_euclid(4) == 0
                }
            }
            Calendar::Julian => year.rem_euclid(4) == 0,
            Calendar::RevisedJulian => {
                if year.rem_euclid(100) == 0 {
                    matches!(year.rem_euclid(900), 200 | 600)
                } else {
                    year.rem_euclid(4) == 0
                }
            }
            Calendar::RevisedGoucherParker => {
                // The 128-divisibility veto is checked before everything else.
                if year.rem_euclid(128) == 0 {
                    false
                } else if year.rem_euclid(454_545) == 0 {
                    true
                } else {
                    year.rem_euclid(4) == 0
                }
            }
        }
    }

    /// Number of days in `year` under this calendar (365 or 366).
    #[inline]
    pub fn days_in_year(self, year: i64) -> u16 {
        if self.is_leap_year(year) {
            366
        } else {
            365
        }
    }

    /// Number of days in `month` of `year`, or `None` when `month` is
    /// outside 1..=12.
    #[inline]
    pub fn days_in_month(self, year: i64, month: u8) -> Option<u8> {
        civil::month_length(month, self.is_leap_year(year))
    }
}

impl std::fmt::Display for Calendar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Calendar::Gregorian => "Gregorian",
            Calendar::Julian => "Julian",
            Calendar::RevisedJulian => "Revised Julian",
            Calendar::RevisedGoucherParker => "Revised Goucher-Parker",
        };
        f.write_str(name)
    }
}
