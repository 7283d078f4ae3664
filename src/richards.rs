// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Inverse conversion: Julian day time → civil date-time.
//!
//! Implements E.G. Richards' closed-form method (1998) for turning a
//! whole day number into a proleptic Gregorian or Julian calendar
//! date.  The two targets share every constant except the leap-rule
//! correction folded into `f`: the Gregorian target applies the
//! `B`/`C` century correction, the Julian target is simply `J + j`.
//!
//! Time-of-day reconstruction is shared as well.  Day-fraction 0 is
//! noon, so the scaled fraction is shifted by twelve hours and carried
//! into the next day number when it overflows a full day.  The result
//! is rounded to whole seconds: a residual of half a second or more
//! rounds the seconds field up *without* carrying into minutes or
//! hours, so `second` can read 60 at that boundary.  Sub-second
//! precision is deliberately discarded — the nanosecond field of a
//! reconstructed value is always 0.

use crate::civil::CivilDateTime;
use crate::error::CalendarError;
use crate::julian_day::{
    check_fraction_digits, round_to_fraction_digits, JulianDayTime, NANOS_PER_DAY, NANOS_PER_HOUR,
    NANOS_PER_MINUTE, NANOS_PER_SECOND, NOON_NANOS,
};

// Richards (1998) calendar constants, original single-letter naming.
const Y: i128 = 4716;
const J: i128 = 1401;
const M: i128 = 2;
const N: i128 = 12;
const R: i128 = 4;
const P: i128 = 1461;
const V: i128 = 3;
const U: i128 = 5;
const S: i128 = 153;
const W: i128 = 2;
const B: i128 = 274_277;
const C: i128 = -38;

/// Calendar the inverse conversion targets.
#[derive(Debug, Copy, Clone)]
enum Target {
    Gregorian,
    Julian,
}

/// Richards' date formula for one whole day number.
///
/// The `mod` steps use floor-style (`rem_euclid`) semantics; on the
/// supported domain (day ≥ 0) every intermediate is non-negative, so
/// the quotients are plain floors.
fn day_number_to_date(day: i64, target: Target) -> (i64, u8, u8) {
    let jd = i128::from(day);
    let f = match target {
        Target::Gregorian => jd + J + (((4 * jd + B) / 146_097) * 3) / 4 + C,
        Target::Julian => jd + J,
    };
    let e = R * f + V;
    let g = e.rem_euclid(P) / R;
    let h = U * g + W;
    let dom = h.rem_euclid(S) / U + 1;
    let month = (h / S + M).rem_euclid(N) + 1;
    let year = e / P - Y + (N + M - month) / N;
    (year as i64, month as u8, dom as u8)
}

impl JulianDayTime {
    /// Reconstruct the proleptic Gregorian UTC date-time.
    ///
    /// The value is first rounded half-away-from-zero to `digits`
    /// decimal places, then split into day number and time-of-day.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidParameter`] when the value is negative
    /// (day 0 is the lower bound), too large to resolve whole days, or
    /// `digits > 100`.
    pub fn to_gregorian(&self, digits: u8) -> Result<CivilDateTime, CalendarError> {
        self.to_civil(Target::Gregorian, digits)
    }

    /// Reconstruct the proleptic Julian UTC date-time.
    ///
    /// Same contract as [`JulianDayTime::to_gregorian`], with the
    /// Julian constant set for the date part.
    pub fn to_julian(&self, digits: u8) -> Result<CivilDateTime, CalendarError> {
        self.to_civil(Target::Julian, digits)
    }

    fn to_civil(&self, target: Target, digits: u8) -> Result<CivilDateTime, CalendarError> {
        const MAX_EXACT_DAY: f64 = 9_007_199_254_740_992.0; // 2^53

        check_fraction_digits(digits)?;
        let value = self.value();
        // Arithmetic on JulianDayTime is unchecked, so re-validate here.
        if !value.is_finite() || value < 0.0 {
            return Err(CalendarError::InvalidParameter {
                what: "Julian day time must be finite and non-negative",
            });
        }
        if value >= MAX_EXACT_DAY {
            return Err(CalendarError::InvalidParameter {
                what: "Julian day time too large to resolve whole days",
            });
        }
        let value = round_to_fraction_digits(value, digits);

        let whole = value.floor();
        let mut day = whole as i64;
        // Day-fraction 0 is noon; shift, and carry past the following
        // midnight into the next day number.
        let mut tod = ((value - whole) * NANOS_PER_DAY as f64) as i64 + NOON_NANOS;
        if tod >= NANOS_PER_DAY {
            tod -= NANOS_PER_DAY;
            day += 1;
        }
        let (year, month, dom) = day_number_to_date(day, target);

        let hour = tod / NANOS_PER_HOUR;
        tod %= NANOS_PER_HOUR;
        let minute = tod / NANOS_PER_MINUTE;
        tod %= NANOS_PER_MINUTE;
        let mut second = tod / NANOS_PER_SECOND;
        // Round to whole seconds; the carry stops at the seconds field.
        if tod % NANOS_PER_SECOND >= NANOS_PER_SECOND / 2 {
            second += 1;
        }

        Ok(CivilDateTime::raw(
            year,
            month,
            dom,
            hour as u8,
            minute as u8,
            second as u8,
            0,
        ))
    }
}
