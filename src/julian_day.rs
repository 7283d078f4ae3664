// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian day counts and the forward (civil → Julian day) conversion.
//!
//! # Core types
//!
//! - [`JulianDay`] — signed whole-day count; day 0 begins at noon UTC
//!   on proleptic Gregorian −4713-11-24.
//! - [`JulianDayTime`] — real-valued day count stored as a
//!   [`qtty::Days`] quantity; the fractional part in [0, 1) is elapsed
//!   UTC time since the preceding noon.
//!
//! # Forward conversion
//!
//! [`CivilDateTime::to_julian_day`] and
//! [`CivilDateTime::to_julian_day_time`] implement the closed-form
//! day-number formula over proleptic Gregorian components.  The formula
//! uses the reference truncating integer division: on its valid domain
//! (on or after −4713-11-24) every operand except the `(month − 14)/12`
//! terms is non-negative, and those terms truncate toward zero by
//! construction.  Julian days begin at noon, so civil times before
//! 12:00 belong to the previous day number.

use qtty::Days;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::civil::CivilDateTime;
use crate::error::CalendarError;

// ── day/time constants ────────────────────────────────────────────────────

/// Nanoseconds in one solar day.
pub(crate) const NANOS_PER_DAY: i64 = 86_400_000_000_000;

/// Nanoseconds from midnight to noon.
pub(crate) const NOON_NANOS: i64 = NANOS_PER_DAY / 2;

/// Nanoseconds in one hour.
pub(crate) const NANOS_PER_HOUR: i64 = 3_600_000_000_000;

/// Nanoseconds in one minute.
pub(crate) const NANOS_PER_MINUTE: i64 = 60_000_000_000;

/// Nanoseconds in one second.
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;

/// Validate a fractional-digits argument (0..=100).
pub(crate) fn check_fraction_digits(digits: u8) -> Result<(), CalendarError> {
    if digits > 100 {
        return Err(CalendarError::InvalidParameter {
            what: "fractional digits out of range (0..=100)",
        });
    }
    Ok(())
}

/// Round to `digits` decimal places, half away from zero.
///
/// Past the point where `10^digits` or the scaled value exceeds what
/// f64 resolves exactly, every representable value is already exact at
/// the requested precision and the value is returned unchanged.
pub(crate) fn round_to_fraction_digits(value: f64, digits: u8) -> f64 {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    let scale = 10f64.powi(i32::from(digits));
    if !scale.is_finite() {
        return value;
    }
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= MAX_EXACT {
        return value;
    }
    scaled.round() / scale
}

// ═══════════════════════════════════════════════════════════════════════════
// JulianDay — whole-day count
// ═══════════════════════════════════════════════════════════════════════════

/// A Julian Day Number: a signed count of whole solar days since noon
/// UTC on proleptic Gregorian −4713-11-24.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JulianDay(i64);

impl JulianDay {
    /// JDN of the proleptic Gregorian epoch 0001-01-01.
    pub const GREGORIAN_EPOCH: Self = Self::new(1_721_426);

    /// Create from a raw day number.
    #[inline]
    pub const fn new(day: i64) -> Self {
        Self(day)
    }

    /// The underlying day number.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Widen to a [`JulianDayTime`] at the day's starting noon.
    #[inline]
    pub fn to_julian_day_time(self) -> JulianDayTime {
        JulianDayTime::raw(self.0 as f64)
    }

    /// Convert a civil date-time; see [`CivilDateTime::to_julian_day`].
    #[inline]
    pub fn from_civil(date: &CivilDateTime) -> Result<Self, CalendarError> {
        date.to_julian_day()
    }
}

impl Add<i64> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl Sub<i64> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl Sub for JulianDay {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JDN {}", self.0)
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_i64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = i64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// JulianDayTime — day count with time-of-day fraction
// ═══════════════════════════════════════════════════════════════════════════

/// A Julian Day Number plus time-of-day fraction.
///
/// Stored as a single [`Days`] quantity.  The integer part is a
/// [`JulianDay`]; the fractional part in [0, 1) is elapsed UTC time
/// since the preceding noon, as a fraction of the day.
///
/// [`JulianDayTime::new`] rejects negative and non-finite values — day
/// 0 is the lower bound the inverse conversion supports.  `Add`/`Sub`
/// with [`Days`] are unchecked; the inverse conversion re-validates.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDayTime(Days);

impl JulianDayTime {
    /// J2000.0 epoch: 2000-01-01T12:00:00 UTC, JDT 2 451 545.0.
    pub const J2000: Self = Self(Days::new(2_451_545.0));

    /// Create from a raw scalar day value.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidParameter`] when `value` is negative,
    /// NaN, or infinite.
    pub fn new(value: f64) -> Result<Self, CalendarError> {
        if !value.is_finite() || value < 0.0 {
            return Err(CalendarError::InvalidParameter {
                what: "Julian day time must be finite and non-negative",
            });
        }
        Ok(Self(Days::new(value)))
    }

    /// Create from a [`Days`] quantity.
    ///
    /// # Errors
    ///
    /// Same domain as [`JulianDayTime::new`].
    pub fn from_days(days: Days) -> Result<Self, CalendarError> {
        Self::new(days.value())
    }

    /// Internal constructor for values the converters have already
    /// bounded.
    #[inline]
    pub(crate) const fn raw(value: f64) -> Self {
        Self(Days::new(value))
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(self) -> Days {
        self.0
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0.value()
    }

    /// The whole-day part.
    #[inline]
    pub fn julian_day(self) -> JulianDay {
        JulianDay::new(self.value().floor() as i64)
    }

    /// The time-of-day fraction in [0, 1).
    #[inline]
    pub fn fraction(self) -> f64 {
        let v = self.value();
        v - v.floor()
    }
}

impl Add<Days> for JulianDayTime {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign<Days> for JulianDayTime {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.0 += rhs;
    }
}

impl Sub<Days> for JulianDayTime {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl SubAssign<Days> for JulianDayTime {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.0 -= rhs;
    }
}

impl Sub for JulianDayTime {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl std::fmt::Display for JulianDayTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JDT {}", self.0)
    }
}

#[cfg(feature = "serde")]
impl Serialize for JulianDayTime {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDayTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Self::new(v).map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Forward conversion
// ═══════════════════════════════════════════════════════════════════════════

/// Day-number part of the forward conversion, before noon adjustment.
///
/// Valid for proleptic Gregorian dates on or after −4713-11-24; the
/// arithmetic runs in i128 so no input can overflow.
fn civil_to_day_number(date: &CivilDateTime) -> Result<i64, CalendarError> {
    let out_of_range = || CalendarError::DateOutOfRange {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    };

    let (y, m, d) = (date.year(), i64::from(date.month()), i64::from(date.day()));
    if y < -4713 || (y == -4713 && (m < 11 || (m == 11 && d < 24))) {
        return Err(out_of_range());
    }

    let y = y as i128;
    let m = m as i128;
    let d = d as i128;
    let a = (m - 14) / 12; // truncates toward zero, as the formula requires
    let jdn = (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075;
    i64::try_from(jdn).map_err(|_| out_of_range())
}

impl CivilDateTime {
    /// Julian Day Number containing this instant.
    ///
    /// The date components are read as proleptic Gregorian.  Julian
    /// days begin at noon: instants before 12:00 UTC belong to the
    /// previous day number.
    ///
    /// # Errors
    ///
    /// [`CalendarError::DateOutOfRange`] when the instant precedes noon
    /// on −4713-11-24 (the start of day 0) or the day count does not
    /// fit in 64 bits.
    pub fn to_julian_day(&self) -> Result<JulianDay, CalendarError> {
        let day = civil_to_day_number(self)?;
        let adjusted = if self.time_of_day_nanos() < NOON_NANOS {
            day - 1
        } else {
            day
        };
        if adjusted < 0 {
            return Err(CalendarError::DateOutOfRange {
                year: self.year(),
                month: self.month(),
                day: self.day(),
            });
        }
        Ok(JulianDay::new(adjusted))
    }

    /// Julian Day Number plus time-of-day fraction for this instant,
    /// rounded half-away-from-zero to `digits` decimal places.
    ///
    /// # Errors
    ///
    /// [`CalendarError::InvalidParameter`] when `digits > 100`;
    /// [`CalendarError::DateOutOfRange`] as for
    /// [`CivilDateTime::to_julian_day`].
    pub fn to_julian_day_time(&self, digits: u8) -> Result<JulianDayTime, CalendarError> {
        check_fraction_digits(digits)?;
        let day = civil_to_day_number(self)?;
        let tod = self.time_of_day_nanos();
        // Shift so the fraction counts from the preceding noon.
        let (day, since_noon) = if tod < NOON_NANOS {
            (day - 1, tod + NOON_NANOS)
        } else {
            (day, tod - NOON_NANOS)
        };
        if day < 0 {
            return Err(CalendarError::DateOutOfRange {
                year: self.year(),
                month: self.month(),
                day: self.day(),
            });
        }
        let value = day as f64 + since_noon as f64 / NANOS_PER_DAY as f64;
        Ok(JulianDayTime::raw(round_to_fraction_digits(value, digits)))
    }
}
