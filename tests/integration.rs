use chrono::DateTime;
use kalends::{Calendar, CivilDateTime, JulianDay};

/// Sample years spanning the supported range, with every leap-rule
/// disagreement represented.
const YEARS: [i64; 12] = [
    -4000, -700, -1, 0, 1, 1582, 1600, 1900, 2000, 2024, 2100, 9999,
];

#[test]
fn forward_inverse_roundtrip_preserves_date_and_time() {
    for year in YEARS {
        for (month, day) in [(1u8, 1u8), (2, 28), (3, 1), (6, 15), (12, 31)] {
            for (hour, minute, second) in [(0u8, 0u8, 0u8), (11, 59, 59), (12, 0, 0), (23, 30, 7)] {
                let date =
                    CivilDateTime::gregorian(year, month, day, hour, minute, second, 0).unwrap();
                let jdt = date.to_julian_day_time(9).unwrap();
                let back = jdt.to_gregorian(9).unwrap();
                assert_eq!(
                    (back.year(), back.month(), back.day()),
                    (year, month, day),
                    "date drift for {date}"
                );
                assert_eq!(
                    (back.hour(), back.minute(), back.second(), back.nanosecond()),
                    (hour, minute, second, 0),
                    "time drift for {date}"
                );
            }
        }
    }
}

#[test]
fn roundtrip_rounds_subseconds_to_nearest_second() {
    // Nanoseconds are discarded on the way back; the seconds field is
    // rounded to nearest.
    let date = CivilDateTime::gregorian(2024, 6, 15, 10, 20, 30, 700_000_000).unwrap();
    let back = date.to_julian_day_time(9).unwrap().to_gregorian(9).unwrap();
    assert_eq!((back.minute(), back.second(), back.nanosecond()), (20, 31, 0));

    let date = CivilDateTime::gregorian(2024, 6, 15, 10, 20, 30, 200_000_000).unwrap();
    let back = date.to_julian_day_time(9).unwrap().to_gregorian(9).unwrap();
    assert_eq!((back.minute(), back.second(), back.nanosecond()), (20, 30, 0));
}

#[test]
fn forward_conversion_is_strictly_monotonic() {
    // Chronologically ordered instants at least one second apart map
    // to strictly increasing Julian day times.
    let mut instants = Vec::new();
    for year in YEARS {
        for (month, day, hour) in [(1u8, 1u8, 0u8), (2, 28, 12), (7, 4, 23), (12, 31, 11)] {
            instants.push(CivilDateTime::gregorian(year, month, day, hour, 30, 0, 0).unwrap());
        }
    }
    instants.sort();
    let mut prev: Option<(CivilDateTime, f64)> = None;
    for date in instants {
        let jdt = date.to_julian_day_time(9).unwrap().value();
        if let Some((pd, pv)) = prev {
            assert!(pv < jdt, "{pd} !< {date} as Julian day times");
        }
        prev = Some((date, jdt));
    }
}

#[test]
fn integer_and_real_paths_agree() {
    for year in YEARS {
        for (month, day, hour) in [(1u8, 1u8, 0u8), (3, 15, 11), (3, 15, 12), (12, 31, 23)] {
            let date = CivilDateTime::gregorian(year, month, day, hour, 0, 0, 0).unwrap();
            let jdn = date.to_julian_day().unwrap();
            let jdt = date.to_julian_day_time(9).unwrap();
            assert_eq!(jdt.julian_day(), jdn, "paths disagree for {date}");
            assert_eq!(JulianDay::from_civil(&date).unwrap(), jdn);
        }
    }
}

#[test]
fn known_julian_day_literals() {
    let cases: [(i64, u8, u8, i64); 5] = [
        (2000, 1, 1, 2_451_545),  // J2000
        (1, 1, 1, 1_721_426),     // Gregorian epoch
        (1858, 11, 17, 2_400_001), // MJD epoch day
        (1970, 1, 1, 2_440_588),  // Unix epoch day
        (-4713, 11, 24, 0),       // day zero
    ];
    for (year, month, day, expected) in cases {
        let noon = CivilDateTime::gregorian(year, month, day, 12, 0, 0, 0).unwrap();
        assert_eq!(
            noon.to_julian_day().unwrap().value(),
            expected,
            "JDN mismatch for {noon}"
        );
    }
}

#[test]
fn gregorian_and_julian_readings_of_the_same_instant() {
    // The 1582 reform gap: Julian 1582-10-04 noon is JDN 2299160, and
    // the Gregorian reading of the same day is Oct 14.
    let jdt = JulianDay::new(2_299_160).to_julian_day_time();
    let j = jdt.to_julian(9).unwrap();
    assert_eq!((j.year(), j.month(), j.day()), (1582, 10, 4));
    let g = jdt.to_gregorian(9).unwrap();
    assert_eq!((g.year(), g.month(), g.day()), (1582, 10, 14));
}

#[test]
fn days_in_year_equals_sum_of_month_lengths() {
    let calendars = [
        Calendar::Gregorian,
        Calendar::Julian,
        Calendar::RevisedJulian,
        Calendar::RevisedGoucherParker,
    ];
    for calendar in calendars {
        for year in [-700, -4, 0, 128, 1900, 2000, 2024, 454_545] {
            let total: u16 = (1..=12u8)
                .map(|m| u16::from(calendar.days_in_month(year, m).unwrap()))
                .sum();
            assert_eq!(
                total,
                calendar.days_in_year(year),
                "month lengths disagree with year length for {calendar} {year}"
            );
        }
    }
}

#[test]
fn ordinal_day_tracks_the_forward_conversion() {
    // Day numbers within one year advance exactly with the ordinal day.
    for year in [1900i64, 2000] {
        let leap = Calendar::Gregorian.is_leap_year(year);
        let jan1 = CivilDateTime::gregorian(year, 1, 1, 12, 0, 0, 0).unwrap();
        let base = jan1.to_julian_day().unwrap();
        for (month, day) in [(2u8, 28u8), (3, 1), (7, 4), (12, 31)] {
            let date = CivilDateTime::gregorian(year, month, day, 12, 0, 0, 0).unwrap();
            let ordinal = date.ordinal_day(Calendar::Gregorian).unwrap();
            assert_eq!(
                date.to_julian_day().unwrap() - base,
                i64::from(ordinal) - 1,
                "ordinal/JDN drift at {year}-{month}-{day} (leap: {leap})"
            );
        }
    }
}

#[test]
fn utc_interop_matches_direct_construction() {
    let dt = DateTime::from_timestamp(946_684_800, 0).unwrap(); // 2000-01-01T00:00:00Z
    let via_chrono = CivilDateTime::from_utc(dt);
    let direct = CivilDateTime::gregorian(2000, 1, 1, 0, 0, 0, 0).unwrap();
    assert_eq!(via_chrono, direct);
    assert_eq!(
        via_chrono.to_julian_day_time(9).unwrap().value(),
        2_451_544.5
    );
    assert_eq!(direct.to_utc(), Some(dt));
}

#[cfg(feature = "serde")]
#[test]
fn serde_roundtrips_preserve_values() {
    use kalends::JulianDayTime;

    let date = CivilDateTime::gregorian(2000, 1, 1, 18, 30, 0, 250).unwrap();
    let json = serde_json::to_string(&date).unwrap();
    let back: CivilDateTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, date);

    let jdt = date.to_julian_day_time(9).unwrap();
    let json = serde_json::to_string(&jdt).unwrap();
    let back: JulianDayTime = serde_json::from_str(&json).unwrap();
    assert_eq!(back, jdt);
}
