//! Julian Date ↔ Gregorian calendar conversions.
//!
//! Algorithms from Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 7.
//! Gregorian calendar only; the engine never deals with pre-1582 dates.

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day number of 0001-12-31, so that `num_days_from_ce() + offset`
/// is the JDN of a date.
const CE_TO_JDN_OFFSET: i64 = 1_721_425;

/// Calendar date (with fractional day) to Julian Date.
///
/// `day_frac` may carry the time of day, e.g. `1.5` is the 1st at 12:00.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day_frac + b - 1524.5
}

/// Julian Date to `(year, month, day_frac)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd5 = jd + 0.5;
    let z = jd5.floor();
    let f = jd5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day_frac = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 } as u32;
    let year = if month > 2 { c - 4716.0 } else { c - 4715.0 } as i32;
    (year, month, day_frac)
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Julian Day Number (integer, the day whose noon carries this number).
pub fn date_to_jdn(date: NaiveDate) -> i64 {
    date.num_days_from_ce() as i64 + CE_TO_JDN_OFFSET
}

/// Calendar date for a Julian Day Number.
pub fn jdn_to_date(jdn: i64) -> Result<NaiveDate, TimeError> {
    let days = i32::try_from(jdn - CE_TO_JDN_OFFSET)
        .map_err(|_| TimeError::DayNumberOutOfRange(jdn))?;
    NaiveDate::from_num_days_from_ce_opt(days).ok_or(TimeError::DayNumberOutOfRange(jdn))
}

/// Day number, in a zone `utc_offset_minutes` east of Greenwich, of the
/// civil day containing the UT instant `jd_ut`.
///
/// The result is directly comparable with [`date_to_jdn`].
pub fn local_day_number(jd_ut: f64, utc_offset_minutes: i32) -> i64 {
    (jd_ut + 0.5 + utc_offset_minutes as f64 / 1440.0).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 Oct 4.81 = JD 2436116.31
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn january_uses_previous_year_branch() {
        // 1988 Jan 27.0 = JD 2447187.5
        assert_eq!(calendar_to_jd(1988, 1, 27.0), 2_447_187.5);
    }

    #[test]
    fn calendar_roundtrip() {
        let jd = 2_460_350.958;
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2024, 2));
        assert!((calendar_to_jd(y, m, d) - jd).abs() < 1e-9);
    }

    #[test]
    fn jdn_of_known_dates() {
        let d = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(date_to_jdn(d), 2_451_545);
        let d = NaiveDate::from_ymd_opt(1900, 1, 31).unwrap();
        assert_eq!(date_to_jdn(d), 2_415_051);
    }

    #[test]
    fn jdn_roundtrip() {
        let d = NaiveDate::from_ymd_opt(1984, 2, 2).unwrap();
        assert_eq!(jdn_to_date(date_to_jdn(d)).unwrap(), d);
    }

    #[test]
    fn local_day_crosses_at_local_midnight() {
        // 2024-02-09 16:30 UT is 2024-02-10 00:30 in UTC+8.
        let jd = calendar_to_jd(2024, 2, 9.0 + 16.5 / 24.0);
        let feb10 = date_to_jdn(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
        assert_eq!(local_day_number(jd, 480), feb10);
        assert_eq!(local_day_number(jd, 0), feb10 - 1);
    }
}
