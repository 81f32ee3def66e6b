//! Civil → lunar date conversion.
//!
//! Months run from new moon to new moon, with days counted in China
//! Standard Time (UTC+8). The month holding the winter solstice is month 11.
//! A sui (month 11 to the next month 11) holding 13 lunations gets one leap
//! month: the first one that holds no principal term (solar longitude at a
//! multiple of 30 deg). It takes the number of the month before it.
//!
//! Months 11 and 12 belong to the lunar year of the solstice; months 1..=10
//! belong to the following one.
//!
//! Accuracy follows the low-precision solar and lunar theories used: a new
//! moon or principal term within a few minutes of local midnight can land on
//! the neighbouring day and shift a month boundary by one day.

use std::ops::RangeInclusive;

use bazi_time::{
    apparent_solar_longitude_deg, calendar_to_jd, date_to_jdn, delta_t_days, jdn_to_date,
    local_day_number, new_moon_jd_ut, new_moon_on_or_before, solar_longitude_crossing_near,
};
use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::CalendarError;
use crate::lunar_types::{LunarDate, LunarMonth};

/// Civil years accepted by [`to_lunar`] and lunar years by the year queries.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=2100;

/// China Standard Time, in minutes east of UTC.
pub const CHINA_STANDARD_OFFSET_MINUTES: i32 = 480;

const WINTER_SOLSTICE_DEG: f64 = 270.0;
const PRINCIPAL_TERM_DEG: f64 = 30.0;

/// Reject civil years outside [`SUPPORTED_YEARS`].
pub fn check_year(year: i32) -> Result<i32, CalendarError> {
    if !SUPPORTED_YEARS.contains(&year) {
        return Err(CalendarError::YearOutOfRange {
            year,
            min: *SUPPORTED_YEARS.start(),
            max: *SUPPORTED_YEARS.end(),
        });
    }
    Ok(year)
}

/// UT instant at which local day `day` begins in China.
fn day_start_ut(day: i64) -> f64 {
    day as f64 - 0.5 - CHINA_STANDARD_OFFSET_MINUTES as f64 / 1440.0
}

fn new_moon_day(k: i64) -> i64 {
    local_day_number(new_moon_jd_ut(k), CHINA_STANDARD_OFFSET_MINUTES)
}

/// Lunation number of the month containing local day `day`.
fn lunation_containing(day: i64) -> i64 {
    let (mut k, _) = new_moon_on_or_before(day_start_ut(day + 1));
    while new_moon_day(k) > day {
        k -= 1;
    }
    while new_moon_day(k + 1) <= day {
        k += 1;
    }
    k
}

fn winter_solstice_day(year: i32) -> i64 {
    let tt = solar_longitude_crossing_near(calendar_to_jd(year, 12, 21.5), WINTER_SOLSTICE_DEG);
    local_day_number(tt - delta_t_days(tt), CHINA_STANDARD_OFFSET_MINUTES)
}

fn solar_longitude_at_day_start(day: i64) -> f64 {
    let ut = day_start_ut(day);
    apparent_solar_longitude_deg(ut + delta_t_days(ut))
}

/// Whether a principal term falls on a local day in `[start, next_start)`.
fn has_principal_term(start: i64, next_start: i64) -> bool {
    let a = (solar_longitude_at_day_start(start) / PRINCIPAL_TERM_DEG).floor();
    let b = (solar_longitude_at_day_start(next_start) / PRINCIPAL_TERM_DEG).floor();
    a != b
}

/// Months from the month-11 of one winter solstice to the next.
#[derive(Debug)]
struct Sui {
    solstice_year: i32,
    /// Local day numbers of each month start, plus the next sui's start.
    starts: Vec<i64>,
    leap_index: Option<usize>,
}

impl Sui {
    fn new(solstice_year: i32) -> Result<Self, CalendarError> {
        let k0 = lunation_containing(winter_solstice_day(solstice_year));
        let k1 = lunation_containing(winter_solstice_day(solstice_year + 1));
        let months = k1 - k0;
        if !(12..=13).contains(&months) {
            return Err(CalendarError::BadSuiLength {
                solstice_year,
                months,
            });
        }
        let starts: Vec<i64> = (k0..=k1).map(new_moon_day).collect();

        let leap_index = if months == 13 {
            // Month 11 holds the solstice, so the search starts after it.
            let found = (1..starts.len() - 1)
                .find(|&i| !has_principal_term(starts[i], starts[i + 1]))
                .ok_or(CalendarError::NoLeapMonth(solstice_year))?;
            Some(found)
        } else {
            None
        };
        debug!(solstice_year, months, ?leap_index, "sui");

        Ok(Self {
            solstice_year,
            starts,
            leap_index,
        })
    }

    fn month_count(&self) -> usize {
        self.starts.len() - 1
    }

    /// `(lunar_year, month, is_leap)` of the month at position `i`.
    fn label(&self, i: usize) -> (i32, u8, bool) {
        let (ordinal, is_leap) = match self.leap_index {
            Some(leap) if i >= leap => (i - 1, i == leap),
            _ => (i, false),
        };
        // Ordinal 0 is month 11, ordinal 2 is month 1.
        let month = ((ordinal + 10) % 12 + 1) as u8;
        let year = if ordinal <= 1 {
            self.solstice_year
        } else {
            self.solstice_year + 1
        };
        (year, month, is_leap)
    }

    fn month(&self, i: usize) -> Result<LunarMonth, CalendarError> {
        let (year, month, is_leap_month) = self.label(i);
        Ok(LunarMonth {
            year,
            month,
            is_leap_month,
            start: jdn_to_date(self.starts[i])?,
            length_days: (self.starts[i + 1] - self.starts[i]) as u8,
        })
    }
}

/// Convert a civil date to its approximate lunar date.
///
/// Errors when the civil year is outside [`SUPPORTED_YEARS`].
pub fn to_lunar(date: NaiveDate) -> Result<LunarDate, CalendarError> {
    check_year(date.year())?;
    let day = date_to_jdn(date);

    let mut sui = Sui::new(date.year())?;
    if day < sui.starts[0] {
        sui = Sui::new(date.year() - 1)?;
    }

    // `day` precedes the next sui's month 11, so it lies in one of the months.
    let index = (0..sui.month_count())
        .rev()
        .find(|&i| sui.starts[i] <= day)
        .unwrap_or(0);
    let (year, month, is_leap_month) = sui.label(index);
    let lunar = LunarDate {
        year,
        month,
        day: (day - sui.starts[index] + 1) as u8,
        is_leap_month,
    };
    debug!(%date, %lunar, "to_lunar");
    Ok(lunar)
}

/// All months of lunar year `year` in order, leap month included.
pub fn lunar_year_months(year: i32) -> Result<Vec<LunarMonth>, CalendarError> {
    check_year(year)?;
    let mut months = Vec::with_capacity(13);
    for solstice_year in [year - 1, year] {
        let sui = Sui::new(solstice_year)?;
        for i in 0..sui.month_count() {
            if sui.label(i).0 == year {
                months.push(sui.month(i)?);
            }
        }
    }
    Ok(months)
}

/// Civil date of Chinese New Year (month 1 day 1) of lunar year `year`.
pub fn chinese_new_year(year: i32) -> Result<NaiveDate, CalendarError> {
    check_year(year)?;
    let sui = Sui::new(year - 1)?;
    let first = (0..sui.month_count())
        .find(|&i| sui.label(i) == (year, 1, false))
        .ok_or(CalendarError::BadSuiLength {
            solstice_year: year - 1,
            months: sui.month_count() as i64,
        })?;
    Ok(jdn_to_date(sui.starts[first])?)
}

/// Leap month number of lunar year `year`, if it has one.
pub fn leap_month(year: i32) -> Result<Option<u8>, CalendarError> {
    Ok(lunar_year_months(year)?
        .iter()
        .find(|m| m.is_leap_month)
        .map(|m| m.month))
}
