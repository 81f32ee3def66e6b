//! Civil time → true (apparent) solar time.
//!
//! The hour pillar is anchored to the Sun, not to the zone clock. The
//! correction is the sum of two terms, both evaluated once per date:
//!
//! - longitude term: 4 min per degree between the birth longitude and the
//!   zone's reference meridian (15 deg per hour of UTC offset);
//! - equation of time at local solar noon (Meeus ch. 28, Smart's formula).
//!
//! The corrected clock wraps across midnight without touching the date; the
//! suppressed day change is reported in [`SolarTime::day_shift`].

use chrono::NaiveDate;

use crate::delta_t::delta_t_days;
use crate::error::TimeError;
use crate::julian::date_to_jdn;
use crate::sun::solar_coordinates;

/// Clock minutes per degree of longitude.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

const MINUTES_PER_DAY: i64 = 1440;

/// Largest zone offset in use (UTC+14).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// True solar time for a civil instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTime {
    /// Corrected hour (0..=23).
    pub hour: u32,
    /// Corrected minute (0..=59).
    pub minute: u32,
    /// Applied correction in minutes (solar minus civil).
    pub offset_minutes: f64,
    /// Day change the wrap suppressed: -1, 0 or +1.
    pub day_shift: i8,
}

impl SolarTime {
    /// Minutes since midnight.
    pub fn minutes_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Reject non-finite or out-of-range longitudes.
pub fn validate_longitude(longitude_deg: f64) -> Result<f64, TimeError> {
    if !longitude_deg.is_finite() {
        return Err(TimeError::MissingLongitude);
    }
    if !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(TimeError::LongitudeOutOfRange(longitude_deg));
    }
    Ok(longitude_deg)
}

/// Reject zone offsets beyond ±14 h.
pub fn validate_utc_offset(utc_offset_minutes: i32) -> Result<i32, TimeError> {
    if utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
        return Err(TimeError::UtcOffsetOutOfRange(utc_offset_minutes));
    }
    Ok(utc_offset_minutes)
}

/// Reference meridian of a zone in degrees east.
pub fn reference_meridian_deg(utc_offset_minutes: i32) -> f64 {
    utc_offset_minutes as f64 / MINUTES_PER_DEGREE
}

/// Equation of time (apparent − mean solar time) in minutes at JDE `jd_tt`.
///
/// Ranges from about −14.2 min (mid February) to +16.4 min (early November).
pub fn equation_of_time_minutes(jd_tt: f64) -> f64 {
    let c = solar_coordinates(jd_tt);
    let l0 = c.mean_longitude_deg.to_radians();
    let m = c.mean_anomaly_deg.to_radians();
    let e = c.eccentricity;
    let y = (c.obliquity_deg.to_radians() / 2.0).tan().powi(2);

    let eq_rad = y * (2.0 * l0).sin() - 2.0 * e * m.sin()
        + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();

    eq_rad.to_degrees() * MINUTES_PER_DEGREE
}

/// Offset in minutes between true solar time and civil time on `date`.
///
/// Equals civil noon minus the civil clock reading at true solar noon.
pub fn solar_time_offset_minutes(
    date: NaiveDate,
    longitude_deg: f64,
    utc_offset_minutes: i32,
) -> Result<f64, TimeError> {
    let longitude_deg = validate_longitude(longitude_deg)?;
    let utc_offset_minutes = validate_utc_offset(utc_offset_minutes)?;

    // JDN is noon UT; local solar noon is longitude/360 of a day earlier.
    let noon_ut = date_to_jdn(date) as f64 - longitude_deg / 360.0;
    let noon_tt = noon_ut + delta_t_days(noon_ut);

    let longitude_term =
        MINUTES_PER_DEGREE * (longitude_deg - reference_meridian_deg(utc_offset_minutes));
    Ok(longitude_term + equation_of_time_minutes(noon_tt))
}

/// Convert a civil clock reading on `date` to true solar time.
pub fn to_true_solar_time(
    date: NaiveDate,
    hour: u32,
    minute: u32,
    longitude_deg: f64,
    utc_offset_minutes: i32,
) -> Result<SolarTime, TimeError> {
    if hour > 23 {
        return Err(TimeError::HourOutOfRange(hour));
    }
    if minute > 59 {
        return Err(TimeError::MinuteOutOfRange(minute));
    }
    let offset = solar_time_offset_minutes(date, longitude_deg, utc_offset_minutes)?;

    let civil = (hour * 60 + minute) as f64;
    let total = (civil + offset).round() as i64;
    let day_shift = total.div_euclid(MINUTES_PER_DAY) as i8;
    let wrapped = total.rem_euclid(MINUTES_PER_DAY) as u32;

    Ok(SolarTime {
        hour: wrapped / 60,
        minute: wrapped % 60,
        offset_minutes: offset,
        day_shift,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn eot_meeus_example_28b() {
        // 1992 Oct 13.0 TD: E = +13m42.6s by the high-accuracy method;
        // Smart's formula with low-accuracy inputs agrees to a few seconds.
        let e = equation_of_time_minutes(2_448_908.5);
        assert!((e - 13.71).abs() < 0.1, "E = {e}");
    }

    #[test]
    fn eot_extremes() {
        let feb = solar_time_offset_minutes(date(2024, 2, 11), 120.0, 480).unwrap();
        assert!((feb + 14.2).abs() < 0.3, "feb = {feb}");
        let nov = solar_time_offset_minutes(date(2024, 11, 3), 120.0, 480).unwrap();
        assert!((nov - 16.4).abs() < 0.3, "nov = {nov}");
    }

    #[test]
    fn longitude_term_four_minutes_per_degree() {
        let d = date(2024, 4, 15);
        let at_ref = solar_time_offset_minutes(d, 120.0, 480).unwrap();
        let west = solar_time_offset_minutes(d, 110.0, 480).unwrap();
        assert!((at_ref - west - 40.0).abs() < 0.05);
    }

    #[test]
    fn reference_meridian_from_offset() {
        assert_eq!(reference_meridian_deg(480), 120.0);
        assert_eq!(reference_meridian_deg(-300), -75.0);
        assert_eq!(reference_meridian_deg(330), 82.5);
    }

    #[test]
    fn wraps_forward_past_midnight() {
        // 135 E on a UTC+8 clock is an hour ahead of the reference meridian.
        let st = to_true_solar_time(date(2024, 4, 15), 23, 30, 135.0, 480).unwrap();
        assert_eq!(st.day_shift, 1);
        assert_eq!(st.hour, 0);
        assert!(st.minute >= 29 && st.minute <= 31, "{st:?}");
    }

    #[test]
    fn wraps_backward_past_midnight() {
        // 115 E: -20 min longitude term, about -14 min equation of time.
        let st = to_true_solar_time(date(2024, 2, 11), 0, 10, 115.0, 480).unwrap();
        assert_eq!(st.day_shift, -1);
        assert_eq!(st.hour, 23);
    }

    #[test]
    fn rejects_bad_longitude() {
        let d = date(2024, 1, 1);
        assert_eq!(
            to_true_solar_time(d, 12, 0, 180.5, 480),
            Err(TimeError::LongitudeOutOfRange(180.5))
        );
        assert_eq!(
            to_true_solar_time(d, 12, 0, f64::NAN, 480),
            Err(TimeError::MissingLongitude)
        );
    }

    #[test]
    fn rejects_bad_clock() {
        let d = date(2024, 1, 1);
        assert_eq!(to_true_solar_time(d, 24, 0, 0.0, 0), Err(TimeError::HourOutOfRange(24)));
        assert_eq!(to_true_solar_time(d, 0, 60, 0.0, 0), Err(TimeError::MinuteOutOfRange(60)));
        assert_eq!(
            to_true_solar_time(d, 0, 0, 0.0, 900),
            Err(TimeError::UtcOffsetOutOfRange(900))
        );
    }

    #[test]
    fn range_edges_accepted() {
        let d = date(2024, 6, 1);
        assert!(to_true_solar_time(d, 0, 0, -180.0, 0).is_ok());
        assert!(to_true_solar_time(d, 23, 59, 180.0, 0).is_ok());
    }
}
