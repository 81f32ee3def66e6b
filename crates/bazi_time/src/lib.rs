//! Calendar and solar-time arithmetic for the bazi engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions and day-number helpers
//! - ΔT (TT − UT) approximation
//! - Low-precision apparent solar longitude and solar-term crossings
//! - Mean/true new moon instants
//! - Civil → true solar time correction (longitude + equation of time)
//!
//! Everything here is a pure function of its arguments.

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod moon;
pub mod solar_time;
pub mod sun;

pub use delta_t::{delta_t_days, delta_t_seconds};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, date_to_jdn, jd_to_calendar, jd_to_centuries,
    jdn_to_date, local_day_number,
};
pub use moon::{SYNODIC_MONTH_DAYS, new_moon_jd_tt, new_moon_jd_ut, new_moon_on_or_before};
pub use solar_time::{
    MAX_UTC_OFFSET_MINUTES, MINUTES_PER_DEGREE, SolarTime, equation_of_time_minutes,
    reference_meridian_deg, solar_time_offset_minutes, to_true_solar_time, validate_longitude,
    validate_utc_offset,
};
pub use sun::{
    SolarCoordinates, apparent_solar_longitude_deg, solar_coordinates,
    solar_longitude_crossing_near,
};
