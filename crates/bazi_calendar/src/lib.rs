//! Approximate Chinese lunisolar calendar.
//!
//! Converts civil dates to lunar year/month/day using computed new moons and
//! solar longitudes (see [`lunar`] for the rules and their limits). Supports
//! civil years 1900..=2100.

pub mod error;
pub mod lunar;
pub mod lunar_types;

pub use error::CalendarError;
pub use lunar::{
    CHINA_STANDARD_OFFSET_MINUTES, SUPPORTED_YEARS, check_year, chinese_new_year, leap_month,
    lunar_year_months, to_lunar,
};
pub use lunar_types::{LunarDate, LunarMonth};
