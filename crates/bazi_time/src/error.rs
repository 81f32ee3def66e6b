//! Error types for time and longitude handling.

use thiserror::Error;

/// Errors from civil-time validation and solar-time correction.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Longitude was not supplied (or is not a finite number).
    #[error("longitude is missing")]
    MissingLongitude,
    /// Longitude outside [-180, 180] degrees.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// Civil hour outside 0..=23.
    #[error("hour {0} is outside 0..=23")]
    HourOutOfRange(u32),
    /// Civil minute outside 0..=59.
    #[error("minute {0} is outside 0..=59")]
    MinuteOutOfRange(u32),
    /// Zone offset outside ±14 h.
    #[error("UTC offset {0} min is outside ±840 min")]
    UtcOffsetOutOfRange(i32),
    /// A day number could not be mapped back to a calendar date.
    #[error("day number {0} has no representable calendar date")]
    DayNumberOutOfRange(i64),
}
