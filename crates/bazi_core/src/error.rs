//! Error types for pillar calculation and chart assembly.
//!
//! Callers see two families: [`ValidationError`] for bad input (always
//! naming the offending field) and [`ComputationError`] for broken internal
//! invariants.

use bazi_calendar::CalendarError;
use bazi_tables::TableError;
use bazi_time::TimeError;
use thiserror::Error;

/// Malformed or out-of-range input.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// An internal invariant did not hold.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ComputationError {
    #[error("table lookup: {0}")]
    Table(#[from] TableError),
    #[error("calendar: {0}")]
    Calendar(CalendarError),
    #[error("time: {0}")]
    Time(TimeError),
    /// A chart failed its structural check.
    #[error("inconsistent chart: {0}")]
    Inconsistent(&'static str),
}

/// Top-level error of the chart engine.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum BaziError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("computation failed: {0}")]
    Computation(#[from] ComputationError),
}

impl BaziError {
    /// Name of the invalid field, for validation errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation(e) => Some(e.field),
            Self::Computation(_) => None,
        }
    }
}

impl From<TableError> for BaziError {
    fn from(e: TableError) -> Self {
        Self::Computation(ComputationError::Table(e))
    }
}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        let field = match e {
            TimeError::MissingLongitude | TimeError::LongitudeOutOfRange(_) => "longitude",
            TimeError::HourOutOfRange(_) => "birth_hour",
            TimeError::MinuteOutOfRange(_) => "birth_minute",
            TimeError::UtcOffsetOutOfRange(_) => "utc_offset_minutes",
            _ => return Self::Computation(ComputationError::Time(e)),
        };
        Self::Validation(ValidationError::new(field, e.to_string()))
    }
}

impl From<CalendarError> for BaziError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::YearOutOfRange { .. } => {
                Self::Validation(ValidationError::new("birth_date", e.to_string()))
            }
            other => Self::Computation(ComputationError::Calendar(other)),
        }
    }
}
