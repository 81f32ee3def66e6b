//! Error type for lunar calendar conversion.

use bazi_time::TimeError;
use thiserror::Error;

/// Errors from lunar calendar conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Civil or lunar year outside the supported range.
    #[error("year {year} outside supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
    /// A sui (solstice-to-solstice span) held neither 12 nor 13 lunations.
    #[error("sui starting {solstice_year} spans {months} lunations")]
    BadSuiLength { solstice_year: i32, months: i64 },
    /// A 13-month sui in which every month holds a principal term.
    #[error("no leap month found in 13-month sui starting {0}")]
    NoLeapMonth(i32),
    #[error(transparent)]
    Time(#[from] TimeError),
}
