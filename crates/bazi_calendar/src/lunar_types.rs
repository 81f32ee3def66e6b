//! Lunar calendar result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    /// Lunar year; rolls over at Chinese New Year.
    pub year: i32,
    /// Month number 1..=12. A leap month repeats the number before it.
    pub month: u8,
    /// Day of month 1..=30.
    pub day: u8,
    pub is_leap_month: bool,
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let leap = if self.is_leap_month { "leap " } else { "" };
        write!(f, "{} {}month {} day {}", self.year, leap, self.month, self.day)
    }
}

/// One lunar month of a lunar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LunarMonth {
    pub year: i32,
    pub month: u8,
    pub is_leap_month: bool,
    /// Civil date of day 1 (China Standard Time).
    pub start: NaiveDate,
    /// 29 or 30.
    pub length_days: u8,
}
