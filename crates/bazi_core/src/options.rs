//! Chart calculation options.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default day-cycle anchor: Day pillar Jia-Zi falls on this date.
pub const DEFAULT_DAY_ANCHOR: NaiveDate = match NaiveDate::from_ymd_opt(1900, 1, 31) {
    Some(d) => d,
    None => panic!("invalid default anchor"),
};

/// The Jia-Zi day of the traditional almanac nearest the default anchor.
pub const ALMANAC_JIAZI_ANCHOR: NaiveDate = match NaiveDate::from_ymd_opt(1900, 2, 20) {
    Some(d) => d,
    None => panic!("invalid almanac anchor"),
};

/// UTC+8, the zone most birth times are recorded in.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 480;

/// How the 23:00–23:59 Zi hour treats the Day pillar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZiHourPolicy {
    /// Day pillar follows the civil date.
    #[default]
    SameDay,
    /// 23:00 onward (solar time) counts as the next day.
    NextDay,
}

/// Tunables for pillar calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Zone of the civil clock, minutes east of UTC.
    pub utc_offset_minutes: i32,
    pub zi_hour: ZiHourPolicy,
    /// Civil date whose Day pillar is Jia-Zi.
    pub day_anchor: NaiveDate,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            zi_hour: ZiHourPolicy::SameDay,
            day_anchor: DEFAULT_DAY_ANCHOR,
        }
    }
}
