//! The four sexagenary pillars.
//!
//! Each pillar is a pure function of its inputs:
//!
//! | Pillar | Stem | Branch |
//! |--------|------|--------|
//! | Year  | `(lunar_year − 4) mod 10` | `(lunar_year − 4) mod 12` |
//! | Month | five-tiger rule from the year stem | `(lunar_month + 1) mod 12` |
//! | Day   | `days_since_anchor mod 10` | `days_since_anchor mod 12` |
//! | Hour  | five-rat rule from the day stem | `((solar_hour + 1) mod 24) / 2` |
//!
//! Month boundaries follow lunar months, not solar terms.

use bazi_calendar::{LunarDate, to_lunar};
use bazi_tables::{EarthlyBranch, Element, HeavenlyStem, PillarRole, SexagenaryPair};
use bazi_time::{SolarTime, to_true_solar_time};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BaziError, ValidationError};
use crate::input::{BirthInput, validate_birth};
use crate::options::{ChartOptions, ZiHourPolicy};

/// A stem-branch pair in a chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar {
    pub role: PillarRole,
    pub pair: SexagenaryPair,
}

impl Pillar {
    pub const fn new(role: PillarRole, pair: SexagenaryPair) -> Self {
        Self { role, pair }
    }

    pub const fn stem(&self) -> HeavenlyStem {
        self.pair.stem()
    }

    pub const fn branch(&self) -> EarthlyBranch {
        self.pair.branch()
    }

    /// Element of the stem.
    pub const fn element(&self) -> Element {
        self.pair.stem().element()
    }
}

/// Year, Month, Day and Hour pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    /// Pillars in chart order.
    pub const fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub const fn get(&self, role: PillarRole) -> Pillar {
        match role {
            PillarRole::Year => self.year,
            PillarRole::Month => self.month,
            PillarRole::Day => self.day,
            PillarRole::Hour => self.hour,
        }
    }
}

/// Pillars together with the intermediate values they were derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillarComputation {
    pub pillars: FourPillars,
    pub solar_time: SolarTime,
    pub lunar_date: LunarDate,
    /// Civil date whose Day pillar was used (differs under `ZiHourPolicy::NextDay`).
    pub day_pillar_date: NaiveDate,
}

/// Year pillar of a lunar year.
pub fn year_pillar(lunar_year: i32) -> SexagenaryPair {
    SexagenaryPair::from_offset(lunar_year as i64 - 4)
}

/// Month pillar of lunar month `lunar_month` (1..=12) in a year with stem
/// `year_stem`. Month 1 of a Jia or Ji year is Bing-Yin.
pub fn month_pillar(
    year_stem: HeavenlyStem,
    lunar_month: u8,
) -> Result<SexagenaryPair, BaziError> {
    if !(1..=12).contains(&lunar_month) {
        return Err(ValidationError::new(
            "lunar_month",
            format!("{lunar_month} not in 1..=12"),
        )
        .into());
    }
    let m = lunar_month as i64;
    let stem = HeavenlyStem::from_offset((year_stem.index() as i64 % 5) * 2 + m + 1);
    let branch = EarthlyBranch::from_offset(m + 1);
    Ok(SexagenaryPair::new(stem, branch)?)
}

/// Day pillar of `date`, counting whole calendar days from `anchor`.
pub fn day_pillar(date: NaiveDate, anchor: NaiveDate) -> SexagenaryPair {
    SexagenaryPair::from_offset(date.signed_duration_since(anchor).num_days())
}

/// Branch of a solar clock hour. 23:00–00:59 is Zi.
pub fn hour_branch(solar_hour: u32) -> EarthlyBranch {
    EarthlyBranch::from_offset(((solar_hour as i64 + 1) % 24) / 2)
}

/// Hour pillar for a solar hour on a day with stem `day_stem`.
/// The Zi hour of a Jia or Ji day is Jia-Zi.
pub fn hour_pillar(day_stem: HeavenlyStem, solar_hour: u32) -> Result<SexagenaryPair, BaziError> {
    if solar_hour > 23 {
        return Err(
            ValidationError::new("solar_hour", format!("{solar_hour} not in 0..=23")).into(),
        );
    }
    let branch = hour_branch(solar_hour);
    let stem =
        HeavenlyStem::from_offset((day_stem.index() as i64 % 5) * 2 + branch.index() as i64);
    Ok(SexagenaryPair::new(stem, branch)?)
}

/// All four pillars for a birth.
pub fn compute_pillars(
    input: &BirthInput,
    options: &ChartOptions,
) -> Result<PillarComputation, BaziError> {
    validate_birth(input, options)?;

    let solar_time = to_true_solar_time(
        input.birth_date,
        input.birth_hour,
        input.birth_minute,
        input.longitude,
        options.utc_offset_minutes,
    )?;
    let lunar_date = to_lunar(input.birth_date)?;

    let day_pillar_date = match options.zi_hour {
        ZiHourPolicy::NextDay if solar_time.hour == 23 => input
            .birth_date
            .checked_add_days(Days::new(1))
            .ok_or_else(|| ValidationError::new("birth_date", "no following day"))?,
        _ => input.birth_date,
    };

    let year = year_pillar(lunar_date.year);
    let month = month_pillar(year.stem(), lunar_date.month)?;
    let day = day_pillar(day_pillar_date, options.day_anchor);
    let hour = hour_pillar(day.stem(), solar_time.hour)?;

    debug!(
        %year, %month, %day, %hour,
        solar_hour = solar_time.hour,
        solar_minute = solar_time.minute,
        offset_minutes = solar_time.offset_minutes,
        %lunar_date,
        "computed pillars"
    );

    Ok(PillarComputation {
        pillars: FourPillars {
            year: Pillar::new(PillarRole::Year, year),
            month: Pillar::new(PillarRole::Month, month),
            day: Pillar::new(PillarRole::Day, day),
            hour: Pillar::new(PillarRole::Hour, hour),
        },
        solar_time,
        lunar_date,
        day_pillar_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_DAY_ANCHOR;
    use bazi_tables::{ALL_STEMS, EarthlyBranch as B, HeavenlyStem as S};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pair(s: S, b: B) -> SexagenaryPair {
        SexagenaryPair::new(s, b).unwrap()
    }

    #[test]
    fn year_pillars() {
        assert_eq!(year_pillar(1984), pair(S::Jia, B::Zi));
        assert_eq!(year_pillar(2024), pair(S::Jia, B::Chen));
        assert_eq!(year_pillar(1900), pair(S::Geng, B::Zi));
        assert_eq!(year_pillar(3), pair(S::Gui, B::Hai));
    }

    #[test]
    fn five_tiger_first_months() {
        let expected = [S::Bing, S::Wu, S::Geng, S::Ren, S::Jia];
        for (i, ys) in ALL_STEMS.iter().enumerate() {
            let m1 = month_pillar(*ys, 1).unwrap();
            assert_eq!(m1.branch(), B::Yin);
            assert_eq!(m1.stem(), expected[i % 5], "year stem {ys:?}");
        }
    }

    #[test]
    fn month_branches_follow_number() {
        assert_eq!(month_pillar(S::Jia, 11).unwrap().branch(), B::Zi);
        assert_eq!(month_pillar(S::Jia, 12).unwrap().branch(), B::Chou);
        assert_eq!(month_pillar(S::Jia, 12).unwrap().stem(), S::Ding);
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(month_pillar(S::Jia, 0).unwrap_err().field(), Some("lunar_month"));
        assert_eq!(month_pillar(S::Jia, 13).unwrap_err().field(), Some("lunar_month"));
    }

    #[test]
    fn anchor_day_is_jiazi() {
        assert_eq!(day_pillar(DEFAULT_DAY_ANCHOR, DEFAULT_DAY_ANCHOR), pair(S::Jia, B::Zi));
        assert_eq!(day_pillar(date(1900, 2, 1), DEFAULT_DAY_ANCHOR), pair(S::Yi, B::Chou));
        assert_eq!(day_pillar(date(1900, 1, 30), DEFAULT_DAY_ANCHOR), pair(S::Gui, B::Hai));
        assert_eq!(day_pillar(date(1900, 4, 1), DEFAULT_DAY_ANCHOR).cycle_index(), 0);
    }

    #[test]
    fn hour_branch_boundaries() {
        assert_eq!(hour_branch(23), B::Zi);
        assert_eq!(hour_branch(0), B::Zi);
        assert_eq!(hour_branch(1), B::Chou);
        assert_eq!(hour_branch(12), B::Wu);
        assert_eq!(hour_branch(22), B::Hai);
    }

    #[test]
    fn five_rat_rule() {
        assert_eq!(hour_pillar(S::Jia, 0).unwrap(), pair(S::Jia, B::Zi));
        assert_eq!(hour_pillar(S::Yi, 0).unwrap(), pair(S::Bing, B::Zi));
        assert_eq!(hour_pillar(S::Wu, 23).unwrap(), pair(S::Ren, B::Zi));
        assert_eq!(hour_pillar(S::Ji, 12).unwrap(), pair(S::Geng, B::Wu));
        assert!(hour_pillar(S::Jia, 24).is_err());
    }
}
