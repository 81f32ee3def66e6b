//! Argument parsers for clap.

use bazi_tables::{ALL_BRANCHES, ALL_STEMS, EarthlyBranch, HeavenlyStem, SexagenaryPair};
use chrono::{NaiveDate, NaiveTime, Timelike};

pub fn date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// `HH:MM`, returned as (hour, minute).
pub fn clock(s: &str) -> Result<(u32, u32), String> {
    let t = NaiveTime::parse_from_str(s, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))?;
    Ok((t.hour(), t.minute()))
}

/// Stem by pinyin (any case) or character.
pub fn stem(s: &str) -> Result<HeavenlyStem, String> {
    ALL_STEMS
        .into_iter()
        .find(|st| st.name().eq_ignore_ascii_case(s) || st.chinese() == s)
        .ok_or_else(|| format!("unknown stem {s:?}"))
}

pub fn branch(s: &str) -> Result<EarthlyBranch, String> {
    ALL_BRANCHES
        .into_iter()
        .find(|b| b.name().eq_ignore_ascii_case(s) || b.chinese() == s)
        .ok_or_else(|| format!("unknown branch {s:?}"))
}

/// A pair written as two characters (`甲子`), `Jia-Zi`, `jia zi`, or a
/// cycle index 0..=59.
pub fn pair(s: &str) -> Result<SexagenaryPair, String> {
    let s = s.trim();
    if let Ok(index) = s.parse::<u8>() {
        return SexagenaryPair::from_cycle_index(index).map_err(|e| e.to_string());
    }
    let (st, br) = match s.split_once(['-', ' ', '_']) {
        Some(parts) => parts,
        None => {
            let mut chars = s.char_indices();
            match (chars.next(), chars.next()) {
                (Some(_), Some((at, _))) => s.split_at(at),
                _ => return Err(format!("cannot read {s:?} as a stem-branch pair")),
            }
        }
    };
    SexagenaryPair::new(stem(st)?, branch(br)?).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_tables::{EarthlyBranch as B, HeavenlyStem as S};

    #[test]
    fn clock_and_date() {
        assert_eq!(clock("23:05").unwrap(), (23, 5));
        assert!(clock("24:00").is_err());
        assert_eq!(date("2024-02-10").unwrap().to_string(), "2024-02-10");
        assert!(date("10/02/2024").is_err());
    }

    #[test]
    fn pair_forms() {
        let jiazi = SexagenaryPair::new(S::Jia, B::Zi).unwrap();
        assert_eq!(pair("甲子").unwrap(), jiazi);
        assert_eq!(pair("Jia-Zi").unwrap(), jiazi);
        assert_eq!(pair("jia zi").unwrap(), jiazi);
        assert_eq!(pair("0").unwrap(), jiazi);
        assert_eq!(pair("59").unwrap().chinese(), "癸亥");
    }

    #[test]
    fn pair_errors() {
        assert!(pair("60").is_err());
        assert!(pair("甲丑").is_err());
        assert!(pair("Foo-Zi").is_err());
        assert!(pair("甲").is_err());
    }
}
