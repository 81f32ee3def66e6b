//! Ten Gods (十神): the relation of any stem to the Day Master.
//!
//! Determined by which element cycle links the two stems and whether their
//! polarities match.

use serde::{Deserialize, Serialize};

use crate::stem::HeavenlyStem;

/// One of the ten relations to the Day Master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenGod {
    /// Same element, same polarity.
    BiJian,
    /// Same element, opposite polarity.
    JieCai,
    /// Day Master generates it, same polarity.
    ShiShen,
    ShangGuan,
    /// Day Master controls it, same polarity.
    PianCai,
    ZhengCai,
    /// It controls the Day Master, same polarity.
    QiSha,
    ZhengGuan,
    /// It generates the Day Master, same polarity.
    PianYin,
    ZhengYin,
}

impl TenGod {
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::QiSha => "七杀",
            Self::ZhengGuan => "正官",
            Self::PianYin => "偏印",
            Self::ZhengYin => "正印",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::BiJian => "Bi Jian",
            Self::JieCai => "Jie Cai",
            Self::ShiShen => "Shi Shen",
            Self::ShangGuan => "Shang Guan",
            Self::PianCai => "Pian Cai",
            Self::ZhengCai => "Zheng Cai",
            Self::QiSha => "Qi Sha",
            Self::ZhengGuan => "Zheng Guan",
            Self::PianYin => "Pian Yin",
            Self::ZhengYin => "Zheng Yin",
        }
    }
}

/// Relation of `other` to `day_master`.
pub fn ten_god(day_master: HeavenlyStem, other: HeavenlyStem) -> TenGod {
    let dm = day_master.element();
    let el = other.element();
    let same = day_master.polarity() == other.polarity();
    let pick = |a, b| if same { a } else { b };

    if el == dm {
        pick(TenGod::BiJian, TenGod::JieCai)
    } else if dm.generates() == el {
        pick(TenGod::ShiShen, TenGod::ShangGuan)
    } else if dm.controls() == el {
        pick(TenGod::PianCai, TenGod::ZhengCai)
    } else if el.controls() == dm {
        pick(TenGod::QiSha, TenGod::ZhengGuan)
    } else {
        pick(TenGod::PianYin, TenGod::ZhengYin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;
    use HeavenlyStem::*;

    #[test]
    fn jia_row() {
        let row: Vec<_> = ALL_STEMS.iter().map(|s| ten_god(Jia, *s)).collect();
        assert_eq!(
            row,
            vec![
                TenGod::BiJian,
                TenGod::JieCai,
                TenGod::ShiShen,
                TenGod::ShangGuan,
                TenGod::PianCai,
                TenGod::ZhengCai,
                TenGod::QiSha,
                TenGod::ZhengGuan,
                TenGod::PianYin,
                TenGod::ZhengYin,
            ]
        );
    }

    #[test]
    fn geng_row_spot_checks() {
        assert_eq!(ten_god(Geng, Jia), TenGod::PianCai);
        assert_eq!(ten_god(Geng, Ding), TenGod::ZhengGuan);
        assert_eq!(ten_god(Geng, Ji), TenGod::ZhengYin);
        assert_eq!(ten_god(Geng, Gui), TenGod::ShangGuan);
    }

    #[test]
    fn every_row_has_each_god_once() {
        for dm in ALL_STEMS {
            let mut seen: Vec<_> = ALL_STEMS.iter().map(|s| ten_god(dm, *s)).collect();
            seen.sort_by_key(|g| g.chinese());
            seen.dedup();
            assert_eq!(seen.len(), 10, "{dm:?}");
        }
    }
}
