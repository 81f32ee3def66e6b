//! Auxiliary spirits (神煞).
//!
//! Two sources feed a pillar's list: a fixed role table keyed by the Year or
//! Day branch, and rules derived from the Day stem and from the three-branch
//! triads of the Year and Day branches.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::role::PillarRole;
use crate::stem::HeavenlyStem;

/// A symbolic spirit attached to a pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShenSha {
    JiangXing,
    WenChangGuiRen,
    FuXingGuiRen,
    TaiJiGuiRen,
    ShiShen,
    ShangGuan,
    PianCai,
    ZhengCai,
    PianGuan,
    ZhengGuan,
    QiSha,
    ZhengYin,
    PianYin,
    BiJian,
    JieCai,
    TianYiGuiRen,
    YiMa,
    TaoHua,
    HuaGai,
}

impl ShenSha {
    pub const fn chinese(self) -> &'static str {
        match self {
            Self::JiangXing => "将星",
            Self::WenChangGuiRen => "文昌贵人",
            Self::FuXingGuiRen => "福星贵人",
            Self::TaiJiGuiRen => "太极贵人",
            Self::ShiShen => "食神",
            Self::ShangGuan => "伤官",
            Self::PianCai => "偏财",
            Self::ZhengCai => "正财",
            Self::PianGuan => "偏官",
            Self::ZhengGuan => "正官",
            Self::QiSha => "七杀",
            Self::ZhengYin => "正印",
            Self::PianYin => "偏印",
            Self::BiJian => "比肩",
            Self::JieCai => "劫财",
            Self::TianYiGuiRen => "天乙贵人",
            Self::YiMa => "驿马",
            Self::TaoHua => "桃花",
            Self::HuaGai => "华盖",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::JiangXing => "Jiang Xing",
            Self::WenChangGuiRen => "Wen Chang Gui Ren",
            Self::FuXingGuiRen => "Fu Xing Gui Ren",
            Self::TaiJiGuiRen => "Tai Ji Gui Ren",
            Self::ShiShen => "Shi Shen",
            Self::ShangGuan => "Shang Guan",
            Self::PianCai => "Pian Cai",
            Self::ZhengCai => "Zheng Cai",
            Self::PianGuan => "Pian Guan",
            Self::ZhengGuan => "Zheng Guan",
            Self::QiSha => "Qi Sha",
            Self::ZhengYin => "Zheng Yin",
            Self::PianYin => "Pian Yin",
            Self::BiJian => "Bi Jian",
            Self::JieCai => "Jie Cai",
            Self::TianYiGuiRen => "Tian Yi Gui Ren",
            Self::YiMa => "Yi Ma",
            Self::TaoHua => "Tao Hua",
            Self::HuaGai => "Hua Gai",
        }
    }
}

use ShenSha::*;

/// Spirits of the Year pillar, by branch index.
pub(crate) static YEAR_BRANCH_SPIRITS: [&[ShenSha]; 12] = [
    &[JiangXing],      // Zi
    &[JiangXing],      // Chou
    &[WenChangGuiRen], // Yin
    &[WenChangGuiRen], // Mao
    &[FuXingGuiRen],   // Chen
    &[FuXingGuiRen],   // Si
    &[JiangXing],      // Wu
    &[JiangXing],      // Wei
    &[TaiJiGuiRen],    // Shen
    &[WenChangGuiRen], // You
    &[WenChangGuiRen], // Xu
    &[TaiJiGuiRen],    // Hai
];

/// Spirits of the Day pillar, by branch index.
pub(crate) static DAY_BRANCH_SPIRITS: [&[ShenSha]; 12] = [
    &[ShiShen],   // Zi
    &[ShangGuan], // Chou
    &[PianCai],   // Yin
    &[ZhengCai],  // Mao
    &[PianGuan],  // Chen
    &[ZhengGuan], // Si
    &[QiSha],     // Wu
    &[ZhengYin],  // Wei
    &[PianYin],   // Shen
    &[BiJian],    // You
    &[JieCai],    // Xu
    &[ShiShen],   // Hai
];

/// Role-table spirits of `branch` in position `role`. Month and Hour carry none.
pub fn auxiliary_spirits(branch: EarthlyBranch, role: PillarRole) -> &'static [ShenSha] {
    match role {
        PillarRole::Year => YEAR_BRANCH_SPIRITS[branch.index() as usize],
        PillarRole::Day => DAY_BRANCH_SPIRITS[branch.index() as usize],
        PillarRole::Month | PillarRole::Hour => &[],
    }
}

use EarthlyBranch as B;

/// Tian Yi Gui Ren branches by day stem index.
static TIAN_YI: [[EarthlyBranch; 2]; 10] = [
    [B::Chou, B::Wei], // Jia
    [B::Zi, B::Shen],  // Yi
    [B::Hai, B::You],  // Bing
    [B::Hai, B::You],  // Ding
    [B::Chou, B::Wei], // Wu
    [B::Zi, B::Shen],  // Ji
    [B::Chou, B::Wei], // Geng
    [B::Wu, B::Yin],   // Xin
    [B::Mao, B::Si],   // Ren
    [B::Mao, B::Si],   // Gui
];

/// Wen Chang branch by day stem index.
static WEN_CHANG: [EarthlyBranch; 10] = [
    B::Si, B::Wu, B::Shen, B::You, B::Shen, B::You, B::Hai, B::Zi, B::Yin, B::Mao,
];

// Triads share `index % 4`: 0 = Shen-Zi-Chen, 1 = Si-You-Chou,
// 2 = Yin-Wu-Xu, 3 = Hai-Mao-Wei.
static YI_MA: [EarthlyBranch; 4] = [B::Yin, B::Hai, B::Shen, B::Si];
static TAO_HUA: [EarthlyBranch; 4] = [B::You, B::Wu, B::Mao, B::Zi];
static HUA_GAI: [EarthlyBranch; 4] = [B::Chen, B::Chou, B::Xu, B::Wei];

/// Spirits derived from the chart's Day stem and Year/Day branches that
/// land on `target`.
pub fn derived_spirits(
    day_stem: HeavenlyStem,
    year_branch: EarthlyBranch,
    day_branch: EarthlyBranch,
    target: EarthlyBranch,
) -> Vec<ShenSha> {
    let mut out = Vec::new();
    let s = day_stem.index() as usize;
    if TIAN_YI[s].contains(&target) {
        out.push(TianYiGuiRen);
    }
    if WEN_CHANG[s] == target {
        out.push(WenChangGuiRen);
    }
    for (spirit, table) in [(YiMa, &YI_MA), (TaoHua, &TAO_HUA), (HuaGai, &HUA_GAI)] {
        let hit = [year_branch, day_branch]
            .iter()
            .any(|anchor| table[(anchor.index() % 4) as usize] == target);
        if hit {
            out.push(spirit);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    #[test]
    fn role_tables_cover_every_branch() {
        for b in ALL_BRANCHES {
            assert_eq!(auxiliary_spirits(b, PillarRole::Year).len(), 1);
            assert_eq!(auxiliary_spirits(b, PillarRole::Day).len(), 1);
            assert!(auxiliary_spirits(b, PillarRole::Month).is_empty());
            assert!(auxiliary_spirits(b, PillarRole::Hour).is_empty());
        }
    }

    #[test]
    fn role_table_spot_checks() {
        assert_eq!(auxiliary_spirits(B::Zi, PillarRole::Year), &[JiangXing]);
        assert_eq!(auxiliary_spirits(B::Wu, PillarRole::Day), &[QiSha]);
    }

    #[test]
    fn triad_rules() {
        // Shen-Zi-Chen: horse at Yin, peach blossom at You, canopy at Chen.
        let hits = derived_spirits(HeavenlyStem::Bing, B::Zi, B::Zi, B::Yin);
        assert!(hits.contains(&YiMa));
        let hits = derived_spirits(HeavenlyStem::Bing, B::Shen, B::Zi, B::You);
        assert!(hits.contains(&TaoHua));
        let hits = derived_spirits(HeavenlyStem::Bing, B::Chen, B::Chen, B::Chen);
        assert!(hits.contains(&HuaGai));
        // Hai-Mao-Wei: horse at Si.
        let hits = derived_spirits(HeavenlyStem::Bing, B::Mao, B::Chou, B::Si);
        assert!(hits.contains(&YiMa));
    }

    #[test]
    fn day_stem_rules() {
        assert!(derived_spirits(HeavenlyStem::Jia, B::Zi, B::Zi, B::Wei).contains(&TianYiGuiRen));
        assert!(derived_spirits(HeavenlyStem::Jia, B::Zi, B::Zi, B::Si).contains(&WenChangGuiRen));
        assert!(derived_spirits(HeavenlyStem::Jia, B::Zi, B::Zi, B::Mao).is_empty());
    }
}
