//! Na Yin (纳音) sound-elements: one label per consecutive pair in the
//! Jiazi cycle, 30 labels in all.

use serde::Serialize;

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::error::TableError;
use crate::sexagenary::SexagenaryPair;
use crate::stem::HeavenlyStem;

/// A Na Yin label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NaYin {
    pub chinese: &'static str,
    pub pinyin: &'static str,
    pub element: Element,
}

const fn ny(chinese: &'static str, pinyin: &'static str, element: Element) -> NaYin {
    NaYin {
        chinese,
        pinyin,
        element,
    }
}

/// Indexed by `cycle_index / 2`.
#[rustfmt::skip]
pub(crate) static NAYIN_TABLE: [NaYin; 30] = [
    ny("海中金", "Hai Zhong Jin",   Element::Metal), // Jia-Zi, Yi-Chou
    ny("炉中火", "Lu Zhong Huo",    Element::Fire),
    ny("大林木", "Da Lin Mu",       Element::Wood),
    ny("路旁土", "Lu Pang Tu",      Element::Earth),
    ny("剑锋金", "Jian Feng Jin",   Element::Metal),
    ny("山头火", "Shan Tou Huo",    Element::Fire),
    ny("涧下水", "Jian Xia Shui",   Element::Water),
    ny("城头土", "Cheng Tou Tu",    Element::Earth),
    ny("白蜡金", "Bai La Jin",      Element::Metal),
    ny("杨柳木", "Yang Liu Mu",     Element::Wood),
    ny("泉中水", "Quan Zhong Shui", Element::Water), // Jia-Shen, Yi-You
    ny("屋上土", "Wu Shang Tu",     Element::Earth),
    ny("霹雳火", "Pi Li Huo",       Element::Fire),
    ny("松柏木", "Song Bai Mu",     Element::Wood),
    ny("长流水", "Chang Liu Shui",  Element::Water),
    ny("沙中金", "Sha Zhong Jin",   Element::Metal),
    ny("山下火", "Shan Xia Huo",    Element::Fire),
    ny("平地木", "Ping Di Mu",      Element::Wood),
    ny("壁上土", "Bi Shang Tu",     Element::Earth),
    ny("金箔金", "Jin Bo Jin",      Element::Metal),
    ny("覆灯火", "Fu Deng Huo",     Element::Fire),  // Jia-Chen, Yi-Si
    ny("天河水", "Tian He Shui",    Element::Water),
    ny("大驿土", "Da Yi Tu",        Element::Earth),
    ny("钗钏金", "Chai Chuan Jin",  Element::Metal),
    ny("桑柘木", "Sang Zhe Mu",     Element::Wood),
    ny("大溪水", "Da Xi Shui",      Element::Water),
    ny("沙中土", "Sha Zhong Tu",    Element::Earth),
    ny("天上火", "Tian Shang Huo",  Element::Fire),
    ny("石榴木", "Shi Liu Mu",      Element::Wood),
    ny("大海水", "Da Hai Shui",     Element::Water),
];

/// Na Yin of a valid pair.
pub fn nayin_of(pair: SexagenaryPair) -> &'static NaYin {
    &NAYIN_TABLE[(pair.cycle_index() / 2) as usize]
}

/// Na Yin of `stem` + `branch`; errors when the parities differ.
pub fn nayin(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<&'static NaYin, TableError> {
    SexagenaryPair::new(stem, branch).map(nayin_of)
}
