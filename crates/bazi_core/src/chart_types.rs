//! Serialisable chart types.

use bazi_calendar::LunarDate;
use bazi_tables::{
    EarthlyBranch, Element, HeavenlyStem, HiddenStem, NaYin, PillarRole, ShenSha, TenGod,
};
use bazi_time::SolarTime;
use serde::{Deserialize, Serialize};

use crate::input::Gender;

/// Where a chart came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartSource {
    #[default]
    Local,
    Remote,
}

/// A label in Chinese and pinyin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub chinese: String,
    pub pinyin: String,
}

impl Label {
    pub fn new(chinese: &str, pinyin: &str) -> Self {
        Self {
            chinese: chinese.to_owned(),
            pinyin: pinyin.to_owned(),
        }
    }
}

/// A hidden stem with its element and Ten God.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenStemEntry {
    pub stem: HeavenlyStem,
    pub stem_chinese: String,
    pub element: Element,
    pub is_primary: bool,
    pub ten_god: TenGod,
}

impl HiddenStemEntry {
    pub fn new(hidden: HiddenStem, day_master: HeavenlyStem) -> Self {
        Self {
            stem: hidden.stem,
            stem_chinese: hidden.stem.chinese().to_owned(),
            element: hidden.stem.element(),
            is_primary: hidden.is_primary,
            ten_god: bazi_tables::ten_god(day_master, hidden.stem),
        }
    }
}

/// Na Yin of a pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaYinEntry {
    pub label: Label,
    pub element: Element,
}

impl From<&NaYin> for NaYinEntry {
    fn from(n: &NaYin) -> Self {
        Self {
            label: Label::new(n.chinese, n.pinyin),
            element: n.element,
        }
    }
}

/// An auxiliary spirit with its labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritEntry {
    pub spirit: ShenSha,
    pub label: Label,
}

impl From<ShenSha> for SpiritEntry {
    fn from(spirit: ShenSha) -> Self {
        Self {
            spirit,
            label: Label::new(spirit.chinese(), spirit.name()),
        }
    }
}

/// One fully populated pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarDetail {
    pub role: PillarRole,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    /// Element of the stem.
    pub element: Element,
    pub stem_label: Label,
    pub branch_label: Label,
    pub element_label: Label,
    /// Position in the Jiazi cycle, 0..=59.
    pub cycle_index: u8,
    /// Relation of the stem to the Day Master; `None` for the Day pillar.
    pub ten_god: Option<TenGod>,
    pub hidden_stems: Vec<HiddenStemEntry>,
    pub nayin: NaYinEntry,
    pub spirits: Vec<SpiritEntry>,
}

/// The four pillars of a chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPillars {
    pub year: PillarDetail,
    pub month: PillarDetail,
    pub day: PillarDetail,
    pub hour: PillarDetail,
}

impl ChartPillars {
    pub fn iter(&self) -> impl Iterator<Item = &PillarDetail> {
        [&self.year, &self.month, &self.day, &self.hour].into_iter()
    }
}

/// Count of each element over the four stems and four branches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementTally {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementTally {
    pub fn add(&mut self, element: Element) {
        *self.slot(element) += 1;
    }

    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    pub fn total(&self) -> u8 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }

    fn slot(&mut self, element: Element) -> &mut u8 {
        match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        }
    }
}

/// Corrected clock time used for the Hour pillar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CorrectedTime {
    pub hour: u32,
    pub minute: u32,
    /// Solar minus civil, in minutes.
    pub offset_minutes: f64,
    /// Day change suppressed by wrapping (-1, 0, +1).
    pub day_shift: i8,
}

impl From<SolarTime> for CorrectedTime {
    fn from(t: SolarTime) -> Self {
        Self {
            hour: t.hour,
            minute: t.minute,
            offset_minutes: t.offset_minutes,
            day_shift: t.day_shift,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Two stems combining (天干五合).
    StemCombination,
    /// Two branches in harmony (六合).
    BranchHarmony,
    /// Two branches in opposition (六冲).
    BranchClash,
}

/// A relation between two pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarRelation {
    pub kind: RelationKind,
    pub between: [PillarRole; 2],
    /// Transformed element, for combinations and harmonies.
    pub element: Option<Element>,
}

/// Zodiac animal of the year branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zodiac {
    pub branch: EarthlyBranch,
    pub animal: String,
    pub animal_chinese: String,
}

/// A complete Four Pillars chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaziChart {
    pub pillars: ChartPillars,
    pub element_tally: ElementTally,
    pub day_master: Element,
    /// Element generated by the Day Master.
    pub lucky_element: Element,
    /// Element controlling the Day Master.
    pub unlucky_element: Element,
    pub solar_time: CorrectedTime,
    pub lunar_date: LunarDate,
    pub zodiac: Zodiac,
    /// Void branches (空亡) of the Day pillar's decade.
    pub void_branches: [EarthlyBranch; 2],
    pub relations: Vec<PillarRelation>,
    pub gender: Gender,
    #[serde(default)]
    pub source: ChartSource,
}
