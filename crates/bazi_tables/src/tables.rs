//! The single immutable lookup object.

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::error::TableError;
use crate::hidden_stems::{HIDDEN_STEMS, HiddenStem};
use crate::nayin::{NAYIN_TABLE, NaYin};
use crate::role::PillarRole;
use crate::sexagenary::SexagenaryPair;
use crate::shensha::{DAY_BRANCH_SPIRITS, ShenSha, YEAR_BRANCH_SPIRITS};
use crate::stem::HeavenlyStem;

/// Anything with a fixed element.
pub trait HasElement: Copy {
    fn element(self) -> Element;
}

impl HasElement for HeavenlyStem {
    fn element(self) -> Element {
        HeavenlyStem::element(self)
    }
}

impl HasElement for EarthlyBranch {
    fn element(self) -> Element {
        EarthlyBranch::element(self)
    }
}

/// Read-only view over every sexagenary table.
#[derive(Debug)]
pub struct SexagenaryTables {
    hidden: &'static [&'static [HiddenStem]; 12],
    nayin: &'static [NaYin; 30],
    year_spirits: &'static [&'static [ShenSha]; 12],
    day_spirits: &'static [&'static [ShenSha]; 12],
}

static TABLES: SexagenaryTables = SexagenaryTables {
    hidden: &HIDDEN_STEMS,
    nayin: &NAYIN_TABLE,
    year_spirits: &YEAR_BRANCH_SPIRITS,
    day_spirits: &DAY_BRANCH_SPIRITS,
};

/// The process-wide tables.
pub fn tables() -> &'static SexagenaryTables {
    &TABLES
}

impl SexagenaryTables {
    pub fn element_of<T: HasElement>(&self, item: T) -> Element {
        item.element()
    }

    /// Hidden stems of `branch`, primary first.
    pub fn hidden_stems(&self, branch: EarthlyBranch) -> &'static [HiddenStem] {
        self.hidden[branch.index() as usize]
    }

    /// Na Yin of `stem` + `branch`; parity-invalid pairs are an error.
    pub fn nayin(
        &self,
        stem: HeavenlyStem,
        branch: EarthlyBranch,
    ) -> Result<&'static NaYin, TableError> {
        let pair = SexagenaryPair::new(stem, branch)?;
        Ok(&self.nayin[(pair.cycle_index() / 2) as usize])
    }

    /// Role-table spirits for `branch` in position `role`.
    pub fn auxiliary_spirits(&self, branch: EarthlyBranch, role: PillarRole) -> &'static [ShenSha] {
        let i = branch.index() as usize;
        match role {
            PillarRole::Year => self.year_spirits[i],
            PillarRole::Day => self.day_spirits[i],
            PillarRole::Month | PillarRole::Hour => &[],
        }
    }
}
