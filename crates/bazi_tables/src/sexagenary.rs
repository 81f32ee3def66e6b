//! Stem-branch pairs and the 60-step Jiazi cycle.
//!
//! Only pairs of equal parity exist: stepping stem and branch together from
//! Jia-Zi, index `i` reaches stem `i mod 10` and branch `i mod 12`, so both
//! indices always share the parity of `i`.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::error::TableError;
use crate::stem::HeavenlyStem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// A parity-valid Heavenly Stem + Earthly Branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPair")]
pub struct SexagenaryPair {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

#[derive(Deserialize)]
struct RawPair {
    stem: HeavenlyStem,
    branch: EarthlyBranch,
}

impl TryFrom<RawPair> for SexagenaryPair {
    type Error = TableError;

    fn try_from(raw: RawPair) -> Result<Self, Self::Error> {
        Self::new(raw.stem, raw.branch)
    }
}

impl SexagenaryPair {
    /// Pair `stem` with `branch`, rejecting mismatched parity.
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Result<Self, TableError> {
        if stem.index() % 2 != branch.index() % 2 {
            return Err(TableError::ParityMismatch { stem, branch });
        }
        Ok(Self { stem, branch })
    }

    /// Pair at position `index` (0 = Jia-Zi .. 59 = Gui-Hai).
    pub const fn from_cycle_index(index: u8) -> Result<Self, TableError> {
        if index >= CYCLE_LEN {
            return Err(TableError::CycleIndexOutOfRange(index));
        }
        Ok(Self::from_offset(index as i64))
    }

    /// Pair reached after `offset` steps from Jia-Zi (any sign).
    pub const fn from_offset(offset: i64) -> Self {
        Self {
            stem: HeavenlyStem::from_offset(offset),
            branch: EarthlyBranch::from_offset(offset),
        }
    }

    pub const fn stem(self) -> HeavenlyStem {
        self.stem
    }

    pub const fn branch(self) -> EarthlyBranch {
        self.branch
    }

    /// Position in the cycle, 0..=59.
    ///
    /// Solves `i ≡ s (mod 10)`, `i ≡ b (mod 12)`: `i = (6s − 5b) mod 60`.
    pub const fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        (6 * s - 5 * b).rem_euclid(CYCLE_LEN as i32) as u8
    }

    /// The pair `steps` positions later in the cycle.
    pub const fn advance(self, steps: i64) -> Self {
        Self::from_offset(self.cycle_index() as i64 + steps)
    }

    /// The two branches left over by this pair's ten-day decade (xun).
    pub const fn void_branches(self) -> [EarthlyBranch; 2] {
        let head = self.branch.index() as i64 - self.stem.index() as i64;
        [
            EarthlyBranch::from_offset(head + 10),
            EarthlyBranch::from_offset(head + 11),
        ]
    }

    /// Chinese label, e.g. "甲子".
    pub fn chinese(self) -> String {
        format!("{}{}", self.stem.chinese(), self.branch.chinese())
    }

    /// Romanized label, e.g. "Jia Zi".
    pub fn name(self) -> String {
        format!("{} {}", self.stem.name(), self.branch.name())
    }
}

impl std::fmt::Display for SexagenaryPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.chinese(), self.branch.chinese())
    }
}
