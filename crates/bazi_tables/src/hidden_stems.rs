//! Stems stored inside each branch (藏干), primary qi first.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;
use crate::stem::HeavenlyStem::{Bing, Ding, Geng, Gui, Ji, Jia, Ren, Wu, Xin, Yi};

/// A stem hidden in a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HiddenStem {
    pub stem: HeavenlyStem,
    pub is_primary: bool,
}

const fn primary(stem: HeavenlyStem) -> HiddenStem {
    HiddenStem {
        stem,
        is_primary: true,
    }
}

const fn residual(stem: HeavenlyStem) -> HiddenStem {
    HiddenStem {
        stem,
        is_primary: false,
    }
}

/// Indexed by branch index (Zi = 0).
pub(crate) static HIDDEN_STEMS: [&[HiddenStem]; 12] = [
    &[primary(Gui)],                               // Zi
    &[primary(Ji), residual(Gui), residual(Xin)],  // Chou
    &[primary(Jia), residual(Bing), residual(Wu)], // Yin
    &[primary(Yi)],                                // Mao
    &[primary(Wu), residual(Yi), residual(Gui)],   // Chen
    &[primary(Bing), residual(Wu), residual(Geng)], // Si
    &[primary(Ding), residual(Ji)],                // Wu
    &[primary(Ji), residual(Ding), residual(Yi)],  // Wei
    &[primary(Geng), residual(Ren), residual(Wu)], // Shen
    &[primary(Xin)],                               // You
    &[primary(Wu), residual(Xin), residual(Ding)], // Xu
    &[primary(Ren), residual(Jia)],                // Hai
];

/// Hidden stems of `branch`, primary first.
pub fn hidden_stems(branch: EarthlyBranch) -> &'static [HiddenStem] {
    HIDDEN_STEMS[branch.index() as usize]
}

/// The primary (main qi) stem of `branch`.
pub fn primary_stem(branch: EarthlyBranch) -> HeavenlyStem {
    // Every row opens with its primary entry.
    HIDDEN_STEMS[branch.index() as usize][0].stem
}
