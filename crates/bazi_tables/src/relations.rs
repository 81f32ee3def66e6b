//! Pairwise stem and branch relations.

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::stem::HeavenlyStem;

/// Transformed element of the five stem combinations (天干五合), indexed by
/// the lower stem index: Jia-Ji, Yi-Geng, Bing-Xin, Ding-Ren, Wu-Gui.
static STEM_COMBINATION: [Element; 5] = [
    Element::Earth,
    Element::Metal,
    Element::Water,
    Element::Wood,
    Element::Fire,
];

/// Six-harmony element (六合), keyed by the lower branch of each pair.
/// Paired indices sum to 1 or 13.
static BRANCH_HARMONY: [(EarthlyBranch, Element); 6] = [
    (EarthlyBranch::Zi, Element::Earth),
    (EarthlyBranch::Yin, Element::Wood),
    (EarthlyBranch::Mao, Element::Fire),
    (EarthlyBranch::Chen, Element::Metal),
    (EarthlyBranch::Si, Element::Water),
    (EarthlyBranch::Wu, Element::Earth),
];

/// Element produced when `a` and `b` combine, if they do.
pub fn stem_combination(a: HeavenlyStem, b: HeavenlyStem) -> Option<Element> {
    let (lo, hi) = ordered(a.index(), b.index());
    (hi - lo == 5).then(|| STEM_COMBINATION[lo as usize])
}

/// Element of the six-harmony formed by `a` and `b`, if they form one.
pub fn branch_harmony(a: EarthlyBranch, b: EarthlyBranch) -> Option<Element> {
    if (a.index() + b.index()) % 12 != 1 {
        return None;
    }
    let (lo, _) = ordered(a.index(), b.index());
    BRANCH_HARMONY
        .iter()
        .find(|(head, _)| head.index() == lo)
        .map(|&(_, element)| element)
}

/// Whether `a` and `b` sit opposite each other (六冲).
pub fn branch_clash(a: EarthlyBranch, b: EarthlyBranch) -> bool {
    (a.index() as i8 - b.index() as i8).rem_euclid(12) == 6
}

fn ordered(a: u8, b: u8) -> (u8, u8) {
    if a <= b { (a, b) } else { (b, a) }
}
