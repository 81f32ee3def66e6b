//! Chart assembly: table lookups, tally, Day Master and favourable elements.
//!
//! Lucky and unlucky elements are a plain reading of the element cycles
//! (what the Day Master generates, what controls it), not a full useful-god
//! analysis.

use bazi_calendar::LunarDate;
use bazi_tables::{
    ALL_ROLES, Element, HeavenlyStem, PillarRole, SexagenaryTables, ShenSha, branch_clash,
    branch_harmony, derived_spirits, stem_combination, tables, ten_god,
};
use bazi_time::SolarTime;
use tracing::debug;

use crate::chart_types::{
    BaziChart, ChartPillars, ChartSource, CorrectedTime, ElementTally, HiddenStemEntry, Label,
    NaYinEntry, PillarDetail, PillarRelation, RelationKind, SpiritEntry, Zodiac,
};
use crate::error::{BaziError, ComputationError};
use crate::input::{BirthInput, Gender};
use crate::options::ChartOptions;
use crate::pillar::{FourPillars, Pillar, compute_pillars};

/// Element the Day Master generates.
pub const fn lucky_element(day_master: Element) -> Element {
    day_master.generates()
}

/// Element that controls the Day Master.
pub const fn unlucky_element(day_master: Element) -> Element {
    day_master.controlled_by()
}

/// Element counts over 4 stems and 4 branches.
pub fn element_tally(pillars: &FourPillars) -> ElementTally {
    let t = tables();
    let mut tally = ElementTally::default();
    for p in pillars.as_array() {
        tally.add(t.element_of(p.stem()));
        tally.add(t.element_of(p.branch()));
    }
    tally
}

/// Role-table spirits followed by derived ones, without repeats.
fn pillar_spirits(t: &SexagenaryTables, pillars: &FourPillars, p: Pillar) -> Vec<SpiritEntry> {
    let mut spirits: Vec<ShenSha> = t.auxiliary_spirits(p.branch(), p.role).to_vec();
    for s in derived_spirits(
        pillars.day.stem(),
        pillars.year.branch(),
        pillars.day.branch(),
        p.branch(),
    ) {
        if !spirits.contains(&s) {
            spirits.push(s);
        }
    }
    spirits.into_iter().map(SpiritEntry::from).collect()
}

fn pillar_detail(
    t: &SexagenaryTables,
    pillars: &FourPillars,
    p: Pillar,
) -> Result<PillarDetail, BaziError> {
    let day_master = pillars.day.stem();
    let (stem, branch) = (p.stem(), p.branch());
    let element = t.element_of(stem);
    Ok(PillarDetail {
        role: p.role,
        stem,
        branch,
        element,
        stem_label: Label::new(stem.chinese(), stem.name()),
        branch_label: Label::new(branch.chinese(), branch.name()),
        element_label: Label::new(element.chinese(), element.name()),
        cycle_index: p.pair.cycle_index(),
        ten_god: (p.role != PillarRole::Day).then(|| ten_god(day_master, stem)),
        hidden_stems: t
            .hidden_stems(branch)
            .iter()
            .map(|h| HiddenStemEntry::new(*h, day_master))
            .collect(),
        nayin: NaYinEntry::from(t.nayin(stem, branch)?),
        spirits: pillar_spirits(t, pillars, p),
    })
}

/// Stem combinations, branch harmonies and clashes among the pillars.
pub fn pillar_relations(pillars: &FourPillars) -> Vec<PillarRelation> {
    let mut out = Vec::new();
    for (i, a) in ALL_ROLES.iter().enumerate() {
        for b in &ALL_ROLES[i + 1..] {
            let (pa, pb) = (pillars.get(*a), pillars.get(*b));
            let between = [*a, *b];
            if let Some(element) = stem_combination(pa.stem(), pb.stem()) {
                out.push(PillarRelation {
                    kind: RelationKind::StemCombination,
                    between,
                    element: Some(element),
                });
            }
            if let Some(element) = branch_harmony(pa.branch(), pb.branch()) {
                out.push(PillarRelation {
                    kind: RelationKind::BranchHarmony,
                    between,
                    element: Some(element),
                });
            }
            if branch_clash(pa.branch(), pb.branch()) {
                out.push(PillarRelation {
                    kind: RelationKind::BranchClash,
                    between,
                    element: None,
                });
            }
        }
    }
    out
}

/// Populate a chart from already computed pillars.
pub fn assemble_chart(
    pillars: &FourPillars,
    solar_time: SolarTime,
    lunar_date: LunarDate,
    gender: Gender,
) -> Result<BaziChart, BaziError> {
    let t = tables();
    let element_tally = element_tally(pillars);
    if element_tally.total() != 8 {
        return Err(ComputationError::Inconsistent("element tally does not sum to 8").into());
    }

    let day_master = t.element_of(pillars.day.stem());
    let year_branch = pillars.year.branch();
    let chart = BaziChart {
        pillars: ChartPillars {
            year: pillar_detail(t, pillars, pillars.year)?,
            month: pillar_detail(t, pillars, pillars.month)?,
            day: pillar_detail(t, pillars, pillars.day)?,
            hour: pillar_detail(t, pillars, pillars.hour)?,
        },
        element_tally,
        day_master,
        lucky_element: lucky_element(day_master),
        unlucky_element: unlucky_element(day_master),
        solar_time: CorrectedTime::from(solar_time),
        lunar_date,
        zodiac: Zodiac {
            branch: year_branch,
            animal: year_branch.zodiac_animal().to_owned(),
            animal_chinese: year_branch.zodiac_chinese().to_owned(),
        },
        void_branches: pillars.day.pair.void_branches(),
        relations: pillar_relations(pillars),
        gender,
        source: ChartSource::Local,
    };
    debug!(
        day_master = day_master.name(),
        lucky = chart.lucky_element.name(),
        unlucky = chart.unlucky_element.name(),
        tally = ?chart.element_tally,
        "assembled chart"
    );
    Ok(chart)
}

/// Compute a full chart locally. Needs no network access.
pub fn compute_chart(input: &BirthInput, options: &ChartOptions) -> Result<BaziChart, BaziError> {
    let computed = compute_pillars(input, options)?;
    assemble_chart(
        &computed.pillars,
        computed.solar_time,
        computed.lunar_date,
        input.gender,
    )
}

impl BaziChart {
    /// Structural check of a chart received from elsewhere: valid pairs in
    /// the right positions, labels matching their symbols, tables honoured,
    /// and derived elements consistent with the Day pillar.
    pub fn verify(&self) -> Result<(), BaziError> {
        let t = tables();
        let fail = |what: &'static str| -> Result<(), BaziError> {
            Err(ComputationError::Inconsistent(what).into())
        };

        let mut tally = ElementTally::default();
        for (detail, role) in self.pillars.iter().zip(ALL_ROLES) {
            if detail.role != role {
                return fail("pillar out of position");
            }
            let pair = bazi_tables::SexagenaryPair::new(detail.stem, detail.branch)?;
            if detail.cycle_index != pair.cycle_index() {
                return fail("cycle index does not match pillar");
            }
            if detail.element != detail.stem.element()
                || detail.stem_label.chinese != detail.stem.chinese()
                || detail.branch_label.chinese != detail.branch.chinese()
            {
                return fail("pillar labels do not match symbols");
            }
            let hidden: Vec<HeavenlyStem> = detail.hidden_stems.iter().map(|h| h.stem).collect();
            let expected: Vec<HeavenlyStem> =
                t.hidden_stems(detail.branch).iter().map(|h| h.stem).collect();
            if hidden != expected {
                return fail("hidden stems do not match branch");
            }
            if detail.nayin.label.chinese != t.nayin(detail.stem, detail.branch)?.chinese {
                return fail("na yin does not match pillar");
            }
            tally.add(detail.stem.element());
            tally.add(detail.branch.element());
        }

        if tally != self.element_tally || tally.total() != 8 {
            return fail("element tally does not match pillars");
        }
        let dm = self.pillars.day.stem.element();
        if self.day_master != dm {
            return fail("day master does not match day stem");
        }
        if self.lucky_element != lucky_element(dm) || self.unlucky_element != unlucky_element(dm)
        {
            return fail("favourable elements do not match day master");
        }
        if self.solar_time.hour > 23 || self.solar_time.minute > 59 {
            return fail("solar time out of range");
        }
        if !(1..=12).contains(&self.lunar_date.month) || !(1..=30).contains(&self.lunar_date.day) {
            return fail("lunar date out of range");
        }
        Ok(())
    }
}
