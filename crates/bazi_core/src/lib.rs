//! Four Pillars (BaZi) chart engine.
//!
//! [`compute_chart`] turns a [`BirthInput`] into a [`BaziChart`]:
//!
//! 1. civil time → true solar time (`bazi_time`)
//! 2. civil date → lunar date (`bazi_calendar`)
//! 3. Year, Month, Day and Hour pillars ([`pillar`])
//! 4. table lookups, element tally, Day Master ([`chart`])
//!
//! All of it is pure and synchronous; nothing here touches the network.

pub mod chart;
pub mod chart_types;
pub mod error;
pub mod input;
pub mod options;
pub mod pillar;

pub use chart::{
    assemble_chart, compute_chart, element_tally, lucky_element, pillar_relations,
    unlucky_element,
};
pub use chart_types::{
    BaziChart, ChartPillars, ChartSource, CorrectedTime, ElementTally, HiddenStemEntry, Label,
    NaYinEntry, PillarDetail, PillarRelation, RelationKind, SpiritEntry, Zodiac,
};
pub use error::{BaziError, ComputationError, ValidationError};
pub use input::{BirthInput, Gender, validate_birth};
pub use options::{
    ALMANAC_JIAZI_ANCHOR, ChartOptions, DEFAULT_DAY_ANCHOR, DEFAULT_UTC_OFFSET_MINUTES,
    ZiHourPolicy,
};
pub use pillar::{
    FourPillars, Pillar, PillarComputation, compute_pillars, day_pillar, hour_branch,
    hour_pillar, month_pillar, year_pillar,
};
