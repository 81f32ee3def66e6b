//! Static sexagenary data for Four Pillars charts.
//!
//! Everything here is immutable and `'static`: closed enums for the 10
//! stems, 12 branches and 5 elements, and const tables for hidden stems,
//! Na Yin, Ten Gods, spirits and pairwise relations. [`tables()`] hands out
//! the one shared [`SexagenaryTables`] view.

pub mod branch;
pub mod element;
pub mod error;
pub mod hidden_stems;
pub mod nayin;
pub mod relations;
pub mod role;
pub mod sexagenary;
pub mod shensha;
pub mod stem;
pub mod tables;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, EarthlyBranch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::TableError;
pub use hidden_stems::{HiddenStem, hidden_stems, primary_stem};
pub use nayin::{NaYin, nayin, nayin_of};
pub use relations::{branch_clash, branch_harmony, stem_combination};
pub use role::{ALL_ROLES, PillarRole};
pub use sexagenary::{CYCLE_LEN, SexagenaryPair};
pub use shensha::{ShenSha, auxiliary_spirits, derived_spirits};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use tables::{HasElement, SexagenaryTables, tables};
pub use ten_god::{TenGod, ten_god};
