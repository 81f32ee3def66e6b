//! Error type for table lookups.

use thiserror::Error;

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Errors from sexagenary table lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TableError {
    /// Stem and branch differ in Yin/Yang parity; no such pair exists.
    #[error(
        "parity mismatch: {} ({}) cannot pair with {} ({})",
        .stem.name(),
        .stem.chinese(),
        .branch.name(),
        .branch.chinese()
    )]
    ParityMismatch {
        stem: HeavenlyStem,
        branch: EarthlyBranch,
    },
    #[error("stem index out of range: {0}")]
    StemIndexOutOfRange(u8),
    #[error("branch index out of range: {0}")]
    BranchIndexOutOfRange(u8),
    #[error("sexagenary cycle index out of range: {0}")]
    CycleIndexOutOfRange(u8),
}
