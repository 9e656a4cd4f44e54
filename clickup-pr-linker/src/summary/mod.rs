//! Run summary types and helpers.

mod failure;
mod run_summary;

pub use failure::{Phase, PhaseFailure};
pub use run_summary::RunSummary;
