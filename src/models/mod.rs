//! Shared result types.
//!
//! Apply outcomes and run results live here so the applicator, the
//! orchestrator and the output renderers agree on one vocabulary.

pub mod outcome;
pub mod run;

pub use outcome::{ApplyOutcome, FailureReason};
pub use run::{KeyFailure, KeyOutcome, RunResult, Summary};
