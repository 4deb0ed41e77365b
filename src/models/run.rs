//! Aggregate result of one apply pass.

use serde::Serialize;
use thiserror::Error;

use super::outcome::{ApplyOutcome, FailureReason};

/// Outcome recorded for a single store entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyOutcome {
    pub key: String,
    pub value: String,
    #[serde(flatten)]
    pub outcome: ApplyOutcome,
}

/// A failed write, identified by the setting it targeted.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("couldn't write '{value}' to '{key}': {reason}")]
pub struct KeyFailure {
    pub key: String,
    pub value: String,
    pub reason: FailureReason,
}

/// Result of a full apply pass.
///
/// Every entry is recorded in processing order. The first fatal failure is
/// kept for reporting; later ones are only visible through [`outcomes()`].
///
/// [`outcomes()`]: RunResult::outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunResult {
    outcomes: Vec<KeyOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_fatal: Option<KeyFailure>,
}

impl RunResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the outcome for one entry.
    pub fn record(&mut self, key: impl Into<String>, value: impl Into<String>, outcome: ApplyOutcome) {
        let key = key.into();
        let value = value.into();

        if let ApplyOutcome::FatalFailure(reason) = &outcome {
            if self.first_fatal.is_none() {
                self.first_fatal = Some(KeyFailure {
                    key: key.clone(),
                    value: value.clone(),
                    reason: reason.clone(),
                });
            }
        }

        self.outcomes.push(KeyOutcome { key, value, outcome });
    }

    /// `true` unless some entry failed fatally.
    pub fn is_success(&self) -> bool {
        self.first_fatal.is_none()
    }

    pub fn first_fatal(&self) -> Option<&KeyFailure> {
        self.first_fatal.as_ref()
    }

    pub fn outcomes(&self) -> &[KeyOutcome] {
        &self.outcomes
    }

    /// Outcome recorded for `key`, if it was processed.
    pub fn outcome_for(&self, key: &str) -> Option<&ApplyOutcome> {
        self.outcomes.iter().find(|o| o.key == key).map(|o| &o.outcome)
    }

    pub fn summary(&self) -> Summary {
        Summary::from_outcomes(&self.outcomes)
    }
}

/// Counts per outcome class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub applied: usize,
    pub skipped: usize,
    pub tolerated: usize,
    pub failed: usize,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[KeyOutcome]) -> Self {
        let mut s = Summary::default();
        for o in outcomes {
            match o.outcome {
                ApplyOutcome::Applied => s.applied += 1,
                ApplyOutcome::SkippedByFilter => s.skipped += 1,
                ApplyOutcome::TolerableFailure(_) => s.tolerated += 1,
                ApplyOutcome::FatalFailure(_) => s.failed += 1,
            }
        }
        s
    }

    pub fn total(&self) -> usize {
        self.applied + self.skipped + self.tolerated + self.failed
    }
}
