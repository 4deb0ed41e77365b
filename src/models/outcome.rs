//! Per-key apply outcomes and the failure vocabulary they carry.

use serde::Serialize;
use strum::AsRefStr;
use thiserror::Error;

/// Why writing a setting failed.
///
/// The first four kinds are what the kernel reports when a setting is absent
/// or when we lack the privilege to change it (a read-only `/proc/sys` is how
/// container managers usually protect their sysctls). Everything else is
/// carried as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
#[serde(tag = "kind", content = "message", rename_all = "kebab-case")]
pub enum FailureReason {
    #[error("operation not permitted")]
    PermissionDenied,
    #[error("permission denied")]
    AccessDenied,
    #[error("read-only file system")]
    ReadOnly,
    #[error("no such file or directory")]
    NotFound,
    #[error("{0}")]
    Other(String),
}

impl FailureReason {
    /// Whether a failure of this kind may be logged and skipped without
    /// failing the run.
    pub fn is_tolerable(&self) -> bool {
        !matches!(self, FailureReason::Other(_))
    }
}

/// Result of processing one store entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum ApplyOutcome {
    Applied,
    SkippedByFilter,
    TolerableFailure(FailureReason),
    FatalFailure(FailureReason),
}

impl ApplyOutcome {
    /// Classify a write result.
    ///
    /// With `strict` set, every failure counts as fatal.
    pub fn classify(result: Result<(), FailureReason>, strict: bool) -> Self {
        match result {
            Ok(()) => ApplyOutcome::Applied,
            Err(reason) if reason.is_tolerable() && !strict => ApplyOutcome::TolerableFailure(reason),
            Err(reason) => ApplyOutcome::FatalFailure(reason),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, ApplyOutcome::FatalFailure(_))
    }

    /// The failure behind this outcome, if any.
    pub fn reason(&self) -> Option<&FailureReason> {
        match self {
            ApplyOutcome::TolerableFailure(r) | ApplyOutcome::FatalFailure(r) => Some(r),
            ApplyOutcome::Applied | ApplyOutcome::SkippedByFilter => None,
        }
    }
}
