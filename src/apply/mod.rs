//! Applies a finished settings store to the live system.
//!
//! Every entry is attempted, in store order. Failures are classified and
//! logged per key; the pass itself never stops early, so independent
//! settings still get applied when the kernel rejects some of them.

pub mod writer;

pub use writer::{ProcSysWriter, SettingWriter, classify_io_error};

use crate::models::{ApplyOutcome, RunResult};
use crate::normalize::normalize;
use crate::prefix::PrefixSet;
use crate::store::SettingsStore;

/// Walks a store and writes each selected entry.
pub struct Applicator<W> {
    writer: W,
    strict: bool,
}

impl<W: SettingWriter> Applicator<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            strict: false,
        }
    }

    /// Count permission, read-only and not-found failures as fatal too.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Apply every entry of `store` that `prefixes` selects.
    pub fn apply_all(&mut self, store: &SettingsStore, prefixes: &PrefixSet) -> RunResult {
        let mut run = RunResult::new();

        for (key, value) in store.entries() {
            if !prefixes.matches(key) {
                tracing::debug!(key, "not selected by prefix filter, skipping");
                run.record(key, value, ApplyOutcome::SkippedByFilter);
                continue;
            }

            let value = normalize(value);
            tracing::debug!(key, value = %value, "setting");

            let outcome = ApplyOutcome::classify(self.writer.write(key, &value), self.strict);
            match &outcome {
                ApplyOutcome::Applied => tracing::debug!(key, value = %value, "applied"),
                ApplyOutcome::TolerableFailure(reason) => {
                    tracing::info!("Couldn't write '{value}' to '{key}', ignoring: {reason}");
                }
                ApplyOutcome::FatalFailure(reason) => {
                    tracing::error!("Couldn't write '{value}' to '{key}': {reason}");
                }
                ApplyOutcome::SkippedByFilter => {}
            }

            run.record(key, value, outcome);
        }

        run
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

/// Apply `store` through `writer` with default (non-strict) classification.
pub fn apply_all<W: SettingWriter>(store: &SettingsStore, prefixes: &PrefixSet, writer: W) -> RunResult {
    Applicator::new(writer).apply_all(store, prefixes)
}
