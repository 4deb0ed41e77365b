//! Drives one complete run: resolve sources, load them in order into a
//! settings store, then apply the store.
//!
//! Sources are loaded strictly one after another and the apply pass starts
//! only after every load has finished. A source that fails to load adds
//! nothing to the store; its error is kept and the remaining sources are
//! still loaded and applied, but the run as a whole fails.

use std::path::PathBuf;

use crate::apply::{Applicator, SettingWriter};
use crate::models::RunResult;
use crate::prefix::PrefixSet;
use crate::source::{self, SourceError};
use crate::store::SettingsStore;

/// Where the settings come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSelection {
    /// Files named on the command line. Each must exist.
    Explicit(Vec<PathBuf>),
    /// `*.conf` files discovered under these directories (ascending precedence).
    Discover(Vec<PathBuf>),
}

impl SourceSelection {
    /// Explicit files when any are given, directory discovery otherwise.
    pub fn from_args(files: Vec<PathBuf>, conf_dirs: Vec<PathBuf>) -> Self {
        if files.is_empty() {
            SourceSelection::Discover(conf_dirs)
        } else {
            SourceSelection::Explicit(files)
        }
    }

    /// Resolve to the ordered list of files to load.
    ///
    /// The flag says whether a missing file is tolerated.
    pub fn resolve(&self) -> Result<Vec<(PathBuf, bool)>, SourceError> {
        match self {
            SourceSelection::Explicit(files) => Ok(files.iter().map(|f| (f.clone(), false)).collect()),
            SourceSelection::Discover(dirs) => Ok(source::discover_sources(dirs.as_slice())?
                .into_iter()
                .map(|f| (f, true))
                .collect()),
        }
    }
}

/// Settings loaded from every source, plus whatever went wrong on the way.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub store: SettingsStore,
    pub sources: Vec<PathBuf>,
    pub errors: Vec<SourceError>,
}

/// Load every selected source into a fresh store, in order.
pub fn load_store(selection: &SourceSelection) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();

    let files = match selection.resolve() {
        Ok(files) => files,
        Err(e) => {
            tracing::error!("{e}");
            outcome.errors.push(e);
            return outcome;
        }
    };

    for (path, tolerate_missing) in files {
        match source::load_source(&path, tolerate_missing) {
            Ok(settings) => {
                outcome
                    .store
                    .load(settings.into_iter().map(|s| (s.key, s.value)));
            }
            Err(e) => {
                tracing::error!("{e}");
                outcome.errors.push(e);
            }
        }
        outcome.sources.push(path);
    }

    outcome
}

/// Everything a caller needs to report on a finished run.
#[derive(Debug)]
pub struct RunReport {
    pub sources: Vec<PathBuf>,
    pub load_errors: Vec<SourceError>,
    pub run: RunResult,
}

impl RunReport {
    /// Succeeds only without load errors and without fatal apply failures.
    pub fn is_success(&self) -> bool {
        self.load_errors.is_empty() && self.run.is_success()
    }

    /// The first failure to report: a load error takes precedence over an
    /// apply failure, matching the order they happened in.
    pub fn first_error(&self) -> Option<String> {
        self.load_errors
            .first()
            .map(ToString::to_string)
            .or_else(|| self.run.first_fatal().map(ToString::to_string))
    }
}

/// Ties source selection, prefix filter and write policy together.
#[derive(Debug, Clone)]
pub struct ApplyOrchestrator {
    selection: SourceSelection,
    prefixes: PrefixSet,
    strict: bool,
}

impl ApplyOrchestrator {
    pub fn new(selection: SourceSelection, prefixes: PrefixSet) -> Self {
        Self {
            selection,
            prefixes,
            strict: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn selection(&self) -> &SourceSelection {
        &self.selection
    }

    /// Load all sources, then apply the merged store through `writer`.
    pub fn run<W: SettingWriter>(&self, writer: W) -> RunReport {
        let loaded = load_store(&self.selection);
        tracing::debug!(
            sources = loaded.sources.len(),
            settings = loaded.store.len(),
            "loaded configuration"
        );

        let run = Applicator::new(writer)
            .strict(self.strict)
            .apply_all(&loaded.store, &self.prefixes);

        RunReport {
            sources: loaded.sources,
            load_errors: loaded.errors,
            run,
        }
    }
}
