//! Loading settings sources from disk.
//!
//! A source is one configuration file. Explicitly named sources must exist;
//! sources found by directory discovery may disappear between enumeration
//! and reading, which is tolerated. Malformed content is an error either way.

pub mod discovery;
pub mod parser;

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use discovery::discover_sources;
pub use parser::{ParseError, Setting, parse_settings};

/// Errors while locating or reading sources.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("configuration file {} does not exist", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to enumerate {}: {source}", .dir.display())]
    Discovery { dir: PathBuf, source: io::Error },
}

/// Read one source.
///
/// With `tolerate_missing` a nonexistent file reads as `None`.
pub fn read_source(path: &Path, tolerate_missing: bool) -> Result<Option<String>, SourceError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound && tolerate_missing => {
            tracing::debug!(path = %path.display(), "configuration file vanished, ignoring");
            Ok(None)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(SourceError::Missing {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(SourceError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read and parse one source into settings, in declaration order.
///
/// Single attempt: either the whole file parses or nothing is returned.
pub fn load_source(path: &Path, tolerate_missing: bool) -> Result<Vec<Setting>, SourceError> {
    tracing::debug!(path = %path.display(), "parsing");

    let Some(content) = read_source(path, tolerate_missing)? else {
        return Ok(Vec::new());
    };

    parse_settings(&content, path).map_err(|e| {
        tracing::debug!(error = %e, "parse failed");
        SourceError::Parse(e)
    })
}
