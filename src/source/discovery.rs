//! Enumerate `*.conf` files across the standard configuration directories.
//!
//! Directories are given in ascending precedence. A file in a later
//! directory replaces every same-named file from earlier ones, and a file
//! symlinked to `/dev/null` masks the name entirely. The surviving files
//! are returned sorted by file name, regardless of which directory they
//! came from.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::SourceError;
use crate::constants::{CONF_SUFFIX, MASK_TARGET};

/// List the configuration files to load, in load order.
///
/// Missing directories are skipped. A path that cannot be inspected, is not
/// a directory, or cannot be read is an error.
pub fn discover_sources<P: AsRef<Path>>(dirs: &[P]) -> Result<Vec<PathBuf>, SourceError> {
    // `None` marks a masked name.
    let mut by_name: BTreeMap<OsString, Option<PathBuf>> = BTreeMap::new();

    for dir in dirs {
        let dir = dir.as_ref();
        let discovery_error = |source: io::Error| SourceError::Discovery {
            dir: dir.to_path_buf(),
            source,
        };

        match std::fs::metadata(dir) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                return Err(discovery_error(io::Error::new(
                    io::ErrorKind::NotADirectory,
                    "not a directory",
                )));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "configuration directory not present, skipping");
                continue;
            }
            Err(e) => return Err(discovery_error(e)),
        }

        let walker = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();
        for entry in walker {
            let entry = entry.map_err(|e| discovery_error(e.into()))?;

            let name = entry.file_name().to_os_string();
            if !name.to_string_lossy().ends_with(CONF_SUFFIX) {
                continue;
            }

            let path = entry.path();
            if is_masked(path) {
                tracing::debug!(path = %path.display(), "configuration file masked");
                by_name.insert(name, None);
                continue;
            }

            // Follows symlinks, so a link to a regular file counts.
            if !path.is_file() {
                continue;
            }

            if let Some(Some(previous)) = by_name.insert(name, Some(path.to_path_buf())) {
                tracing::debug!(
                    path = %path.display(),
                    replaced = %previous.display(),
                    "configuration file overrides lower-precedence copy"
                );
            }
        }
    }

    Ok(by_name.into_values().flatten().collect())
}

fn is_masked(path: &Path) -> bool {
    std::fs::read_link(path).is_ok_and(|target| target == Path::new(MASK_TARGET))
}
