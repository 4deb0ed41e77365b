//! `key = value` settings parser.
//!
//! One setting per line. Blank lines and lines starting with `#` or `;` are
//! comments. The namespace is flat, so `[section]` headers are rejected.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Malformed content in a settings file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at '{}:{line}'", .file.display())]
pub struct ParseError {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

/// One `key = value` line, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub line: usize,
}

/// Parse settings in file-declaration order.
///
/// Parsing is all-or-nothing: the first malformed line fails the whole
/// source.
pub fn parse_settings(content: &str, file: &Path) -> Result<Vec<Setting>, ParseError> {
    let mut settings = Vec::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        let error = |message: &str| ParseError {
            file: file.to_path_buf(),
            line,
            message: message.to_string(),
        };

        if trimmed.starts_with('[') {
            return Err(error("section headers are not supported"));
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(error("'=' character not found in line"));
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(error("empty key name"));
        }

        settings.push(Setting {
            key: key.to_string(),
            value: value.trim().to_string(),
            line,
        });
    }

    Ok(settings)
}
