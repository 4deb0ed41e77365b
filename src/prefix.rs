//! Path-prefix filtering of sysctl keys.
//!
//! Prefixes arrive from the command line in either key spelling and with or
//! without the `/proc/sys/` root. They are normalized and anchored once, at
//! construction, and compared against keys segment by segment so that
//! `net/ipv4` selects `net/ipv4/ip_forward` but not `net/ipv4x/foo`.

use indexmap::IndexSet;

use crate::constants::PROC_SYS_ROOT;
use crate::normalize::normalize;

/// Ordered, de-duplicated set of anchored prefixes. Empty selects every key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSet {
    prefixes: IndexSet<String>,
}

impl PrefixSet {
    /// A set that matches everything.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a set from raw prefix arguments.
    ///
    /// Each prefix is normalized and placed under `/proc/sys/` unless it
    /// already lives there.
    pub fn from_args<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let prefixes = raw
            .into_iter()
            .map(|p| {
                let p = normalize(p.as_ref());
                if path_strip_prefix(&p, PROC_SYS_ROOT).is_some() {
                    p
                } else {
                    format!("{PROC_SYS_ROOT}{}", p.trim_start_matches('/'))
                }
            })
            .collect();
        Self { prefixes }
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    /// Whether `key` (relative to `/proc/sys/`) falls under any prefix.
    pub fn matches(&self, key: &str) -> bool {
        if self.prefixes.is_empty() {
            return true;
        }

        self.prefixes.iter().any(|prefix| {
            let bare = path_strip_prefix(prefix, PROC_SYS_ROOT).unwrap_or(prefix);
            path_strip_prefix(key, bare).is_some()
        })
    }
}

/// Strip `prefix` from `path` if it covers whole leading path segments.
///
/// Repeated slashes are treated as one. Both arguments must agree on being
/// absolute or relative. Returns the remainder without leading slashes.
pub fn path_strip_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    if path.starts_with('/') != prefix.starts_with('/') {
        return None;
    }

    let mut rest = path;
    for segment in prefix.split('/').filter(|s| !s.is_empty()) {
        let after = rest.trim_start_matches('/').strip_prefix(segment)?;
        if !(after.is_empty() || after.starts_with('/')) {
            return None;
        }
        rest = after;
    }

    Some(rest.trim_start_matches('/'))
}
