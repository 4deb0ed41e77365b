//! Environment variable access behind an injectable reader.
//!
//! The binary reads the real process environment through [`Env::process()`].
//! Tests and embedders build an [`Env::from_pairs()`] snapshot instead, so
//! nothing has to call [`std::env::set_var`].

use std::collections::HashMap;

/// Source of environment variables for configuration loading.
#[derive(Clone, Debug, Default)]
pub struct Env {
    snapshot: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the live process environment.
    pub fn process() -> Self {
        Self { snapshot: None }
    }

    /// Read from a fixed set of key-value pairs only.
    pub fn from_pairs(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            snapshot: Some(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    /// Look up a variable. Unset and non-UTF-8 values both yield `None`.
    pub fn get(&self, name: &str) -> Option<String> {
        match &self.snapshot {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    /// Look up a variable, treating an all-whitespace value as unset.
    pub fn get_non_empty(&self, name: &str) -> Option<String> {
        self.get(name)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_env_sees_cargo_vars() {
        let env = Env::process();
        assert!(env.get("CARGO_MANIFEST_DIR").is_some());
    }

    #[test]
    fn snapshot_returns_only_given_values() {
        let env = Env::from_pairs([("A", "1"), ("B", "2")]);
        assert_eq!(env.get("A").as_deref(), Some("1"));
        assert_eq!(env.get("B").as_deref(), Some("2"));
        assert!(env.get("CARGO_MANIFEST_DIR").is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let env = Env::from_pairs([("BLANK", "   "), ("SET", " x ")]);
        assert!(env.get_non_empty("BLANK").is_none());
        assert_eq!(env.get_non_empty("SET").as_deref(), Some("x"));
    }
}
