//! Ordered, override-aware settings map.
//!
//! Keys are normalized on the way in, so both spellings of a key land on
//! the same entry. A repeated key overwrites the earlier value in place:
//! the entry keeps the position it was first inserted at.

use indexmap::IndexMap;

use crate::normalize::normalize;

/// Key/value pairs collected from every loaded source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    entries: IndexMap<String, String>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or override one setting. Returns the value it replaced.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        self.entries.insert(normalize(key), value.into())
    }

    /// Feed the pairs of one source in declaration order.
    pub fn load<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in pairs {
            if let Some(previous) = self.insert(key.as_ref(), value) {
                tracing::debug!(key = key.as_ref(), %previous, "overriding earlier value");
            }
        }
    }

    /// Value for `key`, looked up in either spelling.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(&normalize(key)).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in enumeration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn later_source_overrides_earlier() {
        let mut store = SettingsStore::new();
        store.load([("a.b", "1")]);
        store.load([("a.b", "2")]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a.b"), Some("2"));
    }

    #[test]
    fn override_within_one_source() {
        let mut store = SettingsStore::new();
        store.load([("kernel.sysrq", "0"), ("vm.swappiness", "10"), ("kernel.sysrq", "1")]);

        let entries: Vec<_> = store.entries().collect();
        assert_eq!(entries, vec![("kernel/sysrq", "1"), ("vm/swappiness", "10")]);
    }

    #[test]
    fn both_spellings_share_an_entry() {
        let mut store = SettingsStore::new();
        store.insert("net.ipv4.ip_forward", "0");
        let previous = store.insert("net/ipv4/ip_forward", "1");

        assert_eq!(previous.as_deref(), Some("0"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("net.ipv4.ip_forward"), Some("1"));
    }

    #[test]
    fn values_are_stored_verbatim() {
        let mut store = SettingsStore::new();
        store.insert("net.ipv4.tcp_rmem", "4096  87380 6291456");
        assert_eq!(store.get("net/ipv4/tcp_rmem"), Some("4096  87380 6291456"));
    }

    #[test]
    fn empty_store() {
        let store = SettingsStore::new();
        assert!(store.is_empty());
        assert_eq!(store.entries().count(), 0);
    }
}
