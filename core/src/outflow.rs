//! Outflow - The Result Store
//!
//! Every step of a flow reads from (and may write into) the same ordered
//! key/value store. Insertion order is kept for deterministic iteration and
//! debugging; reads never depend on it.

use crate::truth::{Truth, Truthy};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Ordered mapping of intermediate results produced by a flow.
///
/// Reading a missing key is not an error: `get` returns `None`, so steps can
/// read speculatively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outflow<V = serde_json::Value> {
    entries: IndexMap<String, V>,
}

impl<V> Outflow<V> {
    /// Create an empty store
    pub fn new() -> Self {
        Outflow {
            entries: IndexMap::new(),
        }
    }

    /// Insert or overwrite a value.
    ///
    /// An overwritten key keeps its original position. Returns the previous
    /// value, if any.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    /// Read the current value under `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a key, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Truthy> Outflow<V> {
    /// Truthiness of the value under `key`; a missing key is `Truth::Absent`.
    pub fn truth(&self, key: &str) -> Truth {
        self.get(key).truth()
    }
}

impl Outflow<serde_json::Value> {
    /// Typed read of a JSON value.
    ///
    /// Returns `None` when the key is missing or does not deserialize into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

impl<V> Default for Outflow<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Outflow<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Outflow {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for Outflow<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<V> IntoIterator for Outflow<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
