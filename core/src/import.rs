//! ImportSpec - which nested results a parent flow takes over
//!
//! Each entry pairs a parent key with a nested key. Shorthand conversions
//! use the same name on both sides.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSpec {
    pairs: Vec<(String, String)>,
}

impl ImportSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import `key` under the same name
    pub fn same(self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.rename(key.clone(), key)
    }

    /// Import the nested `nested` key as the parent `parent` key
    pub fn rename(mut self, parent: impl Into<String>, nested: impl Into<String>) -> Self {
        self.pairs.push((parent.into(), nested.into()));
        self
    }

    /// `(parent_key, nested_key)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<const N: usize> From<[&str; N]> for ImportSpec {
    fn from(keys: [&str; N]) -> Self {
        keys.into_iter().fold(ImportSpec::new(), ImportSpec::same)
    }
}

impl From<&[&str]> for ImportSpec {
    fn from(keys: &[&str]) -> Self {
        keys.iter().copied().fold(ImportSpec::new(), ImportSpec::same)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ImportSpec {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .fold(ImportSpec::new(), |spec, (parent, nested)| {
                spec.rename(parent, nested)
            })
    }
}

impl From<Vec<(String, String)>> for ImportSpec {
    fn from(pairs: Vec<(String, String)>) -> Self {
        ImportSpec { pairs }
    }
}
