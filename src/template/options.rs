// ABOUTME: Template environment options and their LaTeX-friendly defaults
// ABOUTME: Provides the option mapping type, default values and override merging

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::btree_map::{self, BTreeMap};

/// A mapping of engine option names to values.
///
/// Cloning produces an independent copy; there is no shared storage between
/// two `Options` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, Value>);

static DEFAULT_OPTIONS: Lazy<Options> = Lazy::new(|| {
    Options::new()
        .with("trim_blocks", true)
        .with("block_start_string", "@@")
        .with("block_end_string", "@@")
        .with("variable_start_string", "@=")
        .with("variable_end_string", "=@")
        .with("autoescape", false)
        .with("comment_start_string", r"\#{")
        .with("comment_end_string", "}")
        .with("line_statement_prefix", "%%")
        .with("line_comment_prefix", "%#")
});

/// Return a fresh copy of the default options.
///
/// Mutating the returned value never affects later calls.
pub fn default_options() -> Options {
    DEFAULT_OPTIONS.clone()
}

impl Options {
    /// Create an empty option mapping
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style setter
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Set an option, returning the previous value if there was one
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Shallow merge: every key in `overrides` replaces the value stored here.
    /// Keys absent from `overrides` keep their current value.
    pub fn merge(&mut self, overrides: Options) {
        self.0.extend(overrides.0);
    }

    /// Return a copy of `self` with `overrides` merged on top
    pub fn merged(&self, overrides: Options) -> Options {
        let mut merged = self.clone();
        merged.merge(overrides);
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for Options
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<K, V> Extend<(K, V)> for Options
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for Options {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Options {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
