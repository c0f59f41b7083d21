//! Locale codes and translated text trees.
//!
//! A [`Localization`] maps a [`LocaleCode`] to a [`LocaleTree`]. The tree's
//! top-level keys are namespaces (`ui`, `validation`, ...) and each
//! namespace holds arbitrarily nested JSON. Lookups use dotted keys such as
//! `ui.form.sending`, where the first segment names the namespace.

use crate::error::DepsError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// A locale identifier such as `"en"` or `"pl"`.
///
/// Just a string underneath. No BCP 47 validation or case folding: the
/// host's keys are used exactly as supplied.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleCode(pub String);

impl LocaleCode {
    /// Create a new locale code from anything that converts to String.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleCode {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for LocaleCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The translated text for one locale, keyed by namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTree(Map<String, Value>);

impl LocaleTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build a tree from a JSON value. Returns `None` unless the value is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// The whole subtree stored under a namespace.
    pub fn namespace(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Set a namespace, returning the subtree it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// Whether the tree defines this namespace.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Namespace names, in key order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate `(namespace, subtree)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of namespaces.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the tree has no namespaces.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a dotted key (`ui.form.sending`) to the value stored there.
    pub fn lookup(&self, key: &str) -> Option<&Value> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut node = self.0.get(first)?;
        for segment in segments {
            node = node.as_object()?.get(segment)?;
        }
        Some(node)
    }

    /// Resolve a dotted key to a string. Non-string leaves and subtrees yield `None`.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.lookup(key).and_then(Value::as_str)
    }

    /// Convert into the underlying JSON value.
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for LocaleTree {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl IntoIterator for LocaleTree {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for LocaleTree {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Translated text for every locale the host knows about.
///
/// Serializes as a plain JSON object: `{ "en": { "ui": { ... } }, "pl": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Localization(BTreeMap<LocaleCode, LocaleTree>);

impl Localization {
    /// Create an empty localization.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with_locale(mut self, locale: impl Into<LocaleCode>, tree: LocaleTree) -> Self {
        self.0.insert(locale.into(), tree);
        self
    }

    /// Parse a localization from a JSON value.
    ///
    /// Every locale entry must be an object; namespace payloads are not checked.
    pub fn from_value(value: Value) -> Result<Self, DepsError> {
        serde_json::from_value(value).map_err(|e| DepsError::Serialization(e.to_string()))
    }

    /// Parse a localization from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, DepsError> {
        serde_json::from_str(json).map_err(|e| DepsError::Serialization(e.to_string()))
    }

    /// The tree for one locale.
    pub fn get(&self, locale: &str) -> Option<&LocaleTree> {
        self.0.get(locale)
    }

    /// Set the tree for a locale, returning the tree it replaced.
    pub fn insert(&mut self, locale: impl Into<LocaleCode>, tree: LocaleTree) -> Option<LocaleTree> {
        self.0.insert(locale.into(), tree)
    }

    /// Remove a locale, returning its tree.
    pub fn remove(&mut self, locale: &str) -> Option<LocaleTree> {
        self.0.remove(locale)
    }

    /// Whether this locale is present.
    pub fn contains(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    /// Locale codes, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleCode> {
        self.0.keys()
    }

    /// Iterate `(locale, tree)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&LocaleCode, &LocaleTree)> {
        self.0.iter()
    }

    /// Number of locales.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no locale is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Resolve a dotted key within one locale.
    pub fn text(&self, locale: &str, key: &str) -> Option<&str> {
        self.get(locale).and_then(|tree| tree.text(key))
    }
}

impl IntoIterator for Localization {
    type Item = (LocaleCode, LocaleTree);
    type IntoIter = std::collections::btree_map::IntoIter<LocaleCode, LocaleTree>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(LocaleCode, LocaleTree)> for Localization {
    fn from_iter<I: IntoIterator<Item = (LocaleCode, LocaleTree)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
