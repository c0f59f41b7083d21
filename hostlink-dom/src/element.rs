//! The element abstraction the helpers operate on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute access on a document element.
pub trait Element {
    /// The attribute's value, if set.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Set an attribute, replacing any previous value.
    fn set_attribute(&mut self, name: &str, value: String);

    /// Remove an attribute. No-op if it was not set.
    fn remove_attribute(&mut self, name: &str);
}

/// A detached element held in memory.
///
/// Serializable, so fixtures can be written as JSON:
/// `{ "tag": "input", "attributes": { "type": "email" } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryElement {
    /// Tag name, e.g. `"input"`.
    pub tag: String,
    /// Attributes by name.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl MemoryElement {
    /// Create an element with no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Shorthand for an `<input type=...>`.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self::new("input").with_attribute("type", input_type)
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    fn set_attribute(&mut self, name: &str, value: String) {
        self.attributes.insert(name.to_string(), value);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}
