//! Named helper functions supplied by the host.

use crate::error::DepsError;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A host helper: JSON arguments in, JSON out.
pub type UtilityFn = Arc<dyn Fn(&[Value]) -> Value + Send + Sync>;

/// A set of named helpers.
///
/// Replaced wholesale on every `connect` that carries one; there is no
/// per-name merging.
#[derive(Clone, Default)]
pub struct Utilities {
    fns: HashMap<String, UtilityFn>,
}

impl Utilities {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            fns: HashMap::new(),
        }
    }

    /// Builder-style registration.
    pub fn with(
        mut self,
        name: impl Into<String>,
        f: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.register(name, f);
        self
    }

    /// Register a helper, replacing any helper with the same name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        f: impl Fn(&[Value]) -> Value + Send + Sync + 'static,
    ) {
        self.fns.insert(name.into(), Arc::new(f));
    }

    /// Look up a helper by name.
    pub fn get(&self, name: &str) -> Option<&UtilityFn> {
        self.fns.get(name)
    }

    /// Call a helper by name.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value, DepsError> {
        let f = self
            .get(name)
            .ok_or_else(|| DepsError::MissingUtility(name.to_string()))?;
        Ok(f(args))
    }

    /// Whether a helper with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.fns.contains_key(name)
    }

    /// Registered names, unordered.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fns.keys().map(String::as_str)
    }

    /// Number of helpers.
    pub fn len(&self) -> usize {
        self.fns.len()
    }

    /// Returns true if no helper is registered.
    pub fn is_empty(&self) -> bool {
        self.fns.is_empty()
    }
}

impl fmt::Debug for Utilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("Utilities").field("names", &names).finish()
    }
}
