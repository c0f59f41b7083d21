//! StubEnvironment — hands out whatever capabilities it was built with.

use crate::environment::{Environment, LocaleResolver, Wire};
use crate::locale::LocaleCode;
use std::sync::Arc;

/// An environment assembled from optional parts.
#[derive(Default, Clone)]
pub struct StubEnvironment {
    wire: Option<Arc<dyn Wire>>,
    locale: Option<LocaleCode>,
}

impl StubEnvironment {
    /// Create an environment with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose this wire.
    pub fn with_wire(mut self, wire: Arc<dyn Wire>) -> Self {
        self.wire = Some(wire);
        self
    }

    /// Expose a resolver that always reports this locale.
    pub fn with_locale(mut self, locale: impl Into<LocaleCode>) -> Self {
        self.locale = Some(locale.into());
        self
    }
}

impl Environment for StubEnvironment {
    fn wire(&self) -> Option<Arc<dyn Wire>> {
        self.wire.clone()
    }

    fn locale_resolver(&self) -> Option<Arc<dyn LocaleResolver>> {
        let locale = self.locale.clone()?;
        Some(Arc::new(move || Some(locale.clone())))
    }
}
