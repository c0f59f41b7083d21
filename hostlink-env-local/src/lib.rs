#![deny(missing_docs)]
//! Local (in-process) implementation of hostlink's Environment trait.
//!
//! The host and the widget live in the same process. The wire is a tokio
//! channel: the widget side sends through [`LoopbackWire`], the host side
//! pulls requests off the matching [`WireReceiver`] and answers each one.

mod wire;

pub use wire::{LoopbackWire, WireReceiver, WireRequest, loopback};

use hostlink_core::{Environment, LocaleCode, LocaleResolver, Wire};
use std::sync::Arc;

/// In-process environment.
///
/// Offers a wire and a fixed locale when configured with them, and
/// nothing otherwise.
#[derive(Clone, Default)]
pub struct LocalEnv {
    wire: Option<Arc<dyn Wire>>,
    locale: Option<LocaleCode>,
}

impl LocalEnv {
    /// Create an environment with no capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expose a wire to the widget.
    pub fn with_wire(mut self, wire: Arc<dyn Wire>) -> Self {
        self.wire = Some(wire);
        self
    }

    /// Report this locale as the user's current locale.
    pub fn with_locale(mut self, locale: impl Into<LocaleCode>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// An environment wired to a fresh loopback channel. Returns the host's receiving side.
    pub fn loopback(buffer: usize) -> (Self, WireReceiver) {
        let (wire, receiver) = loopback(buffer);
        (Self::new().with_wire(Arc::new(wire)), receiver)
    }
}

impl Environment for LocalEnv {
    fn wire(&self) -> Option<Arc<dyn Wire>> {
        self.wire.clone()
    }

    fn locale_resolver(&self) -> Option<Arc<dyn LocaleResolver>> {
        let locale = self.locale.clone()?;
        Some(Arc::new(move || Some(locale.clone())))
    }
}
