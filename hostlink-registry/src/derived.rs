//! Convenience fields pulled out of the environment.

use crate::config::ConnectorRevision;
use hostlink_core::{Environment, LocaleResolver, Wire};
use std::fmt;
use std::sync::Arc;

/// Capabilities the connector copies out of the environment so widget
/// components don't have to ask for them on every use.
///
/// Every field is optional. An environment that doesn't offer a
/// capability leaves the field `None`; nothing complains until a
/// component needs it.
#[derive(Clone, Default)]
pub struct DerivedFields {
    /// Transport to the host.
    pub wire: Option<Arc<dyn Wire>>,
    /// The host's current-locale resolver.
    pub locale_resolver: Option<Arc<dyn LocaleResolver>>,
}

impl DerivedFields {
    /// Extract the fields a revision asks for.
    pub fn extract(environment: &dyn Environment, revision: ConnectorRevision) -> Self {
        if !revision.extracts_derived() {
            return Self::default();
        }
        Self {
            wire: environment.wire(),
            locale_resolver: environment.locale_resolver(),
        }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.wire.is_none() && self.locale_resolver.is_none()
    }
}

impl fmt::Debug for DerivedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivedFields")
            .field("wire", &self.wire.is_some())
            .field("locale_resolver", &self.locale_resolver.is_some())
            .finish()
    }
}
