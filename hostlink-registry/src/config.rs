//! Connector configuration.

use hostlink_core::{DepsError, LocaleCode};
use serde::{Deserialize, Serialize};

/// Which fields the connector derives from the environment.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorRevision {
    /// Environment, localization and utilities only. Derived fields are cleared.
    Basic,
    /// Also pull the wire and locale resolver out of the environment.
    #[default]
    Extended,
}

impl ConnectorRevision {
    /// Whether this revision populates derived fields.
    pub fn extracts_derived(&self) -> bool {
        matches!(self, Self::Extended)
    }
}

/// Declarative connector settings. Serializable so a host can ship them as JSON.
///
/// ```json
/// { "revision": "basic", "home_locale": "en-GB" }
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectorConfig {
    /// Connector revision.
    #[serde(default)]
    pub revision: ConnectorRevision,

    /// File the default translations under this locale instead of the
    /// locale they were written for.
    #[serde(default)]
    pub home_locale: Option<LocaleCode>,
}

impl ConnectorConfig {
    /// Create a config for the given revision.
    pub fn new(revision: ConnectorRevision) -> Self {
        Self {
            revision,
            home_locale: None,
        }
    }

    /// Override the home locale.
    pub fn with_home_locale(mut self, locale: impl Into<LocaleCode>) -> Self {
        self.home_locale = Some(locale.into());
        self
    }

    /// Parse a config from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, DepsError> {
        serde_json::from_str(json).map_err(|e| DepsError::Config(e.to_string()))
    }
}
