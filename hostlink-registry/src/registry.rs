//! The holder of everything the host injected.

use crate::defaults::HOME_LOCALE;
use crate::derived::DerivedFields;
use hostlink_core::{DepsError, Environment, LocaleCode, Localization, Utilities, UtilityFn, Wire};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Dependencies a widget reads at render and use time.
///
/// Fields are public: the connector writes them, everything else reads
/// them. The reader helpers turn a missing piece into a [`DepsError`]
/// where it is needed, instead of at connection time.
#[derive(Clone)]
pub struct Registry {
    /// Host capabilities. `None` until the first connect.
    pub environment: Option<Arc<dyn Environment>>,
    /// Translations: the home locale merged with defaults, other host locales verbatim.
    pub localization: Localization,
    /// Host helpers, if the host supplied any.
    pub utilities: Option<Utilities>,
    /// Fields extracted from the environment by the connector.
    pub derived: DerivedFields,
    /// The locale the defaults were merged into.
    pub home_locale: LocaleCode,
}

impl Registry {
    /// Create an empty, unconnected registry.
    pub fn new() -> Self {
        Self {
            environment: None,
            localization: Localization::new(),
            utilities: None,
            derived: DerivedFields::default(),
            home_locale: LocaleCode::new(HOME_LOCALE),
        }
    }

    /// Whether a bundle has been connected.
    pub fn is_connected(&self) -> bool {
        self.environment.is_some()
    }

    /// The host environment.
    pub fn environment(&self) -> Result<&Arc<dyn Environment>, DepsError> {
        self.environment.as_ref().ok_or(DepsError::NotConnected)
    }

    /// The host wire, as extracted by the connector.
    pub fn wire(&self) -> Result<&Arc<dyn Wire>, DepsError> {
        self.derived
            .wire
            .as_ref()
            .ok_or_else(|| DepsError::MissingCapability("wire".into()))
    }

    /// Look up a host helper.
    pub fn utility(&self, name: &str) -> Result<&UtilityFn, DepsError> {
        self.utilities
            .as_ref()
            .and_then(|u| u.get(name))
            .ok_or_else(|| DepsError::MissingUtility(name.to_string()))
    }

    /// Call a host helper.
    pub fn call_utility(&self, name: &str, args: &[Value]) -> Result<Value, DepsError> {
        let f = self.utility(name)?;
        Ok(f(args))
    }

    /// The locale to render in: whatever the host's resolver reports, else the home locale.
    pub fn current_locale(&self) -> LocaleCode {
        self.derived
            .locale_resolver
            .as_ref()
            .and_then(|r| r.current_locale())
            .unwrap_or_else(|| self.home_locale.clone())
    }

    /// Resolve a dotted key in `locale`, falling back to the home locale.
    pub fn text(&self, locale: &str, key: &str) -> Result<&str, DepsError> {
        self.localization
            .text(locale, key)
            .or_else(|| self.localization.text(self.home_locale.as_str(), key))
            .ok_or_else(|| DepsError::MissingText {
                locale: LocaleCode::new(locale),
                key: key.to_string(),
            })
    }

    /// Resolve a dotted key in [`current_locale`](Self::current_locale).
    pub fn current_text(&self, key: &str) -> Result<&str, DepsError> {
        let locale = self.current_locale();
        self.text(locale.as_str(), key)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("connected", &self.is_connected())
            .field("localization", &self.localization)
            .field("utilities", &self.utilities)
            .field("derived", &self.derived)
            .field("home_locale", &self.home_locale)
            .finish()
    }
}
