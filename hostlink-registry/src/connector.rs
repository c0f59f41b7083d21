use crate::config::ConnectorConfig;
use crate::defaults::DefaultBundle;
use crate::derived::DerivedFields;
use crate::merge::resolve_localization;
use crate::registry::Registry;
use hostlink_core::{Bundle, LocaleCode};

/// Fills a [`Registry`] from a host [`Bundle`].
///
/// Holds the widget's default translations and the connector settings.
/// The defaults are only ever read, so every `connect` resolves the merge
/// from the same starting point and repeated calls never stack.
#[derive(Debug, Clone, Default)]
pub struct Connector {
    defaults: DefaultBundle,
    config: ConnectorConfig,
}

impl Connector {
    /// Create a connector with explicit defaults and settings.
    pub fn new(defaults: DefaultBundle, config: ConnectorConfig) -> Self {
        Self { defaults, config }
    }

    /// Replace the default translations.
    pub fn with_defaults(mut self, defaults: DefaultBundle) -> Self {
        self.defaults = defaults;
        self
    }

    /// Replace the settings.
    pub fn with_config(mut self, config: ConnectorConfig) -> Self {
        self.config = config;
        self
    }

    /// The default translations.
    pub fn defaults(&self) -> &DefaultBundle {
        &self.defaults
    }

    /// The settings.
    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// The locale the defaults are merged into.
    pub fn home_locale(&self) -> LocaleCode {
        self.config
            .home_locale
            .clone()
            .unwrap_or_else(|| self.defaults.locale().clone())
    }

    /// Populate `registry` from `bundle`.
    ///
    /// In order:
    /// 1. the environment is replaced wholesale
    /// 2. derived fields are re-extracted from it (or cleared, for the basic revision)
    /// 3. utilities are replaced wholesale if the bundle carries any
    /// 4. localization is rebuilt: defaults overlaid with the host's
    ///    home-locale namespaces, other host locales verbatim
    ///
    /// Never fails. Missing capabilities leave derived fields `None`.
    pub fn connect(&self, registry: &mut Registry, bundle: Bundle) {
        let Bundle {
            environment,
            localization,
            utilities,
        } = bundle;
        let home = self.home_locale();

        tracing::debug!(
            revision = ?self.config.revision,
            home = %home,
            host_locales = localization.len(),
            "connecting host bundle"
        );

        let derived = DerivedFields::extract(&*environment, self.config.revision);
        registry.environment = Some(environment);
        registry.derived = derived;

        if let Some(utilities) = utilities {
            registry.utilities = Some(utilities);
        }

        registry.localization = resolve_localization(&self.defaults, &home, localization);
        registry.home_locale = home;

        tracing::debug!(
            locales = registry.localization.len(),
            utilities = registry.utilities.is_some(),
            wire = registry.derived.wire.is_some(),
            "host bundle connected"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectorRevision;
    use hostlink_core::test_utils::{NullEnvironment, RecordingWire, StubEnvironment};
    use hostlink_core::{LocaleTree, Localization, Utilities};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn tree(value: Value) -> LocaleTree {
        LocaleTree::from_value(value).unwrap()
    }

    fn bundle(localization: Localization) -> Bundle {
        Bundle::new(Arc::new(NullEnvironment), localization)
    }

    #[test]
    fn first_connect_populates_registry() {
        let mut registry = Registry::new();
        Connector::default().connect(&mut registry, bundle(Localization::new()));

        assert!(registry.is_connected());
        assert_eq!(
            registry.localization.get("en"),
            Some(DefaultBundle::builtin().tree())
        );
        assert!(registry.utilities.is_none());
    }

    #[test]
    fn environment_is_replaced_wholesale() {
        let mut registry = Registry::new();
        let connector = Connector::default();
        let wired = StubEnvironment::new().with_wire(Arc::new(RecordingWire::default()));

        connector.connect(&mut registry, Bundle::new(Arc::new(wired), Localization::new()));
        assert!(registry.wire().is_ok());

        connector.connect(&mut registry, bundle(Localization::new()));
        assert!(registry.wire().is_err());
    }

    #[test]
    fn basic_revision_clears_derived_fields() {
        let mut registry = Registry::new();
        let env = StubEnvironment::new().with_locale("pl");

        Connector::default().connect(
            &mut registry,
            Bundle::new(Arc::new(env.clone()), Localization::new()),
        );
        assert_eq!(registry.current_locale().as_str(), "pl");

        Connector::default()
            .with_config(ConnectorConfig::new(ConnectorRevision::Basic))
            .connect(&mut registry, Bundle::new(Arc::new(env), Localization::new()));
        assert!(registry.derived.is_empty());
        assert_eq!(registry.current_locale().as_str(), "en");
    }

    #[test]
    fn utilities_kept_when_bundle_has_none() {
        let mut registry = Registry::new();
        let connector = Connector::default();

        connector.connect(
            &mut registry,
            bundle(Localization::new()).with_utilities(Utilities::new().with("a", |_| json!(1))),
        );
        connector.connect(&mut registry, bundle(Localization::new()));
        assert!(registry.utility("a").is_ok());

        connector.connect(
            &mut registry,
            bundle(Localization::new()).with_utilities(Utilities::new().with("b", |_| json!(2))),
        );
        assert!(registry.utility("a").is_err());
        assert!(registry.utility("b").is_ok());
    }

    #[test]
    fn home_locale_override_moves_the_merge() {
        let mut registry = Registry::new();
        let connector = Connector::default()
            .with_config(ConnectorConfig::default().with_home_locale("en-GB"));
        let host = Localization::new()
            .with_locale("en-GB", tree(json!({ "ui": { "form": { "sending": "Posting" } } })));

        connector.connect(&mut registry, bundle(host));

        assert_eq!(registry.home_locale.as_str(), "en-GB");
        assert_eq!(registry.text("en-GB", "ui.form.sending").unwrap(), "Posting");
        assert_eq!(
            registry.text("en-GB", "validation.required").unwrap(),
            "This field is required"
        );
        assert!(!registry.localization.contains("en"));
    }

    #[test]
    fn reconnect_drops_locales_from_earlier_bundles() {
        let mut registry = Registry::new();
        let connector = Connector::default();

        connector.connect(
            &mut registry,
            bundle(Localization::new().with_locale("pl", tree(json!({ "ui": {} })))),
        );
        assert!(registry.localization.contains("pl"));

        connector.connect(
            &mut registry,
            bundle(Localization::new().with_locale("de", tree(json!({ "ui": {} })))),
        );
        assert!(!registry.localization.contains("pl"));
        assert!(registry.localization.contains("de"));
        assert!(registry.localization.contains("en"));
    }
}
