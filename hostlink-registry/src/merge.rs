//! Namespace-level merging of default and host translations.

use crate::defaults::DefaultBundle;
use hostlink_core::{LocaleCode, LocaleTree, Localization};

/// Overlay `overrides` on `defaults`, one level deep.
///
/// Every namespace present in `overrides` replaces the default namespace
/// of the same name entirely, nested keys included. Namespaces only in
/// `defaults` are kept as they are. Nothing below the namespace level is
/// merged.
pub fn merge_namespaces(defaults: &LocaleTree, overrides: LocaleTree) -> LocaleTree {
    let mut merged = defaults.clone();
    for (namespace, value) in overrides {
        merged.insert(namespace, value);
    }
    merged
}

/// Build the registry's localization from the host's translations.
///
/// The `home` locale gets `defaults` with the host's home-locale
/// namespaces overlaid (or the plain defaults if the host has no entry for
/// it). Every other host locale is taken verbatim.
pub fn resolve_localization(
    defaults: &DefaultBundle,
    home: &LocaleCode,
    mut host: Localization,
) -> Localization {
    let overrides = host.remove(home.as_str()).unwrap_or_default();
    let merged = merge_namespaces(defaults.tree(), overrides);
    host.insert(home.clone(), merged);
    host
}
