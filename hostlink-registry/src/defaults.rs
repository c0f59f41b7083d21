//! The widget's built-in translations.

use hostlink_core::{LocaleCode, LocaleTree};
use serde_json::json;

/// The locale the built-in translations are written in.
pub const HOME_LOCALE: &str = "en";

/// An immutable default translation tree, filed under one locale.
///
/// Every namespace a widget component reads must be defined here. The
/// connector only falls back per namespace, never per key.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultBundle {
    locale: LocaleCode,
    tree: LocaleTree,
}

impl DefaultBundle {
    /// Create a default bundle for a locale.
    pub fn new(locale: impl Into<LocaleCode>, tree: LocaleTree) -> Self {
        Self {
            locale: locale.into(),
            tree,
        }
    }

    /// The translations shipped with the widget.
    pub fn builtin() -> Self {
        let mut tree = LocaleTree::new();
        tree.insert(
            "ui",
            json!({
                "form": {
                    "sending": "Sending",
                    "success": "Sent",
                    "error": "Failed"
                }
            }),
        );
        tree.insert(
            "validation",
            json!({
                "required": "This field is required",
                "email": "Enter a valid email address",
                "too_long": "This value is too long"
            }),
        );
        Self::new(HOME_LOCALE, tree)
    }

    /// The locale these defaults are written in.
    pub fn locale(&self) -> &LocaleCode {
        &self.locale
    }

    /// The default namespaces.
    pub fn tree(&self) -> &LocaleTree {
        &self.tree
    }
}

impl Default for DefaultBundle {
    fn default() -> Self {
        Self::builtin()
    }
}
