//! # hostlink-core — Protocol types for host-injected widget dependencies
//!
//! This crate defines the shapes a host application hands to an embeddable
//! widget, and the capability traits the widget calls back through.
//!
//! ## The Pieces
//!
//! | Piece | Types | What it does |
//! |-------|-------|-------------|
//! | Locales | [`LocaleCode`], [`LocaleTree`], [`Localization`] | Translated UI text, per locale and namespace |
//! | Environment | [`Environment`], [`Wire`], [`LocaleResolver`] | Host capabilities the widget may invoke |
//! | Utilities | [`Utilities`], [`UtilityFn`] | Named helper functions supplied by the host |
//! | Bundle | [`Bundle`] | Everything a host passes to `connect` |
//!
//! ## Design Principle
//!
//! The widget never inspects the host's concrete types. The environment is
//! a narrow capability trait whose accessors default to `None`, so a host
//! only implements what it actually offers. Missing pieces surface as
//! [`DepsError`] at the point of use, never at connection time.
//!
//! ## Dependency Notes
//!
//! Translation payloads are `serde_json::Value`. Namespaces may nest
//! arbitrarily and the widget never validates their shape, so a typed
//! schema would buy nothing.

#![deny(missing_docs)]

pub mod bundle;
pub mod environment;
pub mod error;
pub mod locale;
pub mod utilities;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use bundle::Bundle;
pub use environment::{Environment, LocaleResolver, Wire, WireMessage};
pub use error::{DepsError, WireError};
pub use locale::{LocaleCode, LocaleTree, Localization};
pub use utilities::{Utilities, UtilityFn};
