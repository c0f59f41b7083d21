#![deny(missing_docs)]
//! The dependency registry and the connector that fills it.
//!
//! A host calls [`connect`] (or [`Connector::connect`] against its own
//! [`Registry`]) with a [`Bundle`](hostlink_core::Bundle). The connector
//! replaces the environment and utilities wholesale and merges the
//! widget's [`DefaultBundle`] into the host's home-locale translations,
//! one namespace deep. Widget components then read the registry.
//!
//! ## Merge depth
//!
//! Only top-level namespaces are merged. A host that overrides `ui`
//! replaces the whole `ui` subtree, including keys it did not mention.
//! See [`merge_namespaces`].

mod config;
mod connector;
mod defaults;
mod derived;
pub mod global;
mod merge;
mod registry;

pub use config::{ConnectorConfig, ConnectorRevision};
pub use connector::Connector;
pub use defaults::{DefaultBundle, HOME_LOCALE};
pub use derived::DerivedFields;
pub use global::connect;
pub use merge::{merge_namespaces, resolve_localization};
pub use registry::Registry;
