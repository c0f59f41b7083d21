#![deny(missing_docs)]
//! # hostlink — umbrella crate
//!
//! Provides a single import surface for hostlink. Re-exports the protocol
//! types and implementations behind feature flags, plus a `prelude` for
//! the happy path.

#[cfg(feature = "core")]
pub use hostlink_core;
#[cfg(feature = "dom")]
pub use hostlink_dom;
#[cfg(feature = "env-local")]
pub use hostlink_env_local;
#[cfg(feature = "registry")]
pub use hostlink_registry;

#[cfg(feature = "registry")]
pub use hostlink_registry::{connect, global};

/// Happy-path imports for connecting a widget to its host.
pub mod prelude {
    #[cfg(feature = "core")]
    pub use hostlink_core::{
        Bundle, DepsError, Environment, LocaleCode, LocaleResolver, LocaleTree, Localization,
        Utilities, Wire, WireError, WireMessage,
    };

    #[cfg(feature = "registry")]
    pub use hostlink_registry::{
        Connector, ConnectorConfig, ConnectorRevision, DefaultBundle, Registry,
    };

    #[cfg(feature = "dom")]
    pub use hostlink_dom::{
        Element, MemoryElement, add_class, has_class, remove_class, unique_input_types,
    };

    #[cfg(feature = "env-local")]
    pub use hostlink_env_local::LocalEnv;
}
