//! The process-wide registry.
//!
//! Hosts that prefer an explicit context can own a [`Registry`] and call
//! [`Connector::connect`] on it directly. This module keeps one shared
//! instance for hosts that want a single ambient registry instead.
//!
//! Lock poisoning is recovered by taking the inner value: a panicking
//! reader cannot leave the registry half-written, and `connect` always
//! rebuilds every field it touches.

use crate::connector::Connector;
use crate::registry::Registry;
use hostlink_core::Bundle;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();

fn cell() -> &'static RwLock<Registry> {
    REGISTRY.get_or_init(|| RwLock::new(Registry::new()))
}

/// Shared read access to the process-wide registry.
pub fn read() -> RwLockReadGuard<'static, Registry> {
    cell().read().unwrap_or_else(PoisonError::into_inner)
}

/// Exclusive write access to the process-wide registry.
pub fn write() -> RwLockWriteGuard<'static, Registry> {
    cell().write().unwrap_or_else(PoisonError::into_inner)
}

/// Run `f` against a snapshot of the process-wide registry.
///
/// The read lock is released before `f` runs, so `f` may itself call
/// [`connect`] or [`write`]. Changes made that way are not visible through
/// the snapshot.
pub fn with_registry<R>(f: impl FnOnce(&Registry) -> R) -> R {
    let snapshot = read().clone();
    f(&snapshot)
}

/// Connect a host bundle to the process-wide registry using the built-in defaults.
pub fn connect(bundle: Bundle) {
    connect_with(&Connector::default(), bundle);
}

/// Connect a host bundle to the process-wide registry using a custom connector.
pub fn connect_with(connector: &Connector, bundle: Bundle) {
    connector.connect(&mut write(), bundle);
}

/// Put the process-wide registry back in its unconnected state.
pub fn reset() {
    *write() = Registry::new();
}
