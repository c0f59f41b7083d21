#![deny(missing_docs)]
//! Stateless element helpers for widget components.
//!
//! Everything here works through the [`Element`] trait, so the helpers run
//! against a browser binding, a virtual DOM, or the in-memory
//! [`MemoryElement`] alike. None of it touches the dependency registry.

mod class;
mod element;
mod form;

pub use class::{add_class, has_class, remove_class};
pub use element::{Element, MemoryElement};
pub use form::unique_input_types;
