//! Error types raised at the point of use.
//!
//! Connecting never fails. These errors surface later, when a widget
//! component reaches for something the host did not supply.

use crate::locale::LocaleCode;
use thiserror::Error;

/// Errors from reading the injected dependencies.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DepsError {
    /// A reader ran before any bundle was connected.
    #[error("dependencies not connected")]
    NotConnected,

    /// The host supplied no utility under this name.
    #[error("utility not found: {0}")]
    MissingUtility(String),

    /// The environment does not expose the requested capability.
    #[error("capability not available: {0}")]
    MissingCapability(String),

    /// No string at this key, neither in the requested locale nor the home locale.
    #[error("text not found: {locale}/{key}")]
    MissingText {
        /// The locale that was searched first.
        locale: LocaleCode,
        /// The dotted key that was looked up.
        key: String,
    },

    /// Connector configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),

    /// A localization file could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A wire call failed.
    #[error("wire error: {0}")]
    Wire(#[from] WireError),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from the host's communication channel.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum WireError {
    /// The host received the message but could not handle it.
    #[error("send failed: {0}")]
    SendFailed(String),

    /// The host side of the channel has gone away.
    #[error("wire closed")]
    Closed,

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
