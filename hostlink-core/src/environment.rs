//! The Environment capability — what the host lets the widget call.
//!
//! The host decides which capabilities it offers. Every accessor on
//! [`Environment`] defaults to `None`, so an environment that offers
//! nothing is a unit struct with an empty impl block. Whether a missing
//! capability matters is decided by whichever component asks for it.

use crate::error::WireError;
use crate::locale::LocaleCode;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Host capabilities exposed to the widget.
///
/// Implementations:
/// - `LocalEnvironment` (hostlink-env-local): in-process loopback wire and a fixed locale
/// - `NullEnvironment` (test-utils): offers nothing
///
/// The connector never calls anything beyond these accessors, and calls
/// them once per `connect`.
pub trait Environment: Send + Sync {
    /// The communication channel to the host, if there is one.
    fn wire(&self) -> Option<Arc<dyn Wire>> {
        None
    }

    /// A resolver for the user's current locale, if the host tracks one.
    fn locale_resolver(&self) -> Option<Arc<dyn LocaleResolver>> {
        None
    }
}

/// A message the widget sends to its host.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    /// What the message is about, e.g. `"form.submit"`.
    pub topic: String,
    /// Arbitrary payload.
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl WireMessage {
    /// Create a new message.
    pub fn new(topic: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            topic: topic.into(),
            payload,
        }
    }
}

/// Transport from the widget to the host.
#[async_trait]
pub trait Wire: Send + Sync {
    /// Deliver a message and wait for the host's reply.
    async fn send(&self, message: WireMessage) -> Result<serde_json::Value, WireError>;
}

/// Resolves the locale the widget should render in right now.
pub trait LocaleResolver: Send + Sync {
    /// The current locale, or `None` to let the widget use its home locale.
    fn current_locale(&self) -> Option<LocaleCode>;
}

impl<F> LocaleResolver for F
where
    F: Fn() -> Option<LocaleCode> + Send + Sync,
{
    fn current_locale(&self) -> Option<LocaleCode> {
        self()
    }
}
