//! RecordingWire — records every message and replies with a canned value.

use crate::environment::{Wire, WireMessage};
use crate::error::WireError;
use async_trait::async_trait;
use std::sync::Mutex;

/// A wire that keeps every message it was asked to send.
/// Use `.sent()` to inspect what was recorded.
pub struct RecordingWire {
    reply: serde_json::Value,
    sent: Mutex<Vec<WireMessage>>,
}

impl RecordingWire {
    /// Create a wire that answers every message with `reply`.
    pub fn new(reply: serde_json::Value) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Return a snapshot of all recorded messages.
    pub fn sent(&self) -> Vec<WireMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingWire {
    fn default() -> Self {
        Self::new(serde_json::Value::Null)
    }
}

#[async_trait]
impl Wire for RecordingWire {
    async fn send(&self, message: WireMessage) -> Result<serde_json::Value, WireError> {
        self.sent.lock().unwrap().push(message);
        Ok(self.reply.clone())
    }
}
