//! Loopback wire over a tokio channel.

use async_trait::async_trait;
use hostlink_core::{Wire, WireError, WireMessage};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};

/// Create a connected wire/receiver pair with room for `buffer` pending requests.
pub fn loopback(buffer: usize) -> (LoopbackWire, WireReceiver) {
    let (tx, rx) = mpsc::channel(buffer.max(1));
    (LoopbackWire { tx }, WireReceiver { rx })
}

/// The widget's end of the loopback channel.
#[derive(Clone)]
pub struct LoopbackWire {
    tx: mpsc::Sender<WireRequest>,
}

/// A message waiting for the host's answer.
pub struct WireRequest {
    /// The message the widget sent.
    pub message: WireMessage,
    reply: oneshot::Sender<Result<Value, WireError>>,
}

impl WireRequest {
    /// Answer the request. Ignored if the widget stopped waiting.
    pub fn respond(self, result: Result<Value, WireError>) {
        let _ = self.reply.send(result);
    }
}

/// The host's end of the loopback channel.
pub struct WireReceiver {
    rx: mpsc::Receiver<WireRequest>,
}

impl WireReceiver {
    /// Wait for the next request. `None` once every wire has been dropped.
    pub async fn next(&mut self) -> Option<WireRequest> {
        self.rx.recv().await
    }

    /// Answer every request with `handler` until every wire has been dropped.
    pub async fn serve<F>(mut self, mut handler: F)
    where
        F: FnMut(&WireMessage) -> Result<Value, WireError>,
    {
        while let Some(request) = self.next().await {
            let result = handler(&request.message);
            request.respond(result);
        }
    }
}

#[async_trait]
impl Wire for LoopbackWire {
    async fn send(&self, message: WireMessage) -> Result<Value, WireError> {
        tracing::debug!(topic = %message.topic, "sending wire message");
        let (reply, answer) = oneshot::channel();
        self.tx
            .send(WireRequest { message, reply })
            .await
            .map_err(|_| WireError::Closed)?;
        answer.await.map_err(|_| WireError::Closed)?
    }
}
