use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, trace};

/// A request sent to a [`MemoryPeer`]
///
/// The reply channels are only present when the caller asked for the corresponding exchange
pub struct Request {
    pub payload: String,
    pub(crate) ack: Option<oneshot::Sender<()>>,
    pub(crate) result: Option<oneshot::Sender<Result<String, String>>>,
}

impl Request {
    pub fn ack_requested(&self) -> bool {
        self.ack.is_some()
    }

    pub fn result_requested(&self) -> bool {
        self.result.is_some()
    }
}

/// Timing of a simulated remote peer
#[derive(Debug, Clone, Copy, Default)]
pub struct PeerBehavior {
    /// Time taken by the peer before acknowledging a request
    pub ack_delay: Duration,

    /// Time taken by the peer to execute a request once acknowledged
    pub execution_delay: Duration,
}

/// A remote peer living in a background task that echoes requests back in upper case
///
/// Executing a request with an empty payload fails
#[derive(Clone)]
pub struct MemoryPeer {
    pub(crate) tx: mpsc::Sender<Request>,
}

impl MemoryPeer {
    pub fn spawn(behavior: PeerBehavior) -> Self {
        let (tx, mut rx) = mpsc::channel::<Request>(128);

        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                tokio::spawn(execute(request, behavior));
            }
        });

        Self { tx }
    }

    pub(crate) async fn send(&self, request: Request) -> bool {
        self.tx.send(request).await.is_ok()
    }
}

async fn execute(request: Request, behavior: PeerBehavior) {
    let Request {
        payload,
        ack,
        result,
    } = request;

    trace!(%payload, "received request");

    if let Some(ack) = ack {
        tokio::time::sleep(behavior.ack_delay).await;
        let _ = ack.send(());
        debug!(%payload, "acknowledged request");
    }

    tokio::time::sleep(behavior.execution_delay).await;
    let outcome = if payload.is_empty() {
        Err("empty payload".to_string())
    } else {
        Ok(payload.to_uppercase())
    };

    match result {
        Some(result) => {
            let _ = result.send(outcome);
        }
        None => debug!(%payload, "executed request, nobody is waiting for the result"),
    }
}
