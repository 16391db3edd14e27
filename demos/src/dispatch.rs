use std::time::Duration;

use invocation::InvocationOptions;
use thiserror::Error;
use tokio::{sync::oneshot, time::timeout};
use tracing::{debug, warn};

use crate::{MemoryPeer, Request};

/// Errors that can be returned by [`invoke`]
#[derive(Debug, Error)]
pub enum InvokeError {
    /// The remote peer did not acknowledge the request in time
    #[error("no acknowledgment received after {0:?}")]
    AckTimeout(Duration),

    /// The remote execution did not complete in time
    #[error("no result received after {0:?}")]
    ResultTimeout(Duration),

    /// The remote peer went away
    #[error("remote peer is unreachable")]
    Unreachable,

    /// The remote execution completed with an error
    #[error("remote execution failed: {0}")]
    Remote(String),
}

/// Successful outcome of an [`invoke`] call
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    /// The request has been handed to the peer, nothing was waited for
    Dispatched,

    /// The peer acknowledged the request, its result was not waited for
    Acknowledged,

    /// The remote execution completed with the given value
    Completed(String),
}

/// Invoke `peer` with `payload`, waiting for what `options` asks for
///
/// The acknowledgment and result channels are only created when expected, a peer is never asked
/// to reply to a caller that will not listen
pub async fn invoke(
    peer: &MemoryPeer,
    payload: impl Into<String>,
    options: InvocationOptions,
) -> Result<Outcome, InvokeError> {
    let (ack_tx, ack_rx) = channel_if(options.is_ack_expected());
    let (result_tx, result_rx) = channel_if(options.is_result_expected());

    let request = Request {
        payload: payload.into(),
        ack: ack_tx,
        result: result_tx,
    };

    debug!(%options, "invoking remote peer");
    if !peer.send(request).await {
        return Err(InvokeError::Unreachable);
    }

    let mut outcome = Outcome::Dispatched;

    if let (Some(ack_timeout), Some(ack_rx)) = (options.ack_timeout(), ack_rx) {
        match timeout(ack_timeout, ack_rx).await {
            Ok(Ok(())) => outcome = Outcome::Acknowledged,
            Ok(Err(_)) => return Err(InvokeError::Unreachable),
            Err(_) => {
                warn!("request was not acknowledged after {ack_timeout:?}");
                return Err(InvokeError::AckTimeout(ack_timeout));
            }
        }
    }

    if let (Some(result_timeout), Some(result_rx)) = (options.result_timeout(), result_rx) {
        outcome = match timeout(result_timeout, result_rx).await {
            Ok(Ok(Ok(value))) => Outcome::Completed(value),
            Ok(Ok(Err(e))) => return Err(InvokeError::Remote(e)),
            Ok(Err(_)) => return Err(InvokeError::Unreachable),
            Err(_) => {
                warn!("no result received after {result_timeout:?}");
                return Err(InvokeError::ResultTimeout(result_timeout));
            }
        };
    }

    Ok(outcome)
}

fn channel_if<T>(expected: bool) -> (Option<oneshot::Sender<T>>, Option<oneshot::Receiver<T>>) {
    if expected {
        let (tx, rx) = oneshot::channel();
        (Some(tx), Some(rx))
    } else {
        (None, None)
    }
}
