//! Request/response correlation over an asynchronous outbound queue.
//!
//! Every call allocates a one-shot response slot and pushes
//! `(request, slot)` onto a queue shared by all callers.  The transport
//! drains that queue through [`OutboundQueue`], sends each request, and
//! fills the slot when the matching response arrives.  How it matches
//! responses to slots (MTProto `msg_id`, a sequence counter, …) is its own
//! business; the gateway only guarantees that each slot is written at most
//! once and read by exactly one caller.

use std::sync::Arc;

use prism_tl_types::{Object, RemoteCall, Request, Variant};
use tokio::sync::{mpsc, oneshot};
use tracing::Instrument;

use crate::config::GatewayConfig;
use crate::dispatch::Decoder;
use crate::errors::{InvocationError, RpcError};

// ─── Response slot ────────────────────────────────────────────────────────────

/// The write half of a call's single-use response slot.
#[derive(Debug)]
pub struct ResponseSlot {
    tx: oneshot::Sender<Object>,
}

impl ResponseSlot {
    /// Deliver the response.  Returns `false` if the caller has gone away
    /// (timed out or dropped its future); the object is discarded.
    pub fn fill(self, response: Object) -> bool {
        self.tx.send(response).is_ok()
    }

    /// `true` once the caller has stopped waiting.
    pub fn is_abandoned(&self) -> bool {
        self.tx.is_closed()
    }
}

/// One queued call: the request to send and the slot to answer into.
#[derive(Debug)]
pub struct PendingCall {
    pub request: Request,
    pub slot:    ResponseSlot,
}

impl PendingCall {
    /// Shorthand for `self.slot.fill(response)`.
    pub fn respond(self, response: Object) -> bool {
        self.slot.fill(response)
    }
}

// ─── OutboundQueue ────────────────────────────────────────────────────────────

/// The transport's end of the outbound queue.
///
/// Dropping it makes every subsequent call fail with
/// [`InvocationError::Dropped`].
pub struct OutboundQueue {
    rx: mpsc::UnboundedReceiver<PendingCall>,
}

impl OutboundQueue {
    /// Wait for the next queued call.  `None` once every [`Gateway`] clone
    /// has been dropped and the queue is drained.
    pub async fn next(&mut self) -> Option<PendingCall> {
        self.rx.recv().await
    }

    /// Take a queued call without waiting.
    pub fn try_next(&mut self) -> Option<PendingCall> {
        self.rx.try_recv().ok()
    }
}

// ─── Gateway ──────────────────────────────────────────────────────────────────

struct GatewayInner {
    queue:   mpsc::UnboundedSender<PendingCall>,
    decoder: Decoder,
    config:  GatewayConfig,
}

/// Call-site facade over the outbound queue.
///
/// Cheap to clone; all clones share one queue.
#[derive(Clone)]
pub struct Gateway {
    inner: Arc<GatewayInner>,
}

impl Gateway {
    /// Create a gateway that logs unsupported variants.
    pub fn new(config: GatewayConfig) -> (Self, OutboundQueue) {
        Self::with_decoder(config, Decoder::default())
    }

    /// Create a gateway whose operations decode through `decoder`.
    pub fn with_decoder(config: GatewayConfig, decoder: Decoder) -> (Self, OutboundQueue) {
        let (tx, rx) = mpsc::unbounded_channel();
        let inner = GatewayInner { queue: tx, decoder, config };
        (Self { inner: Arc::new(inner) }, OutboundQueue { rx })
    }

    pub fn decoder(&self) -> &Decoder {
        &self.inner.decoder
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.inner.config
    }

    /// Send `req` and wait for its response.
    ///
    /// An `rpc_error` in the slot becomes [`InvocationError::Rpc`]; any other
    /// object that is not `R::Return` becomes [`InvocationError::Unexpected`].
    pub async fn invoke<R: RemoteCall>(&self, req: R) -> Result<R::Return, InvocationError> {
        let request: Request = req.into();
        let method = request.variant_name();
        let span = tracing::debug_span!("rpc", method);

        async move {
            let response = self.round_trip(request).await?;
            match response {
                Object::RpcError(e) => {
                    let err = RpcError::from(e);
                    log::debug!("[gateway] {method} → {err}");
                    Err(err.into())
                }
                other => R::Return::try_from(other).map_err(|o| {
                    log::debug!("[gateway] {method} → unexpected {}", o.variant_name());
                    InvocationError::Unexpected(o.variant_name())
                }),
            }
        }
        .instrument(span)
        .await
    }

    async fn round_trip(&self, request: Request) -> Result<Object, InvocationError> {
        let (tx, rx) = oneshot::channel();
        let call = PendingCall { request, slot: ResponseSlot { tx } };
        self.inner.queue.send(call).map_err(|_| InvocationError::Dropped)?;

        let received = match self.inner.config.call_timeout {
            Some(limit) => tokio::time::timeout(limit, rx)
                .await
                .map_err(|_| InvocationError::Timeout(limit))?,
            None => rx.await,
        };
        received.map_err(|_| InvocationError::Dropped)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use prism_tl_types::{enums, functions, types};

    fn full_chat_req() -> functions::messages::GetFullChat {
        functions::messages::GetFullChat { chat_id: 1 }
    }

    #[tokio::test]
    async fn rpc_error_is_typed() {
        let (gw, mut queue) = Gateway::new(GatewayConfig::default());
        tokio::spawn(async move {
            let call = queue.next().await.unwrap();
            call.respond(Object::RpcError(types::RpcError {
                error_code: 420, error_message: "FLOOD_WAIT_5".into(),
            }));
        });
        let err = gw.invoke(full_chat_req()).await.unwrap_err();
        assert_eq!(err.flood_wait_seconds(), Some(5));
    }

    #[tokio::test]
    async fn wrong_return_type_is_unexpected() {
        let (gw, mut queue) = Gateway::new(GatewayConfig::default());
        tokio::spawn(async move {
            let call = queue.next().await.unwrap();
            call.respond(Object::Updates(enums::Updates::TooLong));
        });
        let err = gw.invoke(full_chat_req()).await.unwrap_err();
        assert!(matches!(err, InvocationError::Unexpected("updatesTooLong")));
    }

    #[tokio::test]
    async fn closed_queue_drops_call() {
        let (gw, queue) = Gateway::new(GatewayConfig::default());
        drop(queue);
        assert!(matches!(gw.invoke(full_chat_req()).await, Err(InvocationError::Dropped)));
    }

    #[tokio::test]
    async fn discarded_slot_drops_call() {
        let (gw, mut queue) = Gateway::new(GatewayConfig::default());
        tokio::spawn(async move {
            drop(queue.next().await);
        });
        assert!(matches!(gw.invoke(full_chat_req()).await, Err(InvocationError::Dropped)));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_abandons_slot() {
        let limit = Duration::from_secs(5);
        let (gw, mut queue) = Gateway::new(GatewayConfig::default().call_timeout(Some(limit)));

        let err = gw.invoke(full_chat_req()).await.unwrap_err();
        assert!(matches!(err, InvocationError::Timeout(d) if d == limit));

        let late = queue.try_next().unwrap();
        assert!(late.slot.is_abandoned());
        assert!(!late.respond(Object::Updates(enums::Updates::TooLong)));
    }
}
