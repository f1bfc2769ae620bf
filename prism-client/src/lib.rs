//! # prism-client
//!
//! Turns Telegram TL wire objects into a plain domain model, and lets call
//! sites await remote calls over a transport that answers asynchronously.
//!
//! ## Pieces
//! - [`flags`]: table-driven decoding of `flags:#` words
//! - [`Decoder`]: one builder per entity family (messages, actions, entities,
//!   forward headers, media, users, statuses, profile photos, chats); every
//!   builder is total and reports unknown variants to a [`DecodeObserver`]
//! - [`Gateway`]: per-call one-shot response slots over a shared outbound
//!   queue, plus the remote operations built on it
//!
//! ```rust,no_run
//! use prism_client::{Gateway, GatewayConfig};
//! use prism_tl_types::enums::InputPeer;
//!
//! # async fn f() {
//! let (gateway, mut outbound) = Gateway::new(GatewayConfig::default());
//!
//! // The transport drains `outbound`, sends each request and fills its slot.
//! tokio::spawn(async move {
//!     while let Some(call) = outbound.next().await {
//!         # let _ = call;
//!         // transport.send(call.request, call.slot) …
//!     }
//! });
//!
//! let (messages, total) = gateway.get_history(InputPeer::PeerSelf, 20, 0, 0).await;
//! # }
//! ```

#![deny(unsafe_code)]

mod config;
mod errors;
mod operations;
pub mod dispatch;
pub mod flags;
pub mod gateway;
pub mod message;
pub mod refs;
pub mod user;

pub use config::GatewayConfig;
pub use dispatch::{DecodeObserver, Decoder, Family, LogObserver, NullObserver, RecordingObserver, Unsupported};
pub use errors::{InvocationError, RpcError};
pub use flags::FlagSet;
pub use gateway::{Gateway, OutboundQueue, PendingCall, ResponseSlot};
pub use message::{
    ActionType, EntityType, Message, MessageAction, MessageEntity, MessageFlags,
    MessageForwardHeader, MessageMedia, MessageType,
};
pub use refs::{Chat, ChatKind, Document, FileLocation, Peer, Photo};
pub use user::{StatusKind, User, UserFlags, UserProfilePhoto, UserStatus};
