//! Remote operations: one gateway call plus the matching builder each.
//!
//! Error surfacing is deliberately uneven.  [`Gateway::send_message`] and
//! [`Gateway::get_chats`] return `Result`s; the other operations have no
//! error channel, so failures there are logged and turned into the
//! operation's empty result.

use prism_tl_types::{Variant, enums, functions::messages as f};

use crate::errors::InvocationError;
use crate::gateway::Gateway;
use crate::message::Message;
use crate::refs::Chat;

impl Gateway {
    /// Send a plain-text message.
    ///
    /// The server's acknowledgement is returned as-is (`updateShortSentMessage`
    /// for most peers, a full `updates` container otherwise).
    pub async fn send_message(
        &self,
        text:     &str,
        peer:     enums::InputPeer,
        reply_to: Option<i32>,
    ) -> Result<enums::Updates, InvocationError> {
        let req = f::SendMessage {
            no_webpage:      false,
            silent:          false,
            background:      false,
            clear_draft:     false,
            peer,
            reply_to_msg_id: reply_to,
            message:         text.to_owned(),
            random_id:       rand::random(),
            entities:        None,
        };
        self.invoke(req).await
    }

    /// Join a chat through an invite-link hash.
    ///
    /// Returns the first chat the server reports back, or `None` on any
    /// failure.
    pub async fn import_chat_invite(&self, hash: &str) -> Option<Chat> {
        let req = f::ImportChatInvite { hash: hash.to_owned() };
        match self.invoke(req).await {
            Ok(updates) => {
                let first = updates.chats().first().cloned();
                if first.is_none() {
                    let err = InvocationError::Unexpected(updates.variant_name());
                    self.swallow("messages.importChatInvite", &err);
                }
                first.and_then(|c| self.decoder().chat(c))
            }
            Err(e) => {
                self.swallow("messages.importChatInvite", &e);
                None
            }
        }
    }

    /// Fetch a page of history between `min_id` and `max_id`.
    ///
    /// The second element is the container's total count when it reports
    /// one, otherwise the number of messages decoded.  Empty and unsupported
    /// entries are dropped from the page.
    pub async fn get_history(
        &self,
        peer:   enums::InputPeer,
        limit:  i32,
        min_id: i32,
        max_id: i32,
    ) -> (Vec<Message>, i32) {
        let req = f::GetHistory {
            peer,
            offset_id:   0,
            offset_date: 0,
            add_offset:  0,
            limit,
            max_id,
            min_id,
        };

        use enums::messages::Messages as M;
        match self.invoke(req).await {
            Ok(M::Messages(m)) => {
                let messages = self.decoder().messages(m.messages);
                let count = messages.len() as i32;
                (messages, count)
            }
            Ok(M::Slice(m))           => (self.decoder().messages(m.messages), m.count),
            Ok(M::ChannelMessages(m)) => (self.decoder().messages(m.messages), m.count),
            Ok(M::NotModified(m))     => (Vec::new(), m.count),
            Ok(M::Raw(_)) => {
                self.swallow("messages.getHistory", &InvocationError::Unexpected("raw"));
                (Vec::new(), 0)
            }
            Err(e) => {
                self.swallow("messages.getHistory", &e);
                (Vec::new(), 0)
            }
        }
    }

    /// Fetch basic info for the given chat IDs.
    pub async fn get_chats(&self, ids: &[i32]) -> Result<Vec<Chat>, InvocationError> {
        let req = f::GetChats { id: ids.to_vec() };

        use enums::messages::Chats as C;
        let chats = match self.invoke(req).await {
            Ok(C::Chats(c)) => c.chats,
            Ok(C::Slice(c)) => c.chats,
            Ok(C::Raw(_))   => {
                log::warn!("[prism] messages.getChats: don't know how to handle raw response");
                return Err(InvocationError::Unexpected("raw"));
            }
            Err(e) => {
                log::warn!("[prism] messages.getChats failed: {e}");
                return Err(e);
            }
        };
        Ok(chats.into_iter().filter_map(|c| self.decoder().chat(c)).collect())
    }

    /// Fetch full info for a basic group.
    ///
    /// Any failure yields `Chat::default()`.
    pub async fn get_full_chat(&self, chat_id: i32) -> Chat {
        match self.invoke(f::GetFullChat { chat_id }).await {
            Ok(full) => self.decoder().chat_full(full),
            Err(e) => {
                self.swallow("messages.getFullChat", &e);
                Chat::default()
            }
        }
    }

    fn swallow(&self, method: &str, err: &InvocationError) {
        if self.config().log_unexpected {
            log::warn!("[prism] {method} failed: {err}");
        } else {
            log::debug!("[prism] {method} failed: {err}");
        }
    }
}
