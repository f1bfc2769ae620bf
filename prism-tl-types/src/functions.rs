//! RPC functions.
//!
//! Each function is a plain struct; [`Request`] is the closed set the outbound
//! queue carries so the transport can serialize whichever one it is handed.

use crate::{RemoteCall, Variant, enums};

pub mod messages {
    use crate::enums;

    /// [`messages.sendMessage`](https://core.telegram.org/method/messages.sendMessage)
    ///
    /// ```tl
    /// messages.sendMessage#fa88427a flags:# no_webpage:flags.1?true silent:flags.5?true
    ///     background:flags.6?true clear_draft:flags.7?true peer:InputPeer
    ///     reply_to_msg_id:flags.0?int message:string random_id:long
    ///     reply_markup:flags.2?ReplyMarkup entities:flags.3?Vector<MessageEntity> = Updates
    /// ```
    #[derive(Clone, Debug, PartialEq)]
    pub struct SendMessage {
        pub no_webpage:      bool,
        pub silent:          bool,
        pub background:      bool,
        pub clear_draft:     bool,
        pub peer:            enums::InputPeer,
        pub reply_to_msg_id: Option<i32>,
        pub message:         String,
        pub random_id:       i64,
        pub entities:        Option<Vec<enums::MessageEntity>>,
    }

    /// [`messages.importChatInvite`](https://core.telegram.org/method/messages.importChatInvite)
    #[derive(Clone, Debug, PartialEq)]
    pub struct ImportChatInvite {
        pub hash: String,
    }

    /// [`messages.getHistory`](https://core.telegram.org/method/messages.getHistory)
    #[derive(Clone, Debug, PartialEq)]
    pub struct GetHistory {
        pub peer:        enums::InputPeer,
        pub offset_id:   i32,
        pub offset_date: i32,
        pub add_offset:  i32,
        pub limit:       i32,
        pub max_id:      i32,
        pub min_id:      i32,
    }

    /// [`messages.getChats`](https://core.telegram.org/method/messages.getChats)
    #[derive(Clone, Debug, PartialEq)]
    pub struct GetChats {
        pub id: Vec<i32>,
    }

    /// [`messages.getFullChat`](https://core.telegram.org/method/messages.getFullChat)
    #[derive(Clone, Debug, PartialEq)]
    pub struct GetFullChat {
        pub chat_id: i32,
    }
}

// ─── Request ──────────────────────────────────────────────────────────────────

/// Any function the outbound queue can carry.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    SendMessage(messages::SendMessage),
    ImportChatInvite(messages::ImportChatInvite),
    GetHistory(messages::GetHistory),
    GetChats(messages::GetChats),
    GetFullChat(messages::GetFullChat),
}

impl Variant for Request {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::SendMessage(_)      => "messages.sendMessage",
            Self::ImportChatInvite(_) => "messages.importChatInvite",
            Self::GetHistory(_)       => "messages.getHistory",
            Self::GetChats(_)         => "messages.getChats",
            Self::GetFullChat(_)      => "messages.getFullChat",
        }
    }
}

macro_rules! remote_call {
    ($func:ident => $ret:ty) => {
        impl From<messages::$func> for Request {
            fn from(f: messages::$func) -> Self { Self::$func(f) }
        }

        impl RemoteCall for messages::$func {
            type Return = $ret;
        }
    };
}

remote_call!(SendMessage      => enums::Updates);
remote_call!(ImportChatInvite => enums::Updates);
remote_call!(GetHistory       => enums::messages::Messages);
remote_call!(GetChats         => enums::messages::Chats);
remote_call!(GetFullChat      => enums::messages::ChatFull);
