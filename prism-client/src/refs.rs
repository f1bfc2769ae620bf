//! Entities that messages and users point at: peers, files, photos,
//! documents and chats.
//!
//! Only the identifying fields are kept.  The builders follow the same total
//! dispatch contract as the message and user families.

use prism_tl_types::enums;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dispatch::{Decoder, Family};

// ─── Peer ─────────────────────────────────────────────────────────────────────

/// The chat a message lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "id", rename_all = "snake_case"))]
pub enum Peer {
    User(i32),
    Chat(i32),
    Channel(i32),
}

impl Peer {
    pub fn id(&self) -> i32 {
        match *self {
            Self::User(id) | Self::Chat(id) | Self::Channel(id) => id,
        }
    }
}

// ─── Files ────────────────────────────────────────────────────────────────────

/// Where a file lives on Telegram's storage.  All zero when unavailable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FileLocation {
    pub dc:        i32,
    pub volume_id: i64,
    pub local_id:  i32,
    pub secret:    i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Photo {
    pub id:          i64,
    pub access_hash: i64,
    pub date:        i32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    pub id:          i64,
    pub access_hash: i64,
    pub date:        i32,
    pub mime_type:   String,
    pub size:        i32,
    pub dc_id:       i32,
}

// ─── Chat ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChatKind {
    #[default]
    Chat,
    ChatForbidden,
    Channel,
    ChannelForbidden,
}

/// A group, supergroup or channel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chat {
    pub id:                 i32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind:               ChatKind,
    pub title:              String,
    pub username:           String,
    pub access_hash:        i64,
    pub participants_count: i32,
    pub about:              String,
}

// ─── Builders ─────────────────────────────────────────────────────────────────

impl Decoder {
    pub fn peer(&self, input: enums::Peer) -> Option<Peer> {
        match input {
            enums::Peer::User(p)    => Some(Peer::User(p.user_id)),
            enums::Peer::Chat(p)    => Some(Peer::Chat(p.chat_id)),
            enums::Peer::Channel(p) => Some(Peer::Channel(p.channel_id)),
            other @ enums::Peer::Raw(_) => {
                self.unsupported(Family::Peer, &other);
                None
            }
        }
    }

    /// `None` for `photoEmpty`.
    pub fn photo(&self, input: enums::Photo) -> Option<Photo> {
        match input {
            enums::Photo::Empty(_) => None,
            enums::Photo::Photo(p) => Some(Photo {
                id:          p.id,
                access_hash: p.access_hash,
                date:        p.date,
            }),
            other @ enums::Photo::Raw(_) => {
                self.unsupported(Family::Photo, &other);
                None
            }
        }
    }

    /// `None` for `documentEmpty`.
    pub fn document(&self, input: enums::Document) -> Option<Document> {
        match input {
            enums::Document::Empty(_)    => None,
            enums::Document::Document(d) => Some(Document {
                id:          d.id,
                access_hash: d.access_hash,
                date:        d.date,
                mime_type:   d.mime_type,
                size:        d.size,
                dc_id:       d.dc_id,
            }),
            other @ enums::Document::Raw(_) => {
                self.unsupported(Family::Document, &other);
                None
            }
        }
    }

    /// `None` for `chatEmpty`.
    pub fn chat(&self, input: enums::Chat) -> Option<Chat> {
        match input {
            enums::Chat::Empty(_) => None,
            enums::Chat::Chat(c) => Some(Chat {
                id:                 c.id,
                kind:               ChatKind::Chat,
                title:              c.title,
                participants_count: c.participants_count,
                ..Chat::default()
            }),
            enums::Chat::Forbidden(c) => Some(Chat {
                id:    c.id,
                kind:  ChatKind::ChatForbidden,
                title: c.title,
                ..Chat::default()
            }),
            enums::Chat::Channel(c) => Some(Chat {
                id:          c.id,
                kind:        ChatKind::Channel,
                title:       c.title,
                username:    c.username.unwrap_or_default(),
                access_hash: c.access_hash.unwrap_or_default(),
                ..Chat::default()
            }),
            enums::Chat::ChannelForbidden(c) => Some(Chat {
                id:          c.id,
                kind:        ChatKind::ChannelForbidden,
                title:       c.title,
                access_hash: c.access_hash,
                ..Chat::default()
            }),
            other @ enums::Chat::Raw(_) => {
                self.unsupported(Family::Chat, &other);
                None
            }
        }
    }

    /// Merge a `messages.chatFull` into the matching entry of its `chats`.
    ///
    /// If the full-chat record itself is unrecognised, or no chat with its ID
    /// is present, whatever could be recovered is returned and the rest stays
    /// at zero value.
    pub fn chat_full(&self, input: enums::messages::ChatFull) -> Chat {
        let full = match input {
            enums::messages::ChatFull::ChatFull(f) => f,
            other @ enums::messages::ChatFull::Raw(_) => {
                self.unsupported(Family::ChatFull, &other);
                return Chat::default();
            }
        };

        let (id, about, participants) = match full.full_chat {
            enums::ChatFull::Full(f)        => (f.id, f.about, None),
            enums::ChatFull::ChannelFull(f) => (f.id, f.about, f.participants_count),
            other @ enums::ChatFull::Raw(_) => {
                self.unsupported(Family::ChatFull, &other);
                return Chat::default();
            }
        };

        let mut chat = full.chats
            .into_iter()
            .filter_map(|c| self.chat(c))
            .find(|c| c.id == id)
            .unwrap_or_else(|| Chat { id, ..Chat::default() });
        chat.about = about;
        if let Some(n) = participants {
            chat.participants_count = n;
        }
        chat
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
