//! Messages and everything nested in them: flags, service actions, text
//! entities, forward headers and media.

use prism_tl_types::enums;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dispatch::{Decoder, Family};
use crate::flags::{FlagBit, FlagSet};
use crate::refs::{Document, Peer, Photo};

// ─── Message ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MessageType {
    #[default]
    Normal,
    Service,
}

/// A decoded chat message.
///
/// `kind` decides which optional parts mean anything: `action` is only set on
/// service messages; `media`, `forward_header` and `entities` only on normal
/// ones.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message {
    pub flags:          MessageFlags,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind:           MessageType,
    pub id:             i32,
    pub from:           i32,
    pub to:             Option<Peer>,
    pub date:           i32,
    pub body:           String,
    pub views:          i32,
    pub action:         Option<MessageAction>,
    pub forward_header: Option<MessageForwardHeader>,
    pub entities:       Vec<MessageEntity>,
    pub media:          Option<MessageMedia>,
}

impl Message {
    pub fn is_service(&self) -> bool {
        self.kind == MessageType::Service
    }
}

/// Named bits of a message's `flags` word.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageFlags {
    pub out:          bool,
    pub mentioned:    bool,
    #[cfg_attr(feature = "serde", serde(rename = "media_unheard"))]
    pub media_unread: bool,
    pub silent:       bool,
    pub post:         bool,
}

impl FlagSet for MessageFlags {
    const TABLE: &'static [FlagBit<Self>] = &[
        (1,  |f: &mut Self| f.out = true),
        (4,  |f: &mut Self| f.mentioned = true),
        (5,  |f: &mut Self| f.media_unread = true),
        (13, |f: &mut Self| f.silent = true),
        (14, |f: &mut Self| f.post = true),
    ];
}

// ─── MessageAction ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ActionType {
    ChannelCreated,
    ChannelMigrateFrom,
    ChatCreated,
    ChatAddUser,
    ChatDeleteUser,
    ChatDeletePhoto,
    ChatEditPhoto,
    ChatEditTitle,
    ChatJoinedByLink,
    ChatMigrateTo,
    GameScore,
    HistoryClear,
    PinMessage,
    PhoneCall,
}

/// What a service message reports.
///
/// Each kind fills its own subset of the fields; the rest stay at zero value.
/// `kind` is `None` for `messageActionEmpty` and for unsupported actions.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageAction {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind:       Option<ActionType>,
    pub title:      String,
    pub chat_id:    i32,
    pub channel_id: i32,
    pub game_id:    i64,
    pub game_score: i32,
    pub user_id:    i32,
    pub user_ids:   Vec<i32>,
    pub photo:      Option<Photo>,
}

// ─── MessageEntity ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EntityType {
    Bold,
    Italic,
    Code,
    Pre,
    Url,
    TextUrl,
    Mention,
    MentionName,
    Hashtag,
    BotCommand,
    Email,
}

/// A formatted span of the message body, in UTF-16 code units.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageEntity {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub kind:     EntityType,
    pub offset:   i32,
    pub length:   i32,
    /// Only for [`EntityType::TextUrl`].
    pub url:      String,
    /// Only for [`EntityType::Pre`].
    pub language: String,
    /// Only for [`EntityType::MentionName`].
    pub user_id:  i32,
}

impl MessageEntity {
    fn span(kind: EntityType, offset: i32, length: i32) -> Self {
        Self { kind, offset, length, url: String::new(), language: String::new(), user_id: 0 }
    }
}

// ─── Forward header ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageForwardHeader {
    pub from:         i32,
    pub date:         i32,
    pub channel_id:   i32,
    pub channel_post: i32,
    pub author:       String,
}

// ─── Media ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum MessageMedia {
    Photo {
        caption: String,
        photo:   Option<Photo>,
    },
    Contact {
        first_name: String,
        last_name:  String,
        user_id:    i32,
        phone:      String,
    },
    Document {
        caption:  String,
        document: Option<Document>,
    },
}

// ─── Builders ─────────────────────────────────────────────────────────────────

impl Decoder {
    /// `None` for `messageEmpty` and for unsupported constructors.
    pub fn message(&self, input: enums::Message) -> Option<Message> {
        match input {
            enums::Message::Empty(_) => None,
            enums::Message::Message(m) => Some(Message {
                flags:          MessageFlags::from_bits(m.flags),
                kind:           MessageType::Normal,
                id:             m.id,
                from:           m.from_id.unwrap_or_default(),
                to:             self.peer(m.to_id),
                date:           m.date,
                body:           m.message,
                views:          m.views.unwrap_or_default(),
                action:         None,
                forward_header: m.fwd_from.and_then(|h| self.forward_header(h)),
                entities:       self.message_entities(m.entities.unwrap_or_default()),
                media:          m.media.and_then(|x| self.message_media(x)),
            }),
            enums::Message::Service(m) => Some(Message {
                flags:  MessageFlags::from_bits(m.flags),
                kind:   MessageType::Service,
                id:     m.id,
                from:   m.from_id.unwrap_or_default(),
                to:     self.peer(m.to_id),
                date:   m.date,
                action: Some(self.message_action(m.action)),
                ..Message::default()
            }),
            other @ enums::Message::Raw(_) => {
                self.unsupported(Family::Message, &other);
                None
            }
        }
    }

    /// Decode a batch, dropping empty and unsupported entries.
    pub fn messages(&self, input: Vec<enums::Message>) -> Vec<Message> {
        input.into_iter().filter_map(|m| self.message(m)).collect()
    }

    /// Never fails; `kind` is left `None` when there is nothing to report.
    pub fn message_action(&self, input: enums::MessageAction) -> MessageAction {
        use enums::MessageAction as A;

        let mut a = MessageAction::default();
        match input {
            A::Empty => {}
            A::ChannelCreate(x) => {
                a.kind = Some(ActionType::ChannelCreated);
                a.title = x.title;
            }
            A::ChannelMigrateFrom(x) => {
                a.kind = Some(ActionType::ChannelMigrateFrom);
                a.title = x.title;
                a.chat_id = x.chat_id;
            }
            A::ChatCreate(x) => {
                a.kind = Some(ActionType::ChatCreated);
                a.title = x.title;
                a.user_ids = x.users;
            }
            A::ChatAddUser(x) => {
                a.kind = Some(ActionType::ChatAddUser);
                a.user_ids = x.users;
            }
            A::ChatDeleteUser(x) => {
                a.kind = Some(ActionType::ChatDeleteUser);
                a.user_id = x.user_id;
            }
            A::ChatDeletePhoto => a.kind = Some(ActionType::ChatDeletePhoto),
            A::ChatEditPhoto(x) => {
                a.kind = Some(ActionType::ChatEditPhoto);
                a.photo = self.photo(x.photo);
            }
            A::ChatEditTitle(x) => {
                a.kind = Some(ActionType::ChatEditTitle);
                a.title = x.title;
            }
            A::ChatJoinedByLink(x) => {
                a.kind = Some(ActionType::ChatJoinedByLink);
                a.user_id = x.inviter_id;
            }
            A::ChatMigrateTo(x) => {
                a.kind = Some(ActionType::ChatMigrateTo);
                a.channel_id = x.channel_id;
            }
            A::GameScore(x) => {
                a.kind = Some(ActionType::GameScore);
                a.game_id = x.game_id;
                a.game_score = x.score;
            }
            A::HistoryClear => a.kind = Some(ActionType::HistoryClear),
            A::PinMessage   => a.kind = Some(ActionType::PinMessage),
            A::PhoneCall(_) => a.kind = Some(ActionType::PhoneCall),
            other @ (A::PaymentSent(_) | A::ScreenshotTaken | A::CustomAction(_) | A::Raw(_)) => {
                self.unsupported(Family::MessageAction, &other);
            }
        }
        a
    }

    /// `None` for unsupported entity kinds, including `messageEntityUnknown`.
    pub fn message_entity(&self, input: enums::MessageEntity) -> Option<MessageEntity> {
        use enums::MessageEntity as E;

        let entity = match input {
            E::Bold(x)       => MessageEntity::span(EntityType::Bold, x.offset, x.length),
            E::Italic(x)     => MessageEntity::span(EntityType::Italic, x.offset, x.length),
            E::Code(x)       => MessageEntity::span(EntityType::Code, x.offset, x.length),
            E::Url(x)        => MessageEntity::span(EntityType::Url, x.offset, x.length),
            E::Mention(x)    => MessageEntity::span(EntityType::Mention, x.offset, x.length),
            E::Hashtag(x)    => MessageEntity::span(EntityType::Hashtag, x.offset, x.length),
            E::BotCommand(x) => MessageEntity::span(EntityType::BotCommand, x.offset, x.length),
            E::Email(x)      => MessageEntity::span(EntityType::Email, x.offset, x.length),
            E::Pre(x) => MessageEntity {
                language: x.language,
                ..MessageEntity::span(EntityType::Pre, x.offset, x.length)
            },
            E::TextUrl(x) => MessageEntity {
                url: x.url,
                ..MessageEntity::span(EntityType::TextUrl, x.offset, x.length)
            },
            E::MentionName(x) => MessageEntity {
                user_id: x.user_id,
                ..MessageEntity::span(EntityType::MentionName, x.offset, x.length)
            },
            other @ (E::Unknown(_) | E::Raw(_)) => {
                self.unsupported(Family::MessageEntity, &other);
                return None;
            }
        };
        Some(entity)
    }

    /// Decode in input order, dropping unsupported kinds.
    pub fn message_entities(&self, input: Vec<enums::MessageEntity>) -> Vec<MessageEntity> {
        input.into_iter().filter_map(|e| self.message_entity(e)).collect()
    }

    pub fn forward_header(&self, input: enums::MessageFwdHeader) -> Option<MessageForwardHeader> {
        match input {
            enums::MessageFwdHeader::Header(h) => Some(MessageForwardHeader {
                from:         h.from_id.unwrap_or_default(),
                date:         h.date,
                channel_id:   h.channel_id.unwrap_or_default(),
                channel_post: h.channel_post.unwrap_or_default(),
                author:       h.post_author.unwrap_or_default(),
            }),
            other @ enums::MessageFwdHeader::Raw(_) => {
                self.unsupported(Family::MessageForwardHeader, &other);
                None
            }
        }
    }

    /// `None` for empty media, web-page previews (not mapped yet) and
    /// unsupported kinds; only the last are reported.
    pub fn message_media(&self, input: enums::MessageMedia) -> Option<MessageMedia> {
        use enums::MessageMedia as M;

        match input {
            M::Photo(x) => Some(MessageMedia::Photo {
                caption: x.caption,
                photo:   self.photo(x.photo),
            }),
            M::Contact(x) => Some(MessageMedia::Contact {
                first_name: x.first_name,
                last_name:  x.last_name,
                user_id:    x.user_id,
                phone:      x.phone_number,
            }),
            M::Document(x) => Some(MessageMedia::Document {
                caption:  x.caption,
                document: self.document(x.document),
            }),
            // TODO: map link previews once the web-page entity exists.
            M::Empty | M::WebPage(_) => None,
            other @ (M::Geo(_) | M::Venue(_) | M::Unsupported | M::Raw(_)) => {
                self.unsupported(Family::MessageMedia, &other);
                None
            }
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_message_bit_maps_to_one_field() {
        let cases: [(u32, MessageFlags); 5] = [
            (1,  MessageFlags { out: true, ..Default::default() }),
            (4,  MessageFlags { mentioned: true, ..Default::default() }),
            (5,  MessageFlags { media_unread: true, ..Default::default() }),
            (13, MessageFlags { silent: true, ..Default::default() }),
            (14, MessageFlags { post: true, ..Default::default() }),
        ];
        for (bit, expected) in cases {
            assert_eq!(MessageFlags::from_bits(1 << bit), expected, "bit {bit}");
        }
    }

    #[test]
    fn message_flags_ignore_foreign_bits() {
        let word = (1 << 0) | (1 << 2) | (1 << 3) | (1 << 30);
        assert_eq!(MessageFlags::from_bits(word), MessageFlags::default());
    }

    #[test]
    fn combined_bits_are_independent() {
        let f = MessageFlags::from_bits((1 << 1) | (1 << 14));
        assert!(f.out && f.post);
        assert!(!f.mentioned && !f.media_unread && !f.silent);
    }
}
