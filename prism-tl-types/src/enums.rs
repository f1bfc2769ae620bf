//! Boxed TL types: one `enum` per type, one variant per constructor.
//!
//! Constructors without parameters are unit variants.  Every enum ends with a
//! [`Raw`](crate::Raw) variant for constructors the decoder did not recognise.

use crate::{Raw, types};

// The `raw` form is for enums with a `Raw` variant and also reports its ID.
macro_rules! variant_names {
    (raw $ty:ty { $($pat:pat => $name:literal),* $(,)? }) => {
        impl crate::Variant for $ty {
            fn variant_name(&self) -> &'static str {
                match self {
                    $($pat => $name,)*
                }
            }

            fn raw_id(&self) -> Option<u32> {
                match self {
                    Self::Raw(r) => Some(r.constructor_id),
                    _            => None,
                }
            }
        }
    };
    ($ty:ty { $($pat:pat => $name:literal),* $(,)? }) => {
        impl crate::Variant for $ty {
            fn variant_name(&self) -> &'static str {
                match self {
                    $($pat => $name,)*
                }
            }
        }
    };
}

// ─── Peers ────────────────────────────────────────────────────────────────────

/// [`Peer`](https://core.telegram.org/type/Peer)
#[derive(Clone, Debug, PartialEq)]
pub enum Peer {
    User(types::PeerUser),
    Chat(types::PeerChat),
    Channel(types::PeerChannel),
    Raw(Raw),
}

variant_names!(raw Peer {
    Self::User(_)    => "peerUser",
    Self::Chat(_)    => "peerChat",
    Self::Channel(_) => "peerChannel",
    Self::Raw(_)     => "raw",
});

/// [`InputPeer`](https://core.telegram.org/type/InputPeer)
#[derive(Clone, Debug, PartialEq)]
pub enum InputPeer {
    Empty,
    PeerSelf,
    Chat(types::InputPeerChat),
    User(types::InputPeerUser),
    Channel(types::InputPeerChannel),
}

variant_names!(InputPeer {
    Self::Empty      => "inputPeerEmpty",
    Self::PeerSelf   => "inputPeerSelf",
    Self::Chat(_)    => "inputPeerChat",
    Self::User(_)    => "inputPeerUser",
    Self::Channel(_) => "inputPeerChannel",
});

// ─── Files ────────────────────────────────────────────────────────────────────

/// [`FileLocation`](https://core.telegram.org/type/FileLocation)
#[derive(Clone, Debug, PartialEq)]
pub enum FileLocation {
    Unavailable(types::FileLocationUnavailable),
    Location(types::FileLocation),
    Raw(Raw),
}

variant_names!(raw FileLocation {
    Self::Unavailable(_) => "fileLocationUnavailable",
    Self::Location(_)    => "fileLocation",
    Self::Raw(_)         => "raw",
});

/// [`Photo`](https://core.telegram.org/type/Photo)
#[derive(Clone, Debug, PartialEq)]
pub enum Photo {
    Empty(types::PhotoEmpty),
    Photo(types::Photo),
    Raw(Raw),
}

variant_names!(raw Photo {
    Self::Empty(_) => "photoEmpty",
    Self::Photo(_) => "photo",
    Self::Raw(_)   => "raw",
});

/// [`Document`](https://core.telegram.org/type/Document)
#[derive(Clone, Debug, PartialEq)]
pub enum Document {
    Empty(types::DocumentEmpty),
    Document(types::Document),
    Raw(Raw),
}

variant_names!(raw Document {
    Self::Empty(_)    => "documentEmpty",
    Self::Document(_) => "document",
    Self::Raw(_)      => "raw",
});

// ─── Users ────────────────────────────────────────────────────────────────────

/// [`User`](https://core.telegram.org/type/User)
#[derive(Clone, Debug, PartialEq)]
pub enum User {
    Empty(types::UserEmpty),
    User(types::User),
    Raw(Raw),
}

variant_names!(raw User {
    Self::Empty(_) => "userEmpty",
    Self::User(_)  => "user",
    Self::Raw(_)   => "raw",
});

/// [`UserStatus`](https://core.telegram.org/type/UserStatus)
#[derive(Clone, Debug, PartialEq)]
pub enum UserStatus {
    Empty,
    Online(types::UserStatusOnline),
    Offline(types::UserStatusOffline),
    Recently,
    LastWeek,
    LastMonth,
    Raw(Raw),
}

variant_names!(raw UserStatus {
    Self::Empty      => "userStatusEmpty",
    Self::Online(_)  => "userStatusOnline",
    Self::Offline(_) => "userStatusOffline",
    Self::Recently   => "userStatusRecently",
    Self::LastWeek   => "userStatusLastWeek",
    Self::LastMonth  => "userStatusLastMonth",
    Self::Raw(_)     => "raw",
});

/// [`UserProfilePhoto`](https://core.telegram.org/type/UserProfilePhoto)
#[derive(Clone, Debug, PartialEq)]
pub enum UserProfilePhoto {
    Empty,
    Photo(types::UserProfilePhoto),
    Raw(Raw),
}

variant_names!(raw UserProfilePhoto {
    Self::Empty    => "userProfilePhotoEmpty",
    Self::Photo(_) => "userProfilePhoto",
    Self::Raw(_)   => "raw",
});

// ─── Chats ────────────────────────────────────────────────────────────────────

/// [`Chat`](https://core.telegram.org/type/Chat)
#[derive(Clone, Debug, PartialEq)]
pub enum Chat {
    Empty(types::ChatEmpty),
    Chat(types::Chat),
    Forbidden(types::ChatForbidden),
    Channel(types::Channel),
    ChannelForbidden(types::ChannelForbidden),
    Raw(Raw),
}

variant_names!(raw Chat {
    Self::Empty(_)            => "chatEmpty",
    Self::Chat(_)             => "chat",
    Self::Forbidden(_)        => "chatForbidden",
    Self::Channel(_)          => "channel",
    Self::ChannelForbidden(_) => "channelForbidden",
    Self::Raw(_)              => "raw",
});

/// [`ChatFull`](https://core.telegram.org/type/ChatFull)
#[derive(Clone, Debug, PartialEq)]
pub enum ChatFull {
    Full(types::ChatFull),
    ChannelFull(types::ChannelFull),
    Raw(Raw),
}

variant_names!(raw ChatFull {
    Self::Full(_)        => "chatFull",
    Self::ChannelFull(_) => "channelFull",
    Self::Raw(_)         => "raw",
});

// ─── Messages ─────────────────────────────────────────────────────────────────

/// [`Message`](https://core.telegram.org/type/Message)
#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Empty(types::MessageEmpty),
    Message(types::Message),
    Service(types::MessageService),
    Raw(Raw),
}

variant_names!(raw Message {
    Self::Empty(_)   => "messageEmpty",
    Self::Message(_) => "message",
    Self::Service(_) => "messageService",
    Self::Raw(_)     => "raw",
});

/// [`MessageFwdHeader`](https://core.telegram.org/type/MessageFwdHeader)
#[derive(Clone, Debug, PartialEq)]
pub enum MessageFwdHeader {
    Header(types::MessageFwdHeader),
    Raw(Raw),
}

variant_names!(raw MessageFwdHeader {
    Self::Header(_) => "messageFwdHeader",
    Self::Raw(_)    => "raw",
});

/// [`MessageMedia`](https://core.telegram.org/type/MessageMedia)
#[derive(Clone, Debug, PartialEq)]
pub enum MessageMedia {
    Empty,
    Photo(types::MessageMediaPhoto),
    Geo(types::MessageMediaGeo),
    Contact(types::MessageMediaContact),
    Unsupported,
    Document(types::MessageMediaDocument),
    WebPage(types::MessageMediaWebPage),
    Venue(types::MessageMediaVenue),
    Raw(Raw),
}

variant_names!(raw MessageMedia {
    Self::Empty       => "messageMediaEmpty",
    Self::Photo(_)    => "messageMediaPhoto",
    Self::Geo(_)      => "messageMediaGeo",
    Self::Contact(_)  => "messageMediaContact",
    Self::Unsupported => "messageMediaUnsupported",
    Self::Document(_) => "messageMediaDocument",
    Self::WebPage(_)  => "messageMediaWebPage",
    Self::Venue(_)    => "messageMediaVenue",
    Self::Raw(_)      => "raw",
});

/// [`MessageEntity`](https://core.telegram.org/type/MessageEntity)
#[derive(Clone, Debug, PartialEq)]
pub enum MessageEntity {
    Unknown(types::MessageEntityUnknown),
    Mention(types::MessageEntityMention),
    Hashtag(types::MessageEntityHashtag),
    BotCommand(types::MessageEntityBotCommand),
    Url(types::MessageEntityUrl),
    Email(types::MessageEntityEmail),
    Bold(types::MessageEntityBold),
    Italic(types::MessageEntityItalic),
    Code(types::MessageEntityCode),
    Pre(types::MessageEntityPre),
    TextUrl(types::MessageEntityTextUrl),
    MentionName(types::MessageEntityMentionName),
    Raw(Raw),
}

variant_names!(raw MessageEntity {
    Self::Unknown(_)     => "messageEntityUnknown",
    Self::Mention(_)     => "messageEntityMention",
    Self::Hashtag(_)     => "messageEntityHashtag",
    Self::BotCommand(_)  => "messageEntityBotCommand",
    Self::Url(_)         => "messageEntityUrl",
    Self::Email(_)       => "messageEntityEmail",
    Self::Bold(_)        => "messageEntityBold",
    Self::Italic(_)      => "messageEntityItalic",
    Self::Code(_)        => "messageEntityCode",
    Self::Pre(_)         => "messageEntityPre",
    Self::TextUrl(_)     => "messageEntityTextUrl",
    Self::MentionName(_) => "messageEntityMentionName",
    Self::Raw(_)         => "raw",
});

/// [`MessageAction`](https://core.telegram.org/type/MessageAction)
#[derive(Clone, Debug, PartialEq)]
pub enum MessageAction {
    Empty,
    ChatCreate(types::MessageActionChatCreate),
    ChatEditTitle(types::MessageActionChatEditTitle),
    ChatEditPhoto(types::MessageActionChatEditPhoto),
    ChatDeletePhoto,
    ChatAddUser(types::MessageActionChatAddUser),
    ChatDeleteUser(types::MessageActionChatDeleteUser),
    ChatJoinedByLink(types::MessageActionChatJoinedByLink),
    ChannelCreate(types::MessageActionChannelCreate),
    ChatMigrateTo(types::MessageActionChatMigrateTo),
    ChannelMigrateFrom(types::MessageActionChannelMigrateFrom),
    PinMessage,
    HistoryClear,
    GameScore(types::MessageActionGameScore),
    PaymentSent(types::MessageActionPaymentSent),
    PhoneCall(types::MessageActionPhoneCall),
    ScreenshotTaken,
    CustomAction(types::MessageActionCustomAction),
    Raw(Raw),
}

variant_names!(raw MessageAction {
    Self::Empty                 => "messageActionEmpty",
    Self::ChatCreate(_)         => "messageActionChatCreate",
    Self::ChatEditTitle(_)      => "messageActionChatEditTitle",
    Self::ChatEditPhoto(_)      => "messageActionChatEditPhoto",
    Self::ChatDeletePhoto       => "messageActionChatDeletePhoto",
    Self::ChatAddUser(_)        => "messageActionChatAddUser",
    Self::ChatDeleteUser(_)     => "messageActionChatDeleteUser",
    Self::ChatJoinedByLink(_)   => "messageActionChatJoinedByLink",
    Self::ChannelCreate(_)      => "messageActionChannelCreate",
    Self::ChatMigrateTo(_)      => "messageActionChatMigrateTo",
    Self::ChannelMigrateFrom(_) => "messageActionChannelMigrateFrom",
    Self::PinMessage            => "messageActionPinMessage",
    Self::HistoryClear          => "messageActionHistoryClear",
    Self::GameScore(_)          => "messageActionGameScore",
    Self::PaymentSent(_)        => "messageActionPaymentSent",
    Self::PhoneCall(_)          => "messageActionPhoneCall",
    Self::ScreenshotTaken       => "messageActionScreenshotTaken",
    Self::CustomAction(_)       => "messageActionCustomAction",
    Self::Raw(_)                => "raw",
});

// ─── Updates ──────────────────────────────────────────────────────────────────

/// [`Updates`](https://core.telegram.org/type/Updates)
#[derive(Clone, Debug, PartialEq)]
pub enum Updates {
    TooLong,
    UpdateShortSentMessage(types::UpdateShortSentMessage),
    Combined(types::UpdatesCombined),
    Updates(types::Updates),
    Raw(Raw),
}

variant_names!(raw Updates {
    Self::TooLong                   => "updatesTooLong",
    Self::UpdateShortSentMessage(_) => "updateShortSentMessage",
    Self::Combined(_)               => "updatesCombined",
    Self::Updates(_)                => "updates",
    Self::Raw(_)                    => "raw",
});

impl Updates {
    /// Chats carried by the container, if it carries any.
    pub fn chats(&self) -> &[Chat] {
        match self {
            Self::Updates(u)  => &u.chats,
            Self::Combined(u) => &u.chats,
            _                 => &[],
        }
    }
}

// ─── messages.* ───────────────────────────────────────────────────────────────

pub mod messages {
    use crate::{Raw, types};

    /// [`messages.Messages`](https://core.telegram.org/type/messages.Messages)
    #[derive(Clone, Debug, PartialEq)]
    pub enum Messages {
        Messages(types::messages::Messages),
        Slice(types::messages::MessagesSlice),
        ChannelMessages(types::messages::ChannelMessages),
        NotModified(types::messages::MessagesNotModified),
        Raw(Raw),
    }

    variant_names!(raw Messages {
        Self::Messages(_)        => "messages.messages",
        Self::Slice(_)           => "messages.messagesSlice",
        Self::ChannelMessages(_) => "messages.channelMessages",
        Self::NotModified(_)     => "messages.messagesNotModified",
        Self::Raw(_)             => "raw",
    });

    /// [`messages.Chats`](https://core.telegram.org/type/messages.Chats)
    #[derive(Clone, Debug, PartialEq)]
    pub enum Chats {
        Chats(types::messages::Chats),
        Slice(types::messages::ChatsSlice),
        Raw(Raw),
    }

    variant_names!(raw Chats {
        Self::Chats(_) => "messages.chats",
        Self::Slice(_) => "messages.chatsSlice",
        Self::Raw(_)   => "raw",
    });

    /// [`messages.ChatFull`](https://core.telegram.org/type/messages.ChatFull)
    #[derive(Clone, Debug, PartialEq)]
    pub enum ChatFull {
        ChatFull(types::messages::ChatFull),
        Raw(Raw),
    }

    variant_names!(raw ChatFull {
        Self::ChatFull(_) => "messages.chatFull",
        Self::Raw(_)      => "raw",
    });
}
