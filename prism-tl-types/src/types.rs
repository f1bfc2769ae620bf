//! Concrete constructors (bare types).
//!
//! Field names follow the TL schema in snake_case.  Fields guarded by a
//! `flags.N?` condition are `Option`s.

use crate::enums;

// ─── Peers ────────────────────────────────────────────────────────────────────

/// `peerUser#9db1bc6d user_id:int = Peer`
#[derive(Clone, Debug, PartialEq)]
pub struct PeerUser { pub user_id: i32 }

/// `peerChat#bad0e5bb chat_id:int = Peer`
#[derive(Clone, Debug, PartialEq)]
pub struct PeerChat { pub chat_id: i32 }

/// `peerChannel#bddde532 channel_id:int = Peer`
#[derive(Clone, Debug, PartialEq)]
pub struct PeerChannel { pub channel_id: i32 }

/// `inputPeerChat#179be863 chat_id:int = InputPeer`
#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerChat { pub chat_id: i32 }

/// `inputPeerUser#7b8e7de6 user_id:int access_hash:long = InputPeer`
#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerUser { pub user_id: i32, pub access_hash: i64 }

/// `inputPeerChannel#20adaef8 channel_id:int access_hash:long = InputPeer`
#[derive(Clone, Debug, PartialEq)]
pub struct InputPeerChannel { pub channel_id: i32, pub access_hash: i64 }

// ─── Files ────────────────────────────────────────────────────────────────────

/// `fileLocationUnavailable#7c596b46 volume_id:long local_id:int secret:long = FileLocation`
#[derive(Clone, Debug, PartialEq)]
pub struct FileLocationUnavailable {
    pub volume_id: i64,
    pub local_id:  i32,
    pub secret:    i64,
}

/// `fileLocation#53d69076 dc_id:int volume_id:long local_id:int secret:long = FileLocation`
#[derive(Clone, Debug, PartialEq)]
pub struct FileLocation {
    pub dc_id:     i32,
    pub volume_id: i64,
    pub local_id:  i32,
    pub secret:    i64,
}

/// `photoEmpty#2331b22d id:long = Photo`
#[derive(Clone, Debug, PartialEq)]
pub struct PhotoEmpty { pub id: i64 }

/// `photo#9288dd29 flags:# has_stickers:flags.0?true id:long access_hash:long date:int sizes:Vector<PhotoSize> = Photo`
///
/// Sizes are resolved by the media layer and not carried here.
#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub flags:       i32,
    pub id:          i64,
    pub access_hash: i64,
    pub date:        i32,
}

/// `documentEmpty#36f8c871 id:long = Document`
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentEmpty { pub id: i64 }

/// `document#87232bc7 id:long access_hash:long date:int mime_type:string size:int … dc_id:int version:int … = Document`
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub id:          i64,
    pub access_hash: i64,
    pub date:        i32,
    pub mime_type:   String,
    pub size:        i32,
    pub dc_id:       i32,
    pub version:     i32,
}

/// `geoPoint#2049d70c long:double lat:double = GeoPoint`
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPoint { pub long: f64, pub lat: f64 }

/// `webPage#5f07b4bc … id:long url:string display_url:string … title:flags.1?string … = WebPage`
#[derive(Clone, Debug, PartialEq)]
pub struct WebPage {
    pub id:          i64,
    pub url:         String,
    pub display_url: String,
    pub title:       Option<String>,
}

// ─── Users ────────────────────────────────────────────────────────────────────

/// `userProfilePhoto#d559d8c8 photo_id:long photo_small:FileLocation photo_big:FileLocation = UserProfilePhoto`
#[derive(Clone, Debug, PartialEq)]
pub struct UserProfilePhoto {
    pub photo_id:    i64,
    pub photo_small: enums::FileLocation,
    pub photo_big:   enums::FileLocation,
}

/// `userStatusOnline#edb93949 expires:int = UserStatus`
#[derive(Clone, Debug, PartialEq)]
pub struct UserStatusOnline { pub expires: i32 }

/// `userStatusOffline#8c703f was_online:int = UserStatus`
#[derive(Clone, Debug, PartialEq)]
pub struct UserStatusOffline { pub was_online: i32 }

/// `userEmpty#200250ba id:int = User`
#[derive(Clone, Debug, PartialEq)]
pub struct UserEmpty { pub id: i32 }

/// `user#2e13f4c3 flags:# self:flags.10?true contact:flags.11?true … id:int access_hash:flags.0?long
/// first_name:flags.1?string last_name:flags.2?string username:flags.3?string phone:flags.4?string
/// photo:flags.5?UserProfilePhoto status:flags.6?UserStatus bot_info_version:flags.14?int
/// restriction_reason:flags.18?string bot_inline_placeholder:flags.19?string lang_code:flags.22?string = User`
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub flags:                  i32,
    pub id:                     i32,
    pub access_hash:            Option<i64>,
    pub first_name:             Option<String>,
    pub last_name:              Option<String>,
    pub username:               Option<String>,
    pub phone:                  Option<String>,
    pub photo:                  Option<enums::UserProfilePhoto>,
    pub status:                 Option<enums::UserStatus>,
    pub bot_info_version:       Option<i32>,
    pub restriction_reason:     Option<String>,
    pub bot_inline_placeholder: Option<String>,
    pub lang_code:              Option<String>,
}

// ─── Chats ────────────────────────────────────────────────────────────────────

/// `chatEmpty#9ba2d800 id:int = Chat`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatEmpty { pub id: i32 }

/// `chat#d91cdd54 flags:# … id:int title:string photo:ChatPhoto participants_count:int date:int version:int … = Chat`
#[derive(Clone, Debug, PartialEq)]
pub struct Chat {
    pub flags:              i32,
    pub id:                 i32,
    pub title:              String,
    pub participants_count: i32,
    pub date:               i32,
    pub version:            i32,
}

/// `chatForbidden#7328bdb id:int title:string = Chat`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatForbidden { pub id: i32, pub title: String }

/// `channel#a14dca52 flags:# … id:int access_hash:flags.13?long title:string username:flags.6?string … date:int version:int … = Chat`
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub flags:       i32,
    pub id:          i32,
    pub access_hash: Option<i64>,
    pub title:       String,
    pub username:    Option<String>,
    pub date:        i32,
    pub version:     i32,
}

/// `channelForbidden#8537784f flags:# … id:int access_hash:long title:string = Chat`
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelForbidden {
    pub flags:       i32,
    pub id:          i32,
    pub access_hash: i64,
    pub title:       String,
}

/// `chatFull#2e02a614 id:int … about:string … = ChatFull`
#[derive(Clone, Debug, PartialEq)]
pub struct ChatFull {
    pub id:    i32,
    pub about: String,
}

/// `channelFull#17f45fcf flags:# … id:int about:string participants_count:flags.0?int … = ChatFull`
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelFull {
    pub flags:              i32,
    pub id:                 i32,
    pub about:              String,
    pub participants_count: Option<i32>,
}

// ─── Messages ─────────────────────────────────────────────────────────────────

/// `messageFwdHeader#c786ddcb flags:# from_id:flags.0?int date:int channel_id:flags.1?int
/// channel_post:flags.2?int post_author:flags.3?string = MessageFwdHeader`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageFwdHeader {
    pub flags:        i32,
    pub from_id:      Option<i32>,
    pub date:         i32,
    pub channel_id:   Option<i32>,
    pub channel_post: Option<i32>,
    pub post_author:  Option<String>,
}

/// `messageEmpty#83e5de54 id:int = Message`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEmpty { pub id: i32 }

/// `message#90dddc11 flags:# out:flags.1?true mentioned:flags.4?true media_unread:flags.5?true
/// silent:flags.13?true post:flags.14?true id:int from_id:flags.8?int to_id:Peer
/// fwd_from:flags.2?MessageFwdHeader via_bot_id:flags.11?int reply_to_msg_id:flags.3?int date:int
/// message:string media:flags.9?MessageMedia … entities:flags.7?Vector<MessageEntity>
/// views:flags.10?int edit_date:flags.15?int … = Message`
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub flags:           i32,
    pub id:              i32,
    pub from_id:         Option<i32>,
    pub to_id:           enums::Peer,
    pub fwd_from:        Option<enums::MessageFwdHeader>,
    pub via_bot_id:      Option<i32>,
    pub reply_to_msg_id: Option<i32>,
    pub date:            i32,
    pub message:         String,
    pub media:           Option<enums::MessageMedia>,
    pub entities:        Option<Vec<enums::MessageEntity>>,
    pub views:           Option<i32>,
    pub edit_date:       Option<i32>,
}

/// `messageService#9e19a1f6 flags:# out:flags.1?true … id:int from_id:flags.8?int to_id:Peer
/// reply_to_msg_id:flags.3?int date:int action:MessageAction = Message`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageService {
    pub flags:           i32,
    pub id:              i32,
    pub from_id:         Option<i32>,
    pub to_id:           enums::Peer,
    pub reply_to_msg_id: Option<i32>,
    pub date:            i32,
    pub action:          enums::MessageAction,
}

// ─── Message media ────────────────────────────────────────────────────────────

/// `messageMediaPhoto#3d8ce53d photo:Photo caption:string = MessageMedia`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaPhoto {
    pub photo:   enums::Photo,
    pub caption: String,
}

/// `messageMediaGeo#56e0d474 geo:GeoPoint = MessageMedia`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaGeo { pub geo: GeoPoint }

/// `messageMediaContact#5e7d2f39 phone_number:string first_name:string last_name:string user_id:int = MessageMedia`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaContact {
    pub phone_number: String,
    pub first_name:   String,
    pub last_name:    String,
    pub user_id:      i32,
}

/// `messageMediaDocument#f3e02ea8 document:Document caption:string = MessageMedia`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaDocument {
    pub document: enums::Document,
    pub caption:  String,
}

/// `messageMediaWebPage#a32dd600 webpage:WebPage = MessageMedia`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaWebPage { pub webpage: WebPage }

/// `messageMediaVenue#7912b71f geo:GeoPoint title:string address:string provider:string venue_id:string = MessageMedia`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageMediaVenue {
    pub geo:      GeoPoint,
    pub title:    String,
    pub address:  String,
    pub provider: String,
    pub venue_id: String,
}

// ─── Message entities ─────────────────────────────────────────────────────────

/// `messageEntityUnknown#bb92ba95 offset:int length:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityUnknown { pub offset: i32, pub length: i32 }

/// `messageEntityMention#fa04579d offset:int length:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityMention { pub offset: i32, pub length: i32 }

/// `messageEntityHashtag#6f635b0d offset:int length:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityHashtag { pub offset: i32, pub length: i32 }

/// `messageEntityBotCommand#6cef8ac7 offset:int length:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityBotCommand { pub offset: i32, pub length: i32 }

/// `messageEntityUrl#6ed02538 offset:int length:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityUrl { pub offset: i32, pub length: i32 }

/// `messageEntityEmail#64e475c2 offset:int length:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityEmail { pub offset: i32, pub length: i32 }

/// `messageEntityBold#bd610bc9 offset:int length:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityBold { pub offset: i32, pub length: i32 }

/// `messageEntityItalic#826f8b60 offset:int length:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityItalic { pub offset: i32, pub length: i32 }

/// `messageEntityCode#28a20571 offset:int length:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityCode { pub offset: i32, pub length: i32 }

/// `messageEntityPre#73924be0 offset:int length:int language:string = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityPre { pub offset: i32, pub length: i32, pub language: String }

/// `messageEntityTextUrl#76a6d327 offset:int length:int url:string = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityTextUrl { pub offset: i32, pub length: i32, pub url: String }

/// `messageEntityMentionName#352dca58 offset:int length:int user_id:int = MessageEntity`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntityMentionName { pub offset: i32, pub length: i32, pub user_id: i32 }

// ─── Message actions ──────────────────────────────────────────────────────────

/// `messageActionChatCreate#a6638b9a title:string users:Vector<int> = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatCreate { pub title: String, pub users: Vec<i32> }

/// `messageActionChatEditTitle#b5a1ce5a title:string = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatEditTitle { pub title: String }

/// `messageActionChatEditPhoto#7fcb13a8 photo:Photo = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatEditPhoto { pub photo: enums::Photo }

/// `messageActionChatAddUser#488a7337 users:Vector<int> = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatAddUser { pub users: Vec<i32> }

/// `messageActionChatDeleteUser#b2ae9b0c user_id:int = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatDeleteUser { pub user_id: i32 }

/// `messageActionChatJoinedByLink#f89cf5e8 inviter_id:int = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatJoinedByLink { pub inviter_id: i32 }

/// `messageActionChannelCreate#95d2ac92 title:string = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChannelCreate { pub title: String }

/// `messageActionChatMigrateTo#51bdb021 channel_id:int = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChatMigrateTo { pub channel_id: i32 }

/// `messageActionChannelMigrateFrom#b055eaee title:string chat_id:int = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionChannelMigrateFrom { pub title: String, pub chat_id: i32 }

/// `messageActionGameScore#92a72876 game_id:long score:int = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionGameScore { pub game_id: i64, pub score: i32 }

/// `messageActionPhoneCall#80e11a7f flags:# call_id:long reason:flags.0?PhoneCallDiscardReason duration:flags.1?int = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionPhoneCall {
    pub flags:    i32,
    pub call_id:  i64,
    pub duration: Option<i32>,
}

/// `messageActionPaymentSent#40699cd0 currency:string total_amount:long = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionPaymentSent { pub currency: String, pub total_amount: i64 }

/// `messageActionCustomAction#fae69f56 message:string = MessageAction`
#[derive(Clone, Debug, PartialEq)]
pub struct MessageActionCustomAction { pub message: String }

// ─── Updates ──────────────────────────────────────────────────────────────────

/// `updateShortSentMessage#11f1331c flags:# out:flags.1?true id:int pts:int pts_count:int date:int
/// media:flags.9?MessageMedia entities:flags.7?Vector<MessageEntity> = Updates`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateShortSentMessage {
    pub flags:     i32,
    pub id:        i32,
    pub pts:       i32,
    pub pts_count: i32,
    pub date:      i32,
    pub media:     Option<enums::MessageMedia>,
    pub entities:  Option<Vec<enums::MessageEntity>>,
}

/// `updates#74ae4240 updates:Vector<Update> users:Vector<User> chats:Vector<Chat> date:int seq:int = Updates`
///
/// The individual `Update`s are routed to the update stream by the transport
/// and are not carried into the response slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Updates {
    pub users: Vec<enums::User>,
    pub chats: Vec<enums::Chat>,
    pub date:  i32,
    pub seq:   i32,
}

/// `updatesCombined#725b04c3 updates:Vector<Update> users:Vector<User> chats:Vector<Chat> date:int seq_start:int seq:int = Updates`
#[derive(Clone, Debug, PartialEq)]
pub struct UpdatesCombined {
    pub users:     Vec<enums::User>,
    pub chats:     Vec<enums::Chat>,
    pub date:      i32,
    pub seq_start: i32,
    pub seq:       i32,
}

// ─── MTProto ──────────────────────────────────────────────────────────────────

/// `rpc_error#2144ca19 error_code:int error_message:string = RpcError`
#[derive(Clone, Debug, PartialEq)]
pub struct RpcError {
    pub error_code:    i32,
    pub error_message: String,
}

// ─── messages.* ───────────────────────────────────────────────────────────────

pub mod messages {
    use crate::enums;

    /// `messages.messages#8c718e87 messages:Vector<Message> chats:Vector<Chat> users:Vector<User> = messages.Messages`
    #[derive(Clone, Debug, PartialEq)]
    pub struct Messages {
        pub messages: Vec<enums::Message>,
        pub chats:    Vec<enums::Chat>,
        pub users:    Vec<enums::User>,
    }

    /// `messages.messagesSlice#b446ae3 count:int messages:Vector<Message> chats:Vector<Chat> users:Vector<User> = messages.Messages`
    #[derive(Clone, Debug, PartialEq)]
    pub struct MessagesSlice {
        pub count:    i32,
        pub messages: Vec<enums::Message>,
        pub chats:    Vec<enums::Chat>,
        pub users:    Vec<enums::User>,
    }

    /// `messages.channelMessages#99262e37 flags:# pts:int count:int messages:Vector<Message> chats:Vector<Chat> users:Vector<User> = messages.Messages`
    #[derive(Clone, Debug, PartialEq)]
    pub struct ChannelMessages {
        pub flags:    i32,
        pub pts:      i32,
        pub count:    i32,
        pub messages: Vec<enums::Message>,
        pub chats:    Vec<enums::Chat>,
        pub users:    Vec<enums::User>,
    }

    /// `messages.messagesNotModified#74535f21 count:int = messages.Messages`
    #[derive(Clone, Debug, PartialEq)]
    pub struct MessagesNotModified { pub count: i32 }

    /// `messages.chats#64ff9fd5 chats:Vector<Chat> = messages.Chats`
    #[derive(Clone, Debug, PartialEq)]
    pub struct Chats { pub chats: Vec<enums::Chat> }

    /// `messages.chatsSlice#9cd81144 count:int chats:Vector<Chat> = messages.Chats`
    #[derive(Clone, Debug, PartialEq)]
    pub struct ChatsSlice { pub count: i32, pub chats: Vec<enums::Chat> }

    /// `messages.chatFull#e5d7d19c full_chat:ChatFull chats:Vector<Chat> users:Vector<User> = messages.ChatFull`
    #[derive(Clone, Debug, PartialEq)]
    pub struct ChatFull {
        pub full_chat: enums::ChatFull,
        pub chats:     Vec<enums::Chat>,
        pub users:     Vec<enums::User>,
    }
}
