use prism_tl_types::{Object, Raw, RemoteCall, Request, Variant, enums, functions, types};

fn raw(id: u32) -> Raw {
    Raw { constructor_id: id, body: vec![] }
}

// ── Variant names ─────────────────────────────────────────────────────────────

#[test]
fn names_follow_schema() {
    assert_eq!(enums::MessageMedia::Empty.variant_name(), "messageMediaEmpty");
    assert_eq!(enums::UserStatus::LastWeek.variant_name(), "userStatusLastWeek");
    assert_eq!(enums::MessageAction::PinMessage.variant_name(), "messageActionPinMessage");
    let bold = enums::MessageEntity::Bold(types::MessageEntityBold { offset: 0, length: 1 });
    assert_eq!(bold.variant_name(), "messageEntityBold");
}

#[test]
fn raw_variants_name_themselves_raw() {
    assert_eq!(enums::Message::Raw(raw(0xdeadbeef)).variant_name(), "raw");
    assert_eq!(enums::User::Raw(raw(1)).variant_name(), "raw");
}

#[test]
fn object_name_is_inner_constructor() {
    let obj = Object::Messages(enums::messages::Messages::NotModified(
        types::messages::MessagesNotModified { count: 3 },
    ));
    assert_eq!(obj.variant_name(), "messages.messagesNotModified");

    let err = Object::RpcError(types::RpcError { error_code: 400, error_message: "PEER_ID_INVALID".into() });
    assert_eq!(err.variant_name(), "rpc_error");
}

// ── Object narrowing ──────────────────────────────────────────────────────────

#[test]
fn try_from_object_matches_declared_return() {
    let chats = enums::messages::Chats::Chats(types::messages::Chats { chats: vec![] });
    let obj: Object = chats.clone().into();
    let back = <functions::messages::GetChats as RemoteCall>::Return::try_from(obj).unwrap();
    assert_eq!(back, chats);
}

#[test]
fn try_from_object_hands_back_mismatch() {
    let obj = Object::Raw(raw(0x1234));
    let err = enums::messages::Chats::try_from(obj.clone()).unwrap_err();
    assert_eq!(err, obj);
}

// ── Requests ──────────────────────────────────────────────────────────────────

#[test]
fn functions_convert_into_request() {
    let req: Request = functions::messages::GetFullChat { chat_id: 7 }.into();
    assert_eq!(req.variant_name(), "messages.getFullChat");
    assert!(matches!(req, Request::GetFullChat(functions::messages::GetFullChat { chat_id: 7 })));
}

#[test]
fn updates_exposes_chats_only_for_full_containers() {
    let chat = enums::Chat::Empty(types::ChatEmpty { id: 9 });
    let full = enums::Updates::Updates(types::Updates {
        users: vec![], chats: vec![chat.clone()], date: 0, seq: 0,
    });
    assert_eq!(full.chats(), &[chat]);
    assert!(enums::Updates::TooLong.chats().is_empty());
}

#[test]
fn raw_id_only_for_raw_variants() {
    assert_eq!(enums::MessageMedia::Raw(raw(0xcafe)).raw_id(), Some(0xcafe));
    assert_eq!(enums::MessageMedia::Empty.raw_id(), None);
    assert_eq!(enums::InputPeer::PeerSelf.raw_id(), None);
    assert_eq!(Object::Raw(raw(7)).raw_id(), Some(7));
    assert_eq!(Object::Chats(enums::messages::Chats::Raw(raw(8))).raw_id(), Some(8));
}
