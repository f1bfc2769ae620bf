use std::sync::Arc;
use std::time::Duration;

use prism_client::{
    ChatKind, Decoder, Family, Gateway, GatewayConfig, InvocationError, OutboundQueue,
    PendingCall, RecordingObserver,
};
use prism_tl_types::{Object, Raw, Request, enums, types};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn recording_gateway() -> (Gateway, OutboundQueue, Arc<RecordingObserver>) {
    init_logging();
    let rec = Arc::new(RecordingObserver::default());
    let (gw, queue) = Gateway::with_decoder(
        GatewayConfig::default(),
        Decoder::with_observer(rec.clone()),
    );
    (gw, queue, rec)
}

/// Answer exactly one call with whatever `reply` builds from its request.
fn answer_once<F>(mut queue: OutboundQueue, reply: F) -> tokio::task::JoinHandle<Request>
where
    F: FnOnce(&Request) -> Object + Send + 'static,
{
    tokio::spawn(async move {
        let PendingCall { request, slot } = queue.next().await.expect("queue closed");
        slot.fill(reply(&request));
        request
    })
}

fn rpc_error(code: i32, message: &str) -> Object {
    Object::RpcError(types::RpcError { error_code: code, error_message: message.into() })
}

fn text(id: i32) -> enums::Message {
    enums::Message::Message(types::Message {
        flags:           0,
        id,
        from_id:         Some(1),
        to_id:           enums::Peer::User(types::PeerUser { user_id: 2 }),
        fwd_from:        None,
        via_bot_id:      None,
        reply_to_msg_id: None,
        date:            id,
        message:         format!("m{id}"),
        media:           None,
        entities:        None,
        views:           None,
        edit_date:       None,
    })
}

fn basic_chat(id: i32, title: &str) -> enums::Chat {
    enums::Chat::Chat(types::Chat {
        flags: 0, id, title: title.into(), participants_count: 3, date: 0, version: 1,
    })
}

fn five_with_one_raw() -> Vec<enums::Message> {
    vec![
        text(1),
        text(2),
        enums::Message::Raw(Raw { constructor_id: 1, body: vec![] }),
        text(4),
        text(5),
    ]
}

// ── get_history ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn history_slice_reports_server_count() {
    let (gw, queue, rec) = recording_gateway();
    let server = answer_once(queue, |_| {
        Object::Messages(enums::messages::Messages::Slice(types::messages::MessagesSlice {
            count:    250,
            messages: five_with_one_raw(),
            chats:    vec![],
            users:    vec![],
        }))
    });

    let (messages, total) = gw.get_history(enums::InputPeer::PeerSelf, 5, 10, 20).await;
    let ids: Vec<_> = messages.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 5]);
    assert_eq!(total, 250);
    assert_eq!(rec.take().iter().map(|e| e.family).collect::<Vec<_>>(), vec![Family::Message]);

    match server.await.unwrap() {
        Request::GetHistory(req) => {
            assert_eq!((req.limit, req.min_id, req.max_id), (5, 10, 20));
            assert_eq!((req.offset_id, req.offset_date, req.add_offset), (0, 0, 0));
        }
        other => panic!("unexpected request {other:?}"),
    }
}

#[tokio::test]
async fn history_without_count_reports_decoded_length() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| {
        Object::Messages(enums::messages::Messages::Messages(types::messages::Messages {
            messages: five_with_one_raw(),
            chats:    vec![],
            users:    vec![],
        }))
    });

    let (messages, total) = gw.get_history(enums::InputPeer::PeerSelf, 5, 0, 0).await;
    assert_eq!(messages.len(), 4);
    assert_eq!(total, 4);
}

#[tokio::test]
async fn history_failure_is_empty() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| rpc_error(400, "PEER_ID_INVALID"));

    let (messages, total) = gw.get_history(enums::InputPeer::PeerSelf, 5, 0, 0).await;
    assert!(messages.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
async fn history_channel_messages_reports_server_count() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| {
        Object::Messages(enums::messages::Messages::ChannelMessages(types::messages::ChannelMessages {
            flags:    0,
            pts:      1,
            count:    99,
            messages: five_with_one_raw(),
            chats:    vec![],
            users:    vec![],
        }))
    });

    let (messages, total) = gw.get_history(enums::InputPeer::PeerSelf, 5, 0, 0).await;
    assert_eq!(messages.len(), 4);
    assert_eq!(total, 99);
}

#[tokio::test]
async fn history_not_modified_keeps_count_without_messages() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| {
        Object::Messages(enums::messages::Messages::NotModified(
            types::messages::MessagesNotModified { count: 5 },
        ))
    });

    let (messages, total) = gw.get_history(enums::InputPeer::PeerSelf, 5, 0, 0).await;
    assert!(messages.is_empty());
    assert_eq!(total, 5);
}

#[tokio::test]
async fn history_raw_container_is_empty() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| {
        Object::Messages(enums::messages::Messages::Raw(Raw { constructor_id: 3, body: vec![] }))
    });
    assert_eq!(gw.get_history(enums::InputPeer::PeerSelf, 5, 0, 0).await.1, 0);

    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| Object::Raw(Raw { constructor_id: 4, body: vec![] }));
    let (messages, total) = gw.get_history(enums::InputPeer::PeerSelf, 5, 0, 0).await;
    assert!(messages.is_empty());
    assert_eq!(total, 0);
}

// ── error surfacing ───────────────────────────────────────────────────────────

#[tokio::test]
async fn get_chats_surfaces_rpc_error() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| rpc_error(400, "CHAT_ID_INVALID"));

    match gw.get_chats(&[1]).await {
        Err(InvocationError::Rpc(e)) => {
            assert_eq!(e.code, 400);
            assert_eq!(e.name, "CHAT_ID_INVALID");
            assert_eq!(e.message, "CHAT_ID_INVALID");
        }
        other => panic!("expected rpc error, got {other:?}"),
    }
}

#[tokio::test]
async fn get_chats_decodes_and_skips_empty() {
    let (gw, queue, _) = recording_gateway();
    let server = answer_once(queue, |_| {
        Object::Chats(enums::messages::Chats::Chats(types::messages::Chats {
            chats: vec![
                basic_chat(1, "one"),
                enums::Chat::Empty(types::ChatEmpty { id: 2 }),
                basic_chat(3, "three"),
            ],
        }))
    });

    let chats = gw.get_chats(&[1, 2, 3]).await.unwrap();
    let titles: Vec<_> = chats.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "three"]);
    assert!(chats.iter().all(|c| c.kind == ChatKind::Chat));

    match server.await.unwrap() {
        Request::GetChats(req) => assert_eq!(req.id, vec![1, 2, 3]),
        other => panic!("unexpected request {other:?}"),
    }
}

#[tokio::test]
async fn get_chats_accepts_slice() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| {
        Object::Chats(enums::messages::Chats::Slice(types::messages::ChatsSlice {
            count: 40,
            chats: vec![basic_chat(1, "one"), basic_chat(2, "two")],
        }))
    });

    let ids: Vec<_> = gw.get_chats(&[1, 2]).await.unwrap().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn get_chats_raw_is_unexpected() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| {
        Object::Chats(enums::messages::Chats::Raw(Raw { constructor_id: 5, body: vec![] }))
    });
    assert!(matches!(gw.get_chats(&[1]).await, Err(InvocationError::Unexpected("raw"))));
}

#[tokio::test]
async fn send_message_surfaces_rpc_error() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| rpc_error(420, "FLOOD_WAIT_30"));

    let err = gw.send_message("hi", enums::InputPeer::PeerSelf, None).await.unwrap_err();
    assert_eq!(err.flood_wait_seconds(), Some(30));
}

#[tokio::test]
async fn send_message_builds_request() {
    let (gw, queue, _) = recording_gateway();
    let server = answer_once(queue, |_| Object::Updates(enums::Updates::TooLong));

    let peer = enums::InputPeer::Chat(types::InputPeerChat { chat_id: 7 });
    let ack = gw.send_message("hello", peer.clone(), Some(3)).await.unwrap();
    assert_eq!(ack, enums::Updates::TooLong);

    match server.await.unwrap() {
        Request::SendMessage(req) => {
            assert_eq!(req.message, "hello");
            assert_eq!(req.peer, peer);
            assert_eq!(req.reply_to_msg_id, Some(3));
            assert!(req.entities.is_none());
        }
        other => panic!("unexpected request {other:?}"),
    }
}

#[tokio::test]
async fn import_invite_returns_first_chat() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| {
        Object::Updates(enums::Updates::Updates(types::Updates {
            users: vec![],
            chats: vec![basic_chat(9, "joined"), basic_chat(10, "other")],
            date:  0,
            seq:   0,
        }))
    });

    let chat = gw.import_chat_invite("AbCd").await.unwrap();
    assert_eq!((chat.id, chat.title.as_str()), (9, "joined"));
}

#[tokio::test]
async fn import_invite_failure_is_none() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| rpc_error(400, "INVITE_HASH_EXPIRED"));
    assert!(gw.import_chat_invite("gone").await.is_none());
}

#[tokio::test]
async fn full_chat_failure_is_default() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| rpc_error(400, "CHAT_ID_INVALID"));

    let chat = gw.get_full_chat(5).await;
    assert_eq!(chat, Default::default());
}

#[tokio::test]
async fn full_chat_merges_about() {
    let (gw, queue, _) = recording_gateway();
    answer_once(queue, |_| {
        Object::ChatFull(enums::messages::ChatFull::ChatFull(types::messages::ChatFull {
            full_chat: enums::ChatFull::Full(types::ChatFull { id: 5, about: "rules".into() }),
            chats:     vec![basic_chat(5, "five")],
            users:     vec![],
        }))
    });

    let chat = gw.get_full_chat(5).await;
    assert_eq!(chat.title, "five");
    assert_eq!(chat.about, "rules");
    assert_eq!(chat.participants_count, 3);
}

// ── correlation ───────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_calls_each_get_their_own_response() {
    init_logging();
    const N: i32 = 16;
    let (gw, mut queue) = Gateway::new(GatewayConfig::default());

    // Collect every call first, then answer them in reverse order with
    // staggered delays, so no response arrives in request order.
    let transport = tokio::spawn(async move {
        let mut calls = Vec::new();
        while calls.len() < N as usize {
            calls.push(queue.next().await.expect("queue closed"));
        }
        for (i, call) in calls.into_iter().rev().enumerate() {
            let chat_id = match &call.request {
                Request::GetFullChat(req) => req.chat_id,
                other => panic!("unexpected request {other:?}"),
            };
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis((i as u64 * 7) % 11)).await;
                call.respond(Object::ChatFull(enums::messages::ChatFull::ChatFull(
                    types::messages::ChatFull {
                        full_chat: enums::ChatFull::Full(types::ChatFull {
                            id:    chat_id,
                            about: format!("about {chat_id}"),
                        }),
                        chats: vec![],
                        users: vec![],
                    },
                )));
            });
        }
    });

    let callers: Vec<_> = (0..N)
        .map(|id| {
            let gw = gw.clone();
            tokio::spawn(async move { (id, gw.get_full_chat(id).await) })
        })
        .collect();

    for caller in callers {
        let (id, chat) = caller.await.unwrap();
        assert_eq!(chat.id, id);
        assert_eq!(chat.about, format!("about {id}"));
    }
    transport.await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn timed_out_call_does_not_block_later_ones() {
    init_logging();
    let (gw, mut queue) = Gateway::new(
        GatewayConfig::default().call_timeout(Some(Duration::from_secs(1))),
    );

    let err = gw.get_chats(&[1]).await.unwrap_err();
    assert!(matches!(err, InvocationError::Timeout(_)));
    let stale = queue.try_next().unwrap();

    let next = gw.clone();
    let pending = tokio::spawn(async move { next.get_chats(&[2]).await });
    let fresh = queue.next().await.unwrap();

    assert!(!stale.respond(rpc_error(500, "LATE")));
    assert!(fresh.respond(Object::Chats(enums::messages::Chats::Chats(types::messages::Chats {
        chats: vec![basic_chat(2, "two")],
    }))));

    let chats = pending.await.unwrap().unwrap();
    assert_eq!(chats.len(), 1);
    assert_eq!(chats[0].id, 2);
}
