//! End-to-end flows through the game flow service: session creation, move
//! application, AI turn chaining and game-over teardown.

use std::sync::Arc;

use gambit::errors::domain::InfraErrorKind;
use gambit::test_support::{states, Outbound, RecordingChat, ScriptedEngine};
use gambit::{
    BotConfig, ChatPort, DomainError, EngineState, GameFlowService, InboundEvent, MessageNode,
    Participant, RulesEngine, Session, SessionDirectory, SessionId,
};

const ALICE: (&str, &str) = ("user-1", "Alice");
const BOB: (&str, &str) = ("user-2", "Bob");

struct Harness {
    directory: Arc<SessionDirectory>,
    engine: Arc<ScriptedEngine>,
    chat: Arc<RecordingChat>,
    service: GameFlowService,
}

fn harness() -> Harness {
    gambit_test_support::logging::init();
    let directory = Arc::new(SessionDirectory::new());
    let engine = Arc::new(ScriptedEngine::new());
    let chat = Arc::new(RecordingChat::new());
    let service = GameFlowService::new(
        BotConfig::default(),
        Arc::clone(&directory),
        Arc::clone(&engine) as Arc<dyn RulesEngine>,
        Arc::clone(&chat) as Arc<dyn ChatPort>,
    );
    Harness {
        directory,
        engine,
        chat,
        service,
    }
}

fn text_event(sender: (&str, &str), text: &str) -> InboundEvent {
    InboundEvent {
        tenant_id: "tenant-1".to_string(),
        conversation_id: "room-1".to_string(),
        sender: Participant::human(sender.0, sender.1),
        nodes: vec![MessageNode::Text {
            content: text.to_string(),
        }],
    }
}

fn event_with_mention(sender: (&str, &str), text: &str, mention: (&str, &str)) -> InboundEvent {
    let mut event = text_event(sender, text);
    event.nodes.push(MessageNode::Mention {
        contact: mention.0.to_string(),
        name: mention.1.to_string(),
    });
    event
}

#[tokio::test]
async fn start_vs_ai_renders_board_and_prompts_human() {
    let h = harness();
    h.engine.on_create(|participants| {
        Ok(states::created(
            "game-1",
            states::awaiting(participants, "user-1", "White to move"),
        ))
    });

    h.service.handle_event(text_event(ALICE, "play chess with AI")).await;

    assert_eq!(h.directory.session_count(), 1);
    assert_eq!(h.directory.entry_count(), 6);

    let outbound = h.chat.outbound();
    assert!(
        matches!(
            &outbound[0],
            Outbound::Posted { document, .. } if document.plain_text().contains("White to move")
        ),
        "first outbound should be the board post, got {outbound:?}"
    );
    assert!(matches!(
        &outbound[1],
        Outbound::Notice { recipient, document }
            if recipient == "user-1" && document.plain_text().contains("your move")
    ));
}

#[tokio::test]
async fn opening_ai_turns_chain_until_a_human_turn() {
    let h = harness();
    h.engine.on_create(|participants| {
        Ok(states::created(
            "game-1",
            states::awaiting_ai(participants, "White to move"),
        ))
    });
    // Two consecutive AI turns before the human is up.
    h.engine
        .on_ai_move(|session| Ok(states::awaiting_ai(&session.participants, "still thinking")));
    h.engine.on_ai_move(|session| {
        Ok(states::awaiting(
            &session.participants,
            "user-1",
            "Black to move",
        ))
    });

    h.service.handle_event(text_event(ALICE, "play chess vs computer")).await;

    assert_eq!(h.engine.ai_calls(), 2);
    let outbound = h.chat.outbound();
    // Initial post, one in-place update per AI move, then the human prompt.
    assert!(matches!(&outbound[0], Outbound::Posted { .. }));
    assert!(matches!(&outbound[1], Outbound::Updated { .. }));
    assert!(matches!(&outbound[2], Outbound::Updated { .. }));
    assert!(matches!(
        &outbound[3],
        Outbound::Notice { recipient, .. } if recipient == "user-1"
    ));
    assert_eq!(h.chat.last_rendered_text().unwrap(), "Black to move");
}

#[tokio::test]
async fn human_move_is_applied_and_rendered_in_place() {
    let h = harness();
    h.engine.on_create(|participants| {
        Ok(states::created(
            "game-1",
            states::awaiting(participants, "user-1", "White to move"),
        ))
    });
    h.engine
        .on_move(|session| Ok(states::awaiting_ai(&session.participants, "Black (AI) to move")));
    h.engine.on_ai_move(|session| {
        Ok(states::awaiting(
            &session.participants,
            "user-1",
            "White to move again",
        ))
    });

    h.service.handle_event(text_event(ALICE, "play chess with AI")).await;
    h.service.handle_event(text_event(ALICE, "e4")).await;

    assert_eq!(h.engine.moves_seen(), vec!["e4".to_string()]);

    let outbound = h.chat.outbound();
    let board_message_id = match &outbound[0] {
        Outbound::Posted { message_id, .. } => message_id.clone(),
        other => panic!("expected initial board post, got {other:?}"),
    };
    let updates: Vec<_> = outbound
        .iter()
        .filter_map(|out| match out {
            Outbound::Updated { message_id, .. } => Some(message_id.clone()),
            _ => None,
        })
        .collect();
    // One update for the human move, one for the AI reply, all in place.
    assert_eq!(updates, vec![board_message_id.clone(), board_message_id]);
    assert_eq!(h.chat.last_rendered_text().unwrap(), "White to move again");
}

#[tokio::test]
async fn game_over_removes_the_session() {
    let h = harness();
    h.engine.on_create(|participants| {
        Ok(states::created(
            "game-1",
            states::awaiting(participants, "user-1", "White to move"),
        ))
    });
    h.engine.on_move(|_| Ok(states::finished("Checkmate! Alice wins.")));

    h.service
        .handle_event(event_with_mention(ALICE, "play chess with", BOB))
        .await;
    assert_eq!(h.directory.session_count(), 1);

    h.service.handle_event(text_event(ALICE, "Qh5")).await;

    assert_eq!(h.directory.session_count(), 0);
    assert_eq!(h.directory.entry_count(), 0);
    assert!(h.chat.last_rendered_text().unwrap().contains("Checkmate"));

    // The former key now resolves to nothing; a follow-up move gets the
    // not-found guidance.
    h.service.handle_event(text_event(ALICE, "e4")).await;
    let outbound = h.chat.outbound();
    let last = outbound.last().unwrap();
    assert!(matches!(
        last,
        Outbound::Posted { document, .. }
            if document.plain_text().contains("could not find a running game")
    ));
}

#[tokio::test]
async fn duplicate_start_is_blocked_by_the_zero_match_guard() {
    let h = harness();
    h.engine.on_create(|participants| {
        Ok(states::created(
            "game-1",
            states::awaiting(participants, "user-1", "White to move"),
        ))
    });

    h.service.handle_event(text_event(ALICE, "play chess with AI")).await;
    h.service.handle_event(text_event(ALICE, "start chess vs AI")).await;

    assert_eq!(h.directory.session_count(), 1);
    let outbound = h.chat.outbound();
    let last = outbound.last().unwrap();
    assert!(
        matches!(
            last,
            Outbound::Posted { document, .. }
                if document.plain_text().contains("already have a game")
        ),
        "second start should surface the existing game, got {last:?}"
    );
}

#[tokio::test]
async fn engine_failure_surfaces_a_notice_and_leaves_state_unchanged() {
    let h = harness();
    h.engine.on_create(|participants| {
        Ok(states::created(
            "game-1",
            states::awaiting(participants, "user-1", "White to move"),
        ))
    });
    h.engine.on_move(|_| {
        Err(DomainError::infra(
            InfraErrorKind::RulesEngine,
            "engine unavailable",
        ))
    });

    h.service.handle_event(text_event(ALICE, "play chess with AI")).await;
    h.service.handle_event(text_event(ALICE, "e4")).await;

    // Session survives with its pre-failure state.
    assert_eq!(h.directory.session_count(), 1);
    let id = SessionId::new("game-1");
    let slot = h.directory.get(&id).unwrap();
    let session = slot.lock().await;
    assert_eq!(session.state.message, "White to move");

    let outbound = h.chat.outbound();
    let last = outbound.last().unwrap();
    assert!(matches!(
        last,
        Outbound::Posted { document, .. }
            if document.plain_text().contains("Something went wrong")
    ));
}

#[tokio::test]
async fn ai_failure_mid_chain_keeps_the_last_applied_state() {
    let h = harness();
    h.engine.on_create(|participants| {
        Ok(states::created(
            "game-1",
            states::awaiting(participants, "user-1", "White to move"),
        ))
    });
    h.engine
        .on_move(|session| Ok(states::awaiting_ai(&session.participants, "Black (AI) thinking")));
    h.engine
        .on_ai_move(|_| Err(DomainError::infra(InfraErrorKind::AiOracle, "oracle timed out")));

    h.service.handle_event(text_event(ALICE, "play chess with AI")).await;
    h.service.handle_event(text_event(ALICE, "e4")).await;

    assert_eq!(h.engine.ai_calls(), 1);

    // The session survives, holding the applied human move, and that state
    // was rendered before the chain broke.
    assert_eq!(h.directory.session_count(), 1);
    let slot = h.directory.get(&SessionId::new("game-1")).unwrap();
    assert_eq!(slot.lock().await.state.message, "Black (AI) thinking");
    assert_eq!(h.chat.last_rendered_text().unwrap(), "Black (AI) thinking");

    let outbound = h.chat.outbound();
    assert!(matches!(
        outbound.last().unwrap(),
        Outbound::Posted { document, .. }
            if document.plain_text().contains("Something went wrong")
    ));
}

#[tokio::test]
async fn runaway_ai_chain_trips_the_iteration_guard() {
    let h = harness();
    h.engine.on_create(|participants| {
        Ok(states::created(
            "game-1",
            states::awaiting_ai(participants, "thinking"),
        ))
    });
    for _ in 0..512 {
        h.engine
            .on_ai_move(|session| Ok(states::awaiting_ai(&session.participants, "still thinking")));
    }

    h.service.handle_event(text_event(ALICE, "play chess with AI")).await;

    // The chain aborts as a collaborator failure after 512 AI turns; the
    // session keeps its last applied state.
    assert_eq!(h.engine.ai_calls(), 512);
    assert_eq!(h.directory.session_count(), 1);
    let outbound = h.chat.outbound();
    assert!(matches!(
        outbound.last().unwrap(),
        Outbound::Posted { document, .. }
            if document.plain_text().contains("Something went wrong")
    ));
}

#[tokio::test]
async fn start_racing_a_session_created_during_the_engine_call_loses() {
    let h = harness();
    let directory = Arc::clone(&h.directory);
    h.engine.on_create(move |participants| {
        // A rival start for the same tuple completes while this one is
        // suspended at the engine call.
        directory
            .insert(Session {
                id: SessionId::new("game-rival"),
                tenant_id: "tenant-1".to_string(),
                conversation_id: "room-1".to_string(),
                participants: participants.to_vec(),
                kind: "chess".to_string(),
                state: EngineState {
                    game_over: false,
                    message: "White to move".to_string(),
                    next_players: vec![0],
                    board: serde_json::Value::Null,
                },
                last_message_id: None,
            })
            .unwrap();
        Ok(states::created(
            "game-1",
            states::awaiting(participants, "user-1", "White to move"),
        ))
    });

    h.service.handle_event(text_event(ALICE, "play chess with AI")).await;

    // The rival holds the claim key, so this start's insert loses cleanly.
    assert_eq!(h.directory.session_count(), 1);
    assert!(h.directory.get(&SessionId::new("game-rival")).is_some());
    assert!(h.directory.get(&SessionId::new("game-1")).is_none());
    let outbound = h.chat.outbound();
    assert!(matches!(
        outbound.last().unwrap(),
        Outbound::Posted { document, .. }
            if document.plain_text().contains("already have a game")
    ));
}
