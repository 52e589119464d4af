//! Property tests for the session directory index invariants.

use proptest::collection::btree_set;
use proptest::prelude::*;

use super::{participant_signature, SessionDirectory};
use crate::domain::{Participant, Session, SessionId};
use crate::engine::EngineState;

fn contact_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}-[0-9]{1,3}"
}

fn session_for(contacts: &[String], kind: &str) -> Session {
    Session {
        id: SessionId::new("game-1"),
        tenant_id: "tenant-1".to_string(),
        conversation_id: "room-1".to_string(),
        participants: contacts
            .iter()
            .map(|c| Participant::human(c.clone(), c.clone()))
            .collect(),
        kind: kind.to_string(),
        state: EngineState {
            game_over: false,
            message: String::new(),
            next_players: vec![0],
            board: serde_json::Value::Null,
        },
        last_message_id: None,
    }
}

proptest! {
    /// Signature is order-insensitive and idempotent over duplicates.
    #[test]
    fn signature_is_canonical(contacts in btree_set(contact_strategy(), 1..6)) {
        let sorted: Vec<String> = contacts.iter().cloned().collect();
        let mut reversed = sorted.clone();
        reversed.reverse();
        let mut doubled = sorted.clone();
        doubled.extend(sorted.clone());

        let canonical = participant_signature(&sorted);
        prop_assert_eq!(&canonical, &participant_signature(&reversed));
        prop_assert_eq!(&canonical, &participant_signature(&doubled));
    }

    /// A live session owns exactly 2 * (participants + 1) index entries and
    /// an insert/remove round trip leaves the directory empty.
    #[test]
    fn insert_remove_round_trip(contacts in btree_set(contact_strategy(), 2..6)) {
        let contacts: Vec<String> = contacts.into_iter().collect();
        let directory = SessionDirectory::new();
        directory.insert(session_for(&contacts, "chess")).unwrap();

        prop_assert_eq!(directory.entry_count(), 2 * (contacts.len() + 1));
        prop_assert_eq!(
            directory.lookup("tenant-1", "room-1", &contacts, Some("chess")),
            vec![SessionId::new("game-1")]
        );
        for contact in &contacts {
            prop_assert_eq!(
                directory.lookup("tenant-1", "room-1", std::slice::from_ref(contact), None),
                vec![SessionId::new("game-1")]
            );
        }

        directory.remove("tenant-1", "room-1", &contacts, "chess", &SessionId::new("game-1"));
        prop_assert_eq!(directory.entry_count(), 0);
        prop_assert_eq!(directory.session_count(), 0);
        prop_assert!(directory
            .lookup("tenant-1", "room-1", &contacts, Some("chess"))
            .is_empty());
    }
}
