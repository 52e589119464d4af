//! Session record and turn-phase derivation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::participant::Participant;
use crate::engine::EngineState;

/// Opaque session identifier assigned by the rules-engine collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whose action the session is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingHuman,
    AwaitingAi,
    /// Terminal; the session is removed from the directory on entry.
    GameOver,
}

/// One in-progress game between an ordered set of participants.
///
/// Owned exclusively by the session directory for the duration of the game
/// and mutated only by the turn coordinator and lifecycle manager, always
/// under the directory's per-session lock.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub tenant_id: String,
    pub conversation_id: String,
    /// Slot order matches the rules-engine player slots.
    pub participants: Vec<Participant>,
    pub kind: String,
    /// Latest state returned by the rules engine.
    pub state: EngineState,
    /// Last rendered board message, for in-place updates.
    pub last_message_id: Option<String>,
}

impl Session {
    /// Participants whose turn it is, translated from the engine's
    /// next-player slot indices. Out-of-range indices are ignored.
    pub fn next_participants(&self) -> Vec<&Participant> {
        self.state
            .next_players
            .iter()
            .filter_map(|&slot| self.participants.get(slot))
            .collect()
    }

    /// Whether the given contact may act on the current turn.
    pub fn is_on_turn(&self, contact: &str) -> bool {
        self.next_participants()
            .iter()
            .any(|participant| participant.contact == contact)
    }

    /// Derive the turn phase from the engine state: game-over wins, then any
    /// AI sentinel among the next slots means the AI must act.
    pub fn phase(&self) -> TurnPhase {
        if self.state.game_over {
            return TurnPhase::GameOver;
        }
        if self.next_participants().iter().any(|p| p.is_ai()) {
            TurnPhase::AwaitingAi
        } else {
            TurnPhase::AwaitingHuman
        }
    }

    /// Identities of all participants, in slot order.
    pub fn contacts(&self) -> Vec<String> {
        self.participants
            .iter()
            .map(|p| p.contact.clone())
            .collect()
    }
}
