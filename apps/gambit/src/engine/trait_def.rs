//! Rules engine trait definition.

use async_trait::async_trait;

use crate::domain::{Participant, Session, SessionId};
use crate::engine::EngineState;
use crate::errors::DomainError;

/// Result of creating a game with the rules engine.
#[derive(Debug, Clone)]
pub struct CreatedGame {
    /// Engine-assigned session identifier.
    pub id: SessionId,
    /// Initial state, including the first next-player slots.
    pub state: EngineState,
}

/// External collaborator enforcing game legality and reporting turn and
/// state transitions. All calls may fail with
/// `DomainError::Infra(InfraErrorKind::RulesEngine, ..)`; there is no
/// partial-success state, so a failed call leaves the session untouched.
#[async_trait]
pub trait RulesEngine: Send + Sync {
    /// Create a game of `kind` for the ordered participant slots.
    async fn create_game(
        &self,
        kind: &str,
        participants: &[Participant],
    ) -> Result<CreatedGame, DomainError>;

    /// Apply a free-text move for the session and return the updated state.
    async fn perform_move(
        &self,
        session: &Session,
        move_text: &str,
    ) -> Result<EngineState, DomainError>;

    /// Ask the AI oracle for a move and apply it, returning the updated
    /// state. Fails with an external-service error when no move comes back.
    async fn perform_ai_move(&self, session: &Session) -> Result<EngineState, DomainError>;
}
