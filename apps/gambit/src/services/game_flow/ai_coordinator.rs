//! AI move agent: drives the session forward after an applied state.

use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::{Session, TurnPhase};
use crate::errors::domain::InfraErrorKind;
use crate::errors::DomainError;

impl GameFlowService {
    /// Advance a session until a human turn or game over.
    ///
    /// Chains through consecutive AI turns (AI vs AI reaches game over in
    /// one chain), rendering once per applied AI move. The caller already
    /// rendered the state it applied. An oracle failure aborts the chain
    /// with the session state left at the last applied move.
    ///
    /// The iteration guard only trips when the engine keeps reporting an AI
    /// turn without ever finishing, which indicates a collaborator bug.
    pub(super) async fn advance(&self, session: &mut Session) -> Result<(), DomainError> {
        const MAX_AI_TURNS: usize = 512;

        for _turn in 0..MAX_AI_TURNS {
            match session.phase() {
                TurnPhase::GameOver => {
                    info!(session_id = %session.id, "game over");
                    self.end_session(session);
                    return Ok(());
                }
                TurnPhase::AwaitingHuman => {
                    self.prompt_turn(session).await?;
                    return Ok(());
                }
                TurnPhase::AwaitingAi => {
                    debug!(session_id = %session.id, "requesting AI move");
                    let state = self.engine.perform_ai_move(session).await?;
                    session.state = state;
                    self.render(session).await?;
                }
            }
        }

        Err(DomainError::infra(
            InfraErrorKind::RulesEngine,
            format!("AI turn chain exceeded {MAX_AI_TURNS} turns for session {}", session.id),
        ))
    }
}
