//! Session creation and termination.

use rand::seq::SliceRandom;
use tracing::info;

use super::GameFlowService;
use crate::chat::InboundEvent;
use crate::domain::{Opponent, Participant, Session};
use crate::errors::domain::ConflictKind;
use crate::errors::DomainError;

impl GameFlowService {
    /// Create a session for the sender against the designated opponent.
    ///
    /// Guarded twice: the zero-match lookup here rejects a duplicate start
    /// before the engine call, and the directory's insert re-claims the
    /// full-set-plus-kind key afterwards, so a rival start that completed
    /// while this one was suspended at the engine still wins alone. At most
    /// one active session per conversation, participant set and kind. The
    /// participant order is shuffled before the engine assigns player
    /// slots, so which side each player gets is random.
    pub(super) async fn start_session(
        &self,
        event: &InboundEvent,
        kind: String,
        opponent: Opponent,
    ) -> Result<(), DomainError> {
        let opponent = match opponent {
            Opponent::Ai => Participant::ai(self.config.ai_name.clone()),
            Opponent::Human(participant) => participant,
        };
        let mut participants = vec![event.sender.clone(), opponent];
        participants.shuffle(&mut rand::rng());

        let contacts: Vec<String> = participants.iter().map(|p| p.contact.clone()).collect();
        let existing = self.directory.lookup(
            &event.tenant_id,
            &event.conversation_id,
            &contacts,
            Some(&kind),
        );
        if !existing.is_empty() {
            return Err(DomainError::conflict(
                ConflictKind::SessionExists,
                format!(
                    "session {} is already active for this participant set and kind",
                    existing[0]
                ),
            ));
        }

        let created = self.engine.create_game(&kind, &participants).await?;
        info!(
            session_id = %created.id,
            conversation_id = %event.conversation_id,
            kind = %kind,
            "game created"
        );

        let session = Session {
            id: created.id,
            tenant_id: event.tenant_id.clone(),
            conversation_id: event.conversation_id.clone(),
            participants,
            kind,
            state: created.state,
            last_message_id: None,
        };
        let slot = self.directory.insert(session)?;

        // Hold the slot for the initial render and any opening AI turns.
        let mut session = slot.lock().await;
        self.render(&mut session).await?;
        self.advance(&mut session).await
    }

    /// Single removal entry point, called only from the game-over
    /// transition: deletes every index entry the session owns plus its
    /// primary record.
    pub(super) fn end_session(&self, session: &Session) {
        self.directory.remove(
            &session.tenant_id,
            &session.conversation_id,
            &session.contacts(),
            &session.kind,
            &session.id,
        );
        info!(session_id = %session.id, "session ended");
    }
}
