//! Human move handling: session resolution and turn validation.

use tracing::{debug, info};

use super::GameFlowService;
use crate::chat::InboundEvent;
use crate::domain::{SessionId, AI_CONTACT};
use crate::errors::domain::{ConflictKind, NotFoundKind, ValidationKind};
use crate::errors::DomainError;

impl GameFlowService {
    /// Apply a move intent from the event sender.
    ///
    /// Resolution uses the sender's identity, widened with every mentioned
    /// participant and with the AI sentinel when the command hinted at the
    /// AI opponent, plus the requested kind. Mentioning the opponent is how
    /// a player in several games narrows an ambiguous move to one of them.
    /// Zero matches surface as not-found, more than one as ambiguous; the
    /// directory never guesses among candidates.
    pub(super) async fn handle_move(
        &self,
        event: &InboundEvent,
        kind: &str,
        move_text: &str,
        vs_ai: bool,
    ) -> Result<(), DomainError> {
        let mut contacts = vec![event.sender.contact.clone()];
        for mention in event.mentions(&self.config.bot_contact) {
            contacts.push(mention.contact);
        }
        if vs_ai {
            contacts.push(AI_CONTACT.to_string());
        }

        let candidates = self.directory.lookup(
            &event.tenant_id,
            &event.conversation_id,
            &contacts,
            Some(kind),
        );
        let session_id: SessionId = match candidates.as_slice() {
            [] => {
                return Err(DomainError::not_found(
                    NotFoundKind::Session,
                    format!("no {kind} session for {}", event.sender.contact),
                ))
            }
            [only] => only.clone(),
            many => {
                return Err(DomainError::conflict(
                    ConflictKind::AmbiguousSession,
                    format!("{} candidate sessions match", many.len()),
                ))
            }
        };

        let slot = self.directory.get(&session_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Session,
                format!("session {session_id} vanished during resolution"),
            )
        })?;

        // Serializes this chain against any other in-flight mutation of the
        // same session, held until the chain completes or fails.
        let mut session = slot.lock().await;

        // The session may have ended while we waited on the slot.
        if session.state.game_over {
            return Err(DomainError::not_found(
                NotFoundKind::Session,
                format!("session {session_id} already ended"),
            ));
        }

        if !session.is_on_turn(&event.sender.contact) {
            debug!(
                session_id = %session.id,
                sender = %event.sender.contact,
                "rejecting out-of-turn move"
            );
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                "It is not your turn.",
            ));
        }

        let state = self.engine.perform_move(&session, move_text).await?;
        session.state = state;
        info!(
            session_id = %session.id,
            sender = %event.sender.contact,
            "move applied"
        );

        self.render(&mut session).await?;
        self.advance(&mut session).await
    }
}
