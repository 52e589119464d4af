//! Outbound side effects per transition: board renders and turn prompts.

use tracing::debug;

use super::GameFlowService;
use crate::chat::document;
use crate::domain::Session;
use crate::errors::DomainError;

impl GameFlowService {
    /// Render the session's current state: exactly one board/status update
    /// per applied move, in place when a previous render exists, otherwise
    /// as a new message whose id is kept for later updates.
    pub(super) async fn render(&self, session: &mut Session) -> Result<(), DomainError> {
        let doc = document::board_update(session);
        match session.last_message_id.as_deref() {
            Some(message_id) => {
                self.chat.update_message(message_id, doc).await?;
                debug!(session_id = %session.id, message_id, "board updated in place");
            }
            None => {
                let message_id = self
                    .chat
                    .post_message(&session.tenant_id, &session.conversation_id, doc)
                    .await?;
                debug!(session_id = %session.id, message_id, "board posted");
                session.last_message_id = Some(message_id);
            }
        }
        Ok(())
    }

    /// Notify the human participant(s) on turn.
    pub(super) async fn prompt_turn(&self, session: &Session) -> Result<(), DomainError> {
        let doc = document::turn_prompt(session);
        for participant in session.next_participants() {
            self.chat
                .send_notice(
                    &session.tenant_id,
                    &session.conversation_id,
                    participant,
                    doc.clone(),
                )
                .await?;
        }
        Ok(())
    }
}
