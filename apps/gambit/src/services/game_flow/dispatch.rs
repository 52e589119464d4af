//! Per-event entry point: interpret the command and route the intent.

use tracing::{debug, error, warn};

use super::GameFlowService;
use crate::chat::document;
use crate::chat::InboundEvent;
use crate::commands;
use crate::domain::Intent;
use crate::errors::domain::ValidationKind;
use crate::errors::DomainError;

impl GameFlowService {
    /// Handle one inbound chat event end to end.
    ///
    /// Never returns an error: every failure raised while resolving or
    /// advancing a session is caught here and converted to a single
    /// user-visible notice. Contract violations additionally log at error
    /// level but still only halt this event, not the process.
    pub async fn handle_event(&self, event: InboundEvent) {
        if let Err(err) = self.dispatch(&event).await {
            match &err {
                DomainError::Validation(ValidationKind::MissingField, detail) => {
                    error!(
                        conversation_id = %event.conversation_id,
                        detail,
                        "directory contract violation while handling event"
                    );
                }
                _ => warn!(
                    conversation_id = %event.conversation_id,
                    error = %err,
                    "event handling failed"
                ),
            }
            let notice = document::notice_for(&err);
            if let Err(send_err) = self
                .chat
                .post_message(&event.tenant_id, &event.conversation_id, notice)
                .await
            {
                error!(error = %send_err, "failed to deliver failure notice");
            }
        }
    }

    async fn dispatch(&self, event: &InboundEvent) -> Result<(), DomainError> {
        let tokens = event.tokens();
        let mentions = event.mentions(&self.config.bot_contact);
        debug!(
            conversation_id = %event.conversation_id,
            sender = %event.sender.contact,
            token_count = tokens.len(),
            mention_count = mentions.len(),
            "interpreting command"
        );

        match commands::parse(&tokens, &mentions, &self.config)? {
            None => {
                // No recognizable command; answer with usage guidance.
                self.chat
                    .post_message(
                        &event.tenant_id,
                        &event.conversation_id,
                        document::usage(&self.config),
                    )
                    .await?;
                Ok(())
            }
            Some(Intent::Start { kind, opponent }) => {
                self.start_session(event, kind, opponent).await
            }
            Some(Intent::Move { kind, text, vs_ai }) => {
                self.handle_move(event, &kind, &text, vs_ai).await
            }
        }
    }
}
