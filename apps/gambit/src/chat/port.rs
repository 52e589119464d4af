//! Outbound chat delivery port.

use async_trait::async_trait;

use crate::chat::Document;
use crate::domain::Participant;
use crate::errors::DomainError;

/// Outbound requests the core makes of the chat platform. Failures are
/// `DomainError::Infra(InfraErrorKind::ChatPlatform, ..)`.
#[async_trait]
pub trait ChatPort: Send + Sync {
    /// Post a new message to a conversation; returns the platform message id
    /// so later board updates can happen in place.
    async fn post_message(
        &self,
        tenant_id: &str,
        conversation_id: &str,
        document: Document,
    ) -> Result<String, DomainError>;

    /// Replace the content of an existing message.
    async fn update_message(
        &self,
        message_id: &str,
        document: Document,
    ) -> Result<(), DomainError>;

    /// Send a targeted notice addressed to one participant of a
    /// conversation.
    async fn send_notice(
        &self,
        tenant_id: &str,
        conversation_id: &str,
        recipient: &Participant,
        document: Document,
    ) -> Result<(), DomainError>;
}
