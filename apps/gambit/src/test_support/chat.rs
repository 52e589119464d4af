//! Recording chat port: captures every outbound request for assertions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::chat::{ChatPort, Document};
use crate::domain::Participant;
use crate::errors::DomainError;

/// One captured outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Posted {
        conversation_id: String,
        message_id: String,
        document: Document,
    },
    Updated {
        message_id: String,
        document: Document,
    },
    Notice {
        recipient: String,
        document: Document,
    },
}

/// Chat-platform double that records requests and mints message ids.
#[derive(Default)]
pub struct RecordingChat {
    log: Mutex<Vec<Outbound>>,
    next_id: AtomicUsize,
}

impl RecordingChat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything sent so far, in order.
    pub fn outbound(&self) -> Vec<Outbound> {
        self.log.lock().unwrap().clone()
    }

    /// Text content of the most recent posted or updated document.
    pub fn last_rendered_text(&self) -> Option<String> {
        self.log.lock().unwrap().iter().rev().find_map(|out| match out {
            Outbound::Posted { document, .. } | Outbound::Updated { document, .. } => {
                Some(document.plain_text())
            }
            Outbound::Notice { .. } => None,
        })
    }

    pub fn notices(&self) -> Vec<Outbound> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|out| matches!(out, Outbound::Notice { .. }))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ChatPort for RecordingChat {
    async fn post_message(
        &self,
        _tenant_id: &str,
        conversation_id: &str,
        document: Document,
    ) -> Result<String, DomainError> {
        let message_id = format!("msg-{}", self.next_id.fetch_add(1, Ordering::SeqCst));
        self.log.lock().unwrap().push(Outbound::Posted {
            conversation_id: conversation_id.to_string(),
            message_id: message_id.clone(),
            document,
        });
        Ok(message_id)
    }

    async fn update_message(
        &self,
        message_id: &str,
        document: Document,
    ) -> Result<(), DomainError> {
        self.log.lock().unwrap().push(Outbound::Updated {
            message_id: message_id.to_string(),
            document,
        });
        Ok(())
    }

    async fn send_notice(
        &self,
        _tenant_id: &str,
        _conversation_id: &str,
        recipient: &Participant,
        document: Document,
    ) -> Result<(), DomainError> {
        self.log.lock().unwrap().push(Outbound::Notice {
            recipient: recipient.contact.clone(),
            document,
        });
        Ok(())
    }
}
