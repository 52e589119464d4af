//! Inbound chat event shape consumed by the dispatcher.

use serde::{Deserialize, Serialize};

use crate::domain::Participant;

/// One node of an inbound message body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageNode {
    /// Free text; concatenated and whitespace-split into command tokens.
    Text { content: String },
    /// A resolved mention of a conversation participant.
    Mention { contact: String, name: String },
}

/// An inbound chat event, already authenticated and resolved by the
/// platform binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub tenant_id: String,
    pub conversation_id: String,
    pub sender: Participant,
    pub nodes: Vec<MessageNode>,
}

impl InboundEvent {
    /// Command tokens: all text nodes concatenated, whitespace-split,
    /// trimmed and non-empty.
    pub fn tokens(&self) -> Vec<String> {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                MessageNode::Text { content } => Some(content.as_str()),
                MessageNode::Mention { .. } => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Mentioned participants excluding the bot itself, deduplicated by
    /// contact, in message order.
    pub fn mentions(&self, bot_contact: &str) -> Vec<Participant> {
        let mut seen = Vec::new();
        let mut mentioned = Vec::new();
        for node in &self.nodes {
            if let MessageNode::Mention { contact, name } = node {
                if contact == bot_contact || seen.contains(contact) {
                    continue;
                }
                seen.push(contact.clone());
                mentioned.push(Participant::human(contact.clone(), name.clone()));
            }
        }
        mentioned
    }
}
