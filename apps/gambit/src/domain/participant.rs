//! Session participants: platform users and the AI sentinel.

use serde::{Deserialize, Serialize};

/// Sentinel identity occupying a player slot when the opponent is the AI
/// oracle rather than a platform user. Never a valid platform contact.
pub const AI_CONTACT: &str = "gambit:ai";

/// One occupant of an ordered player slot in a session.
///
/// Slot order is significant: it indexes into the rules-engine player slots,
/// so the engine's `next_players` indices translate back through the
/// session's participant list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Platform-scoped user id, or [`AI_CONTACT`].
    pub contact: String,
    /// Display label used when composing documents.
    pub name: String,
}

impl Participant {
    pub fn human(contact: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            contact: contact.into(),
            name: name.into(),
        }
    }

    /// The non-human sentinel participant.
    pub fn ai(name: impl Into<String>) -> Self {
        Self {
            contact: AI_CONTACT.to_string(),
            name: name.into(),
        }
    }

    pub fn is_ai(&self) -> bool {
        self.contact == AI_CONTACT
    }
}
