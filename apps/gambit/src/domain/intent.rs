//! Structured result of parsing a chat command.

use crate::domain::participant::Participant;

/// Opponent designation on a start intent, or the hint on a move intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opponent {
    /// The AI sentinel.
    Ai,
    /// A mentioned platform user.
    Human(Participant),
}

/// Parsed command intent. The acting participant is always the message
/// sender and is carried alongside the intent by the dispatcher, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Start a new game of `kind` against `opponent`.
    Start { kind: String, opponent: Opponent },
    /// Apply `text` as a move in a game of `kind`. `vs_ai` narrows session
    /// resolution to the sender's game against the AI sentinel.
    Move {
        kind: String,
        text: String,
        vs_ai: bool,
    },
}
