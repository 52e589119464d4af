//! Narrow view of the rules engine's game state.
//!
//! The engine returns a state blob after every applied move. The core only
//! depends on the fields below; the board representation is passed through
//! opaquely to rendering.

use serde::{Deserialize, Serialize};

/// Engine-reported state after game creation or a move application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Terminal flag; the session is destroyed once this is set.
    pub game_over: bool,
    /// Human-readable status line ("White to move", "Checkmate", ...).
    pub message: String,
    /// Player slot indices whose turn is next. Empty when the game is over.
    #[serde(default)]
    pub next_players: Vec<usize>,
    /// Opaque board representation, forwarded to the rendered document.
    #[serde(default)]
    pub board: serde_json::Value,
}

impl EngineState {
    /// Board text when the engine sent a printable representation.
    pub fn board_text(&self) -> Option<&str> {
        self.board.as_str()
    }
}
