//! Domain layer: participants, sessions and parsed command intents.

pub mod intent;
pub mod participant;
pub mod session;

// Re-exports for ergonomics
pub use intent::{Intent, Opponent};
pub use participant::{Participant, AI_CONTACT};
pub use session::{Session, SessionId, TurnPhase};
