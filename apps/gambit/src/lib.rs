#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Gambit core: the session directory and turn-coordination engine behind a
//! chat bot for turn-based games. Rule enforcement and AI move generation
//! are delegated to external collaborators reachable through the traits in
//! [`engine`] and [`chat`].

pub mod chat;
pub mod commands;
pub mod config;
pub mod directory;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod services;
pub mod test_support;

// Re-exports for public API
pub use chat::{ChatPort, Document, InboundEvent, MessageNode};
pub use config::BotConfig;
pub use directory::SessionDirectory;
pub use domain::{Intent, Opponent, Participant, Session, SessionId, TurnPhase};
pub use engine::{CreatedGame, EngineState, RulesEngine};
pub use errors::DomainError;
pub use services::game_flow::GameFlowService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    gambit_test_support::logging::init();
}
