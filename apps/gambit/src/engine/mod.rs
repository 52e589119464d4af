//! Rules-engine collaborator boundary.

pub mod state;
pub mod trait_def;

pub use state::EngineState;
pub use trait_def::{CreatedGame, RulesEngine};
