//! Scripted collaborator doubles for unit and integration tests.

pub mod chat;
pub mod engine;

pub use chat::{Outbound, RecordingChat};
pub use engine::{states, ScriptedEngine};
