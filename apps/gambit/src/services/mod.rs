//! Service layer: event dispatch and turn coordination.

pub mod game_flow;
