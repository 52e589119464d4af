//! Game flow service - the turn coordinator, AI move agent and session
//! lifecycle manager behind the chat command surface.
//!
//! One inbound chat event is one asynchronous task through this service:
//! interpret the command, resolve at most one session, validate turn
//! legality, forward the move to the rules engine and chain AI turns until
//! a human turn or game over.

mod ai_coordinator;
mod dispatch;
mod lifecycle;
mod player_actions;
mod rendering;

use std::sync::Arc;

use crate::chat::ChatPort;
use crate::config::BotConfig;
use crate::directory::SessionDirectory;
use crate::engine::RulesEngine;

/// Turn coordination service. Constructed once per process with its
/// collaborators injected; cheap to share behind an `Arc`.
pub struct GameFlowService {
    config: BotConfig,
    directory: Arc<SessionDirectory>,
    engine: Arc<dyn RulesEngine>,
    chat: Arc<dyn ChatPort>,
}

impl GameFlowService {
    pub fn new(
        config: BotConfig,
        directory: Arc<SessionDirectory>,
        engine: Arc<dyn RulesEngine>,
        chat: Arc<dyn ChatPort>,
    ) -> Self {
        Self {
            config,
            directory,
            engine,
            chat,
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }
}
