//! Scripted rules engine: tests enqueue responses, calls pop them in order.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Participant, Session, SessionId};
use crate::engine::{CreatedGame, EngineState, RulesEngine};
use crate::errors::domain::InfraErrorKind;
use crate::errors::DomainError;

type CreateScript =
    Box<dyn Fn(&[Participant]) -> Result<CreatedGame, DomainError> + Send + Sync>;
type MoveScript = Box<dyn Fn(&Session) -> Result<EngineState, DomainError> + Send + Sync>;

/// Rules-engine double driven by enqueued response scripts. Scripts receive
/// the call-time participants/session, so a test can answer relative to the
/// (shuffled) slot order instead of hard-coding indices. An exhausted queue
/// fails the call loudly as an external-service error.
#[derive(Default)]
pub struct ScriptedEngine {
    create_scripts: Mutex<VecDeque<CreateScript>>,
    move_scripts: Mutex<VecDeque<MoveScript>>,
    ai_scripts: Mutex<VecDeque<MoveScript>>,
    moves_seen: Mutex<Vec<String>>,
    ai_calls: AtomicUsize,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_create<F>(&self, script: F)
    where
        F: Fn(&[Participant]) -> Result<CreatedGame, DomainError> + Send + Sync + 'static,
    {
        self.create_scripts.lock().unwrap().push_back(Box::new(script));
    }

    pub fn on_move<F>(&self, script: F)
    where
        F: Fn(&Session) -> Result<EngineState, DomainError> + Send + Sync + 'static,
    {
        self.move_scripts.lock().unwrap().push_back(Box::new(script));
    }

    pub fn on_ai_move<F>(&self, script: F)
    where
        F: Fn(&Session) -> Result<EngineState, DomainError> + Send + Sync + 'static,
    {
        self.ai_scripts.lock().unwrap().push_back(Box::new(script));
    }

    /// Move texts received through `perform_move`, in call order.
    pub fn moves_seen(&self) -> Vec<String> {
        self.moves_seen.lock().unwrap().clone()
    }

    /// Number of `perform_ai_move` calls.
    pub fn ai_calls(&self) -> usize {
        self.ai_calls.load(Ordering::SeqCst)
    }

    fn exhausted(which: &str) -> DomainError {
        DomainError::infra(
            InfraErrorKind::RulesEngine,
            format!("scripted engine has no {which} response queued"),
        )
    }
}

#[async_trait]
impl RulesEngine for ScriptedEngine {
    async fn create_game(
        &self,
        _kind: &str,
        participants: &[Participant],
    ) -> Result<CreatedGame, DomainError> {
        let script = self
            .create_scripts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Self::exhausted("create_game"))?;
        script(participants)
    }

    async fn perform_move(
        &self,
        session: &Session,
        move_text: &str,
    ) -> Result<EngineState, DomainError> {
        self.moves_seen.lock().unwrap().push(move_text.to_string());
        let script = self
            .move_scripts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Self::exhausted("perform_move"))?;
        script(session)
    }

    async fn perform_ai_move(&self, session: &Session) -> Result<EngineState, DomainError> {
        self.ai_calls.fetch_add(1, Ordering::SeqCst);
        let script = self
            .ai_scripts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| Self::exhausted("perform_ai_move"))?;
        script(session)
    }
}

/// Engine state factories answering relative to a session's slot order.
pub mod states {
    use super::*;

    /// Game created with the given id and initial state.
    pub fn created(id: &str, state: EngineState) -> CreatedGame {
        CreatedGame {
            id: SessionId::new(id),
            state,
        }
    }

    /// Waiting on the slot holding `contact`.
    pub fn awaiting(participants: &[Participant], contact: &str, message: &str) -> EngineState {
        let slot = participants
            .iter()
            .position(|p| p.contact == contact)
            .expect("contact must occupy a player slot");
        EngineState {
            game_over: false,
            message: message.to_string(),
            next_players: vec![slot],
            board: serde_json::Value::Null,
        }
    }

    /// Waiting on the AI sentinel's slot.
    pub fn awaiting_ai(participants: &[Participant], message: &str) -> EngineState {
        let slot = participants
            .iter()
            .position(|p| p.is_ai())
            .expect("an AI participant must occupy a player slot");
        EngineState {
            game_over: false,
            message: message.to_string(),
            next_players: vec![slot],
            board: serde_json::Value::Null,
        }
    }

    /// Terminal state.
    pub fn finished(message: &str) -> EngineState {
        EngineState {
            game_over: true,
            message: message.to_string(),
            next_players: Vec::new(),
            board: serde_json::Value::Null,
        }
    }
}
