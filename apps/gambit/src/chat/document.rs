//! Outbound document composition.
//!
//! A document is an ordered list of text, mention and emoji runs. How the
//! platform binding renders them (markdown, adaptive cards, ...) is opaque
//! to this core.

use serde::{Deserialize, Serialize};

use crate::config::BotConfig;
use crate::domain::{Session, TurnPhase};
use crate::errors::domain::{ConflictKind, NotFoundKind, ValidationKind};
use crate::errors::DomainError;

/// One run of an outbound document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Run {
    Text { content: String },
    Mention { contact: String, name: String },
    Emoji { shortcode: String },
}

/// Ordered runs composing one outbound message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub runs: Vec<Run>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, content: impl Into<String>) -> Self {
        self.runs.push(Run::Text {
            content: content.into(),
        });
        self
    }

    pub fn mention(mut self, contact: impl Into<String>, name: impl Into<String>) -> Self {
        self.runs.push(Run::Mention {
            contact: contact.into(),
            name: name.into(),
        });
        self
    }

    pub fn emoji(mut self, shortcode: impl Into<String>) -> Self {
        self.runs.push(Run::Emoji {
            shortcode: shortcode.into(),
        });
        self
    }

    /// Concatenated text content, for logging and assertions.
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .filter_map(|run| match run {
                Run::Text { content } => Some(content.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

/// Board/status document for a session's current engine state: the status
/// line, the printable board when the engine sent one, and a flourish once
/// the game is over.
pub fn board_update(session: &Session) -> Document {
    let mut doc = Document::new().text(session.state.message.clone());
    if let Some(board) = session.state.board_text() {
        doc = doc.text(format!("\n{board}"));
    }
    if session.state.game_over {
        doc = doc.text(" ").emoji("tada");
    }
    doc
}

/// Targeted notice prompting the human participant(s) on turn.
pub fn turn_prompt(session: &Session) -> Document {
    debug_assert_eq!(session.phase(), TurnPhase::AwaitingHuman);
    let mut doc = Document::new();
    for participant in session.next_participants() {
        doc = doc
            .mention(participant.contact.clone(), participant.name.clone())
            .text(" ");
    }
    doc.text(format!("your move: {}", session.state.message))
}

/// Usage help posted when no command pattern matches.
pub fn usage(config: &BotConfig) -> Document {
    let kind = &config.default_kind;
    Document::new().text(format!(
        "I did not understand that. Try:\n\
         - \"play {kind} with AI\" to start a game against the computer\n\
         - \"play {kind} with\" plus a mention to challenge someone\n\
         - a move like \"e4\" (optionally \"{kind} e4\") in a running game"
    ))
}

/// Convert an error raised while resolving or advancing a session into the
/// single user-visible notice for that event.
pub fn notice_for(err: &DomainError) -> Document {
    let doc = Document::new().emoji("warning").text(" ");
    match err {
        DomainError::Validation(ValidationKind::OutOfTurn, detail) => doc.text(detail.clone()),
        DomainError::Validation(ValidationKind::TooManyOpponents, _) => {
            doc.text("I can only set up two-player games; please mention exactly one opponent.")
        }
        DomainError::Validation(_, _) => doc.text("That request was invalid."),
        DomainError::NotFound(NotFoundKind::Session, _) => {
            doc.text("I could not find a running game for you here. Start one with \"play\".")
        }
        DomainError::NotFound(_, _) => doc.text("I could not find that."),
        DomainError::Conflict(ConflictKind::SessionExists, _) => {
            doc.text("You already have a game running with those players. Finish it first.")
        }
        DomainError::Conflict(ConflictKind::AmbiguousSession, _) => doc.text(
            "You are in more than one game here; mention your opponent so I know which one you mean.",
        ),
        DomainError::Conflict(_, _) => doc.text("That conflicts with a running game."),
        DomainError::Infra(_, _) => {
            doc.text("Something went wrong talking to the game service. Please try again.")
        }
    }
}
