//! Command grammar as an ordered rule table.
//!
//! Each rule is a shape predicate over the token sequence and mention set.
//! Rules are evaluated in priority order (longest/most-specific first) and
//! the first match wins; pattern shapes are disjoint by length and keyword
//! position, so order only matters between the start and move families.
//! New phrasings extend the table without touching control flow.

use crate::config::BotConfig;
use crate::domain::{Intent, Opponent, Participant};
use crate::errors::domain::ValidationKind;
use crate::errors::DomainError;

/// Words opening a start command.
pub const START_WORDS: &[&str] = &["play", "start", "begin", "create"];
/// Optional connective between kind and opponent.
pub const CONNECTIVES: &[&str] = &["with", "vs", "versus", "against"];
/// Words designating the AI opponent.
pub const AI_WORDS: &[&str] = &["ai", "computer", "machine", "you"];

fn is_any(token: &str, words: &[&str]) -> bool {
    words.iter().any(|word| token.eq_ignore_ascii_case(word))
}

/// Everything a rule may look at.
pub struct ParseInput<'a> {
    pub tokens: &'a [String],
    pub mentions: &'a [Participant],
    pub config: &'a BotConfig,
}

type RuleFn = fn(&ParseInput<'_>) -> Result<Option<Intent>, DomainError>;

/// One entry of the grammar table.
pub struct Rule {
    pub name: &'static str,
    pub matches: RuleFn,
}

/// The grammar, in evaluation order.
pub static RULES: &[Rule] = &[
    Rule {
        name: "start-vs-ai",
        matches: start_vs_ai,
    },
    Rule {
        name: "start-vs-human",
        matches: start_vs_human,
    },
    Rule {
        name: "move-kind-vs-ai",
        matches: move_kind_vs_ai,
    },
    Rule {
        name: "move-vs-ai",
        matches: move_vs_ai,
    },
    Rule {
        name: "move-kind",
        matches: move_kind,
    },
    Rule {
        name: "move-bare",
        matches: move_bare,
    },
];

/// `play|start|begin|create <kind> [with|vs|versus|against] AI|computer|machine|you`
fn start_vs_ai(input: &ParseInput<'_>) -> Result<Option<Intent>, DomainError> {
    let tokens = input.tokens;
    if !(3..=4).contains(&tokens.len()) || !is_any(&tokens[0], START_WORDS) {
        return Ok(None);
    }
    let Some(kind) = input.config.canonical_kind(Some(&tokens[1])) else {
        return Ok(None);
    };
    let matches_shape = match tokens.len() {
        3 => is_any(&tokens[2], AI_WORDS),
        4 => is_any(&tokens[2], CONNECTIVES) && is_any(&tokens[3], AI_WORDS),
        _ => false,
    };
    if !matches_shape {
        return Ok(None);
    }
    Ok(Some(Intent::Start {
        kind,
        opponent: Opponent::Ai,
    }))
}

/// `play|start|begin|create <kind> [with|vs|versus|against]` + one mention
fn start_vs_human(input: &ParseInput<'_>) -> Result<Option<Intent>, DomainError> {
    let tokens = input.tokens;
    if !(2..=3).contains(&tokens.len()) || !is_any(&tokens[0], START_WORDS) {
        return Ok(None);
    }
    let Some(kind) = input.config.canonical_kind(Some(&tokens[1])) else {
        return Ok(None);
    };
    if tokens.len() == 3 && !is_any(&tokens[2], CONNECTIVES) {
        return Ok(None);
    }
    match input.mentions {
        [] => Ok(None),
        [opponent] => Ok(Some(Intent::Start {
            kind,
            opponent: Opponent::Human(opponent.clone()),
        })),
        many => Err(DomainError::validation(
            ValidationKind::TooManyOpponents,
            format!(
                "start request mentioned {} candidate opponents, expected exactly one",
                many.len()
            ),
        )),
    }
}

/// `<kind> AI|computer|machine|you <move>`
fn move_kind_vs_ai(input: &ParseInput<'_>) -> Result<Option<Intent>, DomainError> {
    let tokens = input.tokens;
    if tokens.len() != 3 || !is_any(&tokens[1], AI_WORDS) {
        return Ok(None);
    }
    let Some(kind) = input.config.canonical_kind(Some(&tokens[0])) else {
        return Ok(None);
    };
    Ok(Some(Intent::Move {
        kind,
        text: tokens[2].clone(),
        vs_ai: true,
    }))
}

/// `AI|computer|machine|you <move>`
fn move_vs_ai(input: &ParseInput<'_>) -> Result<Option<Intent>, DomainError> {
    let tokens = input.tokens;
    if tokens.len() != 2 || !is_any(&tokens[0], AI_WORDS) {
        return Ok(None);
    }
    Ok(Some(Intent::Move {
        kind: input.config.default_kind.clone(),
        text: tokens[1].clone(),
        vs_ai: true,
    }))
}

/// `<kind> <move>`
fn move_kind(input: &ParseInput<'_>) -> Result<Option<Intent>, DomainError> {
    let tokens = input.tokens;
    if tokens.len() != 2 {
        return Ok(None);
    }
    let Some(kind) = input.config.canonical_kind(Some(&tokens[0])) else {
        return Ok(None);
    };
    Ok(Some(Intent::Move {
        kind,
        text: tokens[1].clone(),
        vs_ai: false,
    }))
}

/// `<move>` — a single bare token in the default game kind.
fn move_bare(input: &ParseInput<'_>) -> Result<Option<Intent>, DomainError> {
    let tokens = input.tokens;
    if tokens.len() != 1 {
        return Ok(None);
    }
    Ok(Some(Intent::Move {
        kind: input.config.default_kind.clone(),
        text: tokens[0].clone(),
        vs_ai: false,
    }))
}
