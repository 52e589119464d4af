//! Bot configuration loaded from environment variables.
//!
//! Supported game kinds and the default kind live here so a new game kind is
//! a configuration (plus rules-engine) change, not a parser change. The
//! `Default` impl is the chess-only configuration used throughout tests.

use std::env;

/// Static configuration for the bot instance.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Platform identity of the bot itself; mentions of this contact are
    /// stripped before command interpretation.
    pub bot_contact: String,
    /// Game kind assumed when a command omits one.
    pub default_kind: String,
    /// Game kinds the rules-engine collaborator can play.
    pub supported_kinds: Vec<String>,
    /// Display label for the AI opponent in rendered documents.
    pub ai_name: String,
}

impl BotConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Variables:
    /// - `GAMBIT_BOT_CONTACT`: bot identity on the chat platform
    /// - `GAMBIT_DEFAULT_KIND`: kind assumed when a command omits one
    /// - `GAMBIT_SUPPORTED_KINDS`: comma-separated list of playable kinds
    /// - `GAMBIT_AI_NAME`: display label for the AI opponent
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let supported_kinds = env::var("GAMBIT_SUPPORTED_KINDS")
            .ok()
            .map(|raw| {
                raw.split(',')
                    .map(|kind| kind.trim().to_lowercase())
                    .filter(|kind| !kind.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|kinds| !kinds.is_empty())
            .unwrap_or(defaults.supported_kinds);

        Self {
            bot_contact: env::var("GAMBIT_BOT_CONTACT").unwrap_or(defaults.bot_contact),
            default_kind: env::var("GAMBIT_DEFAULT_KIND")
                .map(|kind| kind.trim().to_lowercase())
                .unwrap_or(defaults.default_kind),
            supported_kinds,
            ai_name: env::var("GAMBIT_AI_NAME").unwrap_or(defaults.ai_name),
        }
    }

    /// Whether the given kind (case-insensitive) is playable.
    pub fn is_supported(&self, kind: &str) -> bool {
        self.supported_kinds
            .iter()
            .any(|supported| supported.eq_ignore_ascii_case(kind))
    }

    /// Resolve an optional requested kind to its canonical form, defaulting
    /// when omitted. Returns `None` for a named kind that is not supported.
    pub fn canonical_kind(&self, requested: Option<&str>) -> Option<String> {
        match requested {
            None => Some(self.default_kind.clone()),
            Some(kind) if self.is_supported(kind) => Some(kind.to_lowercase()),
            Some(_) => None,
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            bot_contact: "gambit-bot".to_string(),
            default_kind: "chess".to_string(),
            supported_kinds: vec!["chess".to_string()],
            ai_name: "AI".to_string(),
        }
    }
}
