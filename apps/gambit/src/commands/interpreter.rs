//! Intent parsing over the grammar table.

use tracing::debug;

use crate::commands::grammar::{ParseInput, RULES};
use crate::config::BotConfig;
use crate::domain::{Intent, Participant};
use crate::errors::DomainError;

/// Parse command tokens plus mentioned participants into an intent.
///
/// Tokens are whitespace-split, trimmed and non-empty; mentions are already
/// resolved identities excluding the bot itself. Returns `Ok(None)` when no
/// pattern matches or a named kind is unsupported; the caller falls back to
/// a usage response. Parsing is deterministic: the first matching rule in
/// table order wins.
pub fn parse(
    tokens: &[String],
    mentions: &[Participant],
    config: &BotConfig,
) -> Result<Option<Intent>, DomainError> {
    if tokens.is_empty() {
        return Ok(None);
    }
    let input = ParseInput {
        tokens,
        mentions,
        config,
    };
    for rule in RULES {
        if let Some(intent) = (rule.matches)(&input)? {
            debug!(rule = rule.name, "command matched");
            return Ok(Some(intent));
        }
    }
    Ok(None)
}
