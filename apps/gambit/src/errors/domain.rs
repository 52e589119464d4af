//! Domain-level error type used across the directory, coordinator and
//! collaborator boundaries.
//!
//! This error type is chat-platform agnostic. The per-event dispatch layer
//! converts every `DomainError` into exactly one user-visible notice; see
//! `chat::document::notice_for`.

use thiserror::Error;

/// Validation error kinds (programming-contract or user-input violations).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// A directory operation was called with a missing tenant, conversation,
    /// participant set or game kind.
    MissingField,
    /// The acting sender is not among the next-player slots.
    OutOfTurn,
    /// A start request mentioned more than one candidate opponent.
    TooManyOpponents,
    Other(String),
}

/// Missing-resource kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Session,
    Other(String),
}

/// Semantic conflict kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// A session already exists for the candidate participant set and kind.
    SessionExists,
    /// More than one session matched a move resolution; the directory never
    /// guesses among candidates.
    AmbiguousSession,
    Other(String),
}

/// External collaborator failure kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    RulesEngine,
    AiOracle,
    ChatPlatform,
    Other(String),
}

/// Central domain error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),
    #[error("not found ({0:?}): {1}")]
    NotFound(NotFoundKind, String),
    #[error("conflict ({0:?}): {1}")]
    Conflict(ConflictKind, String),
    #[error("external service failure ({0:?}): {1}")]
    Infra(InfraErrorKind, String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
