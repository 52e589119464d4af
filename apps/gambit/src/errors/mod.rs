//! Error handling for the gambit core.

pub mod domain;

pub use domain::DomainError;
