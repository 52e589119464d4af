//! Static bot configuration.

pub mod bot;

pub use bot::BotConfig;
