//! Command interpreter: free-text chat tokens plus mention references in,
//! structured intents out.

pub mod grammar;
pub mod interpreter;

pub use interpreter::parse;
