//! Gambit test support utilities
//!
//! This crate provides utilities shared by gambit's unit and integration
//! tests, currently the unified logging initialization.

pub mod logging;
