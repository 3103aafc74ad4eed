//! Shared utilities: error types, timestamp parsing, and constants.

pub mod constants;
pub mod error;
pub mod time;
