//! Amount keypad - Elm-style numeric entry for expense amounts
//!
//! This crate provides the core types and logic for a numeric keypad bound
//! to an amount buffer, implementing the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod editable;
pub mod keymap;
pub mod keypad;
pub mod messages;
pub mod model;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::KeypadConfig;
pub use editable::{AmountBuffer, AmountKey, AmountState, MAX_INTEGER_NUMBER};
pub use keypad::{AffirmListener, Keypad};
pub use messages::Msg;
pub use model::KeypadModel;
