//! Configurable keyboard mapping for the keypad
//!
//! This module provides a data-driven keybinding system that:
//! - Maps keystrokes to keypad commands
//! - Enables user customization via YAML config files
//!
//! # Architecture
//!
//! ```text
//! text line → Keystroke → Keymap::lookup() → Command → Msg
//! ```
//!
//! # Loading Keymaps
//!
//! ```ignore
//! // Load from embedded defaults
//! let keymap = Keymap::with_bindings(default_bindings());
//!
//! // Or embedded YAML merged with the user's keymap.yaml
//! let keymap = Keymap::with_bindings(load_default_keymap());
//! ```

mod binding;
mod command;
mod config;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod line_adapter;
mod types;

pub use binding::Keybinding;
pub use command::Command;
pub use config::{load_keymap_file, parse_key_string, parse_keymap_yaml, KeymapError};
pub use defaults::{
    default_bindings, get_default_keymap_yaml, load_default_keymap, merge_bindings,
    merge_user_keymap,
};
pub use keymap::Keymap;
pub use line_adapter::keystrokes_from_line;
pub use types::{KeyCode, Keystroke, Modifiers};
