//! Default keybindings for the keypad
//!
//! Can be loaded from the embedded keymap.yaml, or falls back to hardcoded defaults.

use std::path::Path;

use super::binding::Keybinding;
use super::command::Command;
use super::config::{load_keymap_file, parse_keymap_yaml};
use super::types::{KeyCode, Keystroke, Modifiers};

/// Default keymap YAML embedded at compile time
const DEFAULT_KEYMAP_YAML: &str = include_str!("../../keymap.yaml");

/// The embedded default keymap source
pub fn get_default_keymap_yaml() -> &'static str {
    DEFAULT_KEYMAP_YAML
}

/// Load and merge keymaps: defaults + user overrides
///
/// Loading order (each layer overrides the previous):
/// 1. Embedded default keymap (compiled into binary)
/// 2. User config at ~/.config/amountpad/keymap.yaml
///
/// User bindings with `command: Unbound` will remove matching default bindings.
pub fn load_default_keymap() -> Vec<Keybinding> {
    let bindings = match parse_keymap_yaml(DEFAULT_KEYMAP_YAML) {
        Ok(b) => {
            tracing::info!("Loaded embedded default keymap ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded keymap: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    match crate::config::keymap_file() {
        Some(user_path) => merge_user_keymap(bindings, &user_path),
        None => bindings,
    }
}

/// Merge the keymap at `user_path` over `bindings` if the file exists
pub fn merge_user_keymap(bindings: Vec<Keybinding>, user_path: &Path) -> Vec<Keybinding> {
    if !user_path.exists() {
        return bindings;
    }
    match load_keymap_file(user_path) {
        Ok(user_bindings) => {
            tracing::info!(
                "Merging user keymap from {} ({} bindings)",
                user_path.display(),
                user_bindings.len()
            );
            merge_bindings(bindings, user_bindings)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load user keymap from {}: {}",
                user_path.display(),
                e
            );
            bindings
        }
    }
}

/// Merge user bindings into base bindings
///
/// - If user binding has the same keystroke → replaces base
/// - If user binding command is `Unbound` → removes matching base bindings
/// - Otherwise → user binding is added
pub fn merge_bindings(base: Vec<Keybinding>, user: Vec<Keybinding>) -> Vec<Keybinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.command == Command::Unbound {
            result.retain(|b| b.keystroke != user_binding.keystroke);
            continue;
        }

        match result
            .iter()
            .position(|b| b.keystroke == user_binding.keystroke)
        {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Hardcoded keypad bindings, same content as the embedded keymap.yaml
pub fn default_bindings() -> Vec<Keybinding> {
    let mut bindings = Vec::with_capacity(32);

    // Digits on the main row and the numpad
    for d in 0..=9u8 {
        let ch = char::from(b'0' + d);
        bindings.push(bind(KeyCode::Char(ch), Modifiers::NONE, Command::Digit(d)));
        bindings.push(bind(KeyCode::Numpad(d), Modifiers::NONE, Command::Digit(d)));
    }

    bindings.extend([
        bind(KeyCode::Char('.'), Modifiers::NONE, Command::Point),
        bind(KeyCode::Char(','), Modifiers::NONE, Command::Point),
        bind(KeyCode::NumpadDecimal, Modifiers::NONE, Command::Point),
        bind(KeyCode::Backspace, Modifiers::NONE, Command::DeleteBackward),
        bind(KeyCode::Delete, Modifiers::NONE, Command::DeleteBackward),
        bind(KeyCode::Backspace, Modifiers::SHIFT, Command::ClearInput),
        bind(KeyCode::Char('c'), Modifiers::NONE, Command::ClearInput),
        bind(KeyCode::Enter, Modifiers::NONE, Command::Confirm),
        bind(KeyCode::NumpadEnter, Modifiers::NONE, Command::Confirm),
        bind(KeyCode::Escape, Modifiers::NONE, Command::Quit),
        bind(KeyCode::Char('q'), Modifiers::NONE, Command::Quit),
    ]);

    bindings
}

fn bind(key: KeyCode, mods: Modifiers, command: Command) -> Keybinding {
    Keybinding::new(Keystroke::new(key, mods), command)
}
