//! Keymap struct for storing and looking up keybindings

use std::collections::HashMap;

use super::binding::Keybinding;
use super::command::Command;
use super::types::Keystroke;

/// The keymap stores all keybindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    /// All registered bindings
    bindings: Vec<Keybinding>,
    /// Fast lookup (index into bindings); later bindings win
    lookup: HashMap<Keystroke, usize>,
}

impl Keymap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a keymap with the given bindings
    pub fn with_bindings(bindings: Vec<Keybinding>) -> Self {
        let mut keymap = Self::new();
        for binding in bindings {
            keymap.add_binding(binding);
        }
        keymap
    }

    /// Add a binding to the keymap
    pub fn add_binding(&mut self, binding: Keybinding) {
        let idx = self.bindings.len();
        self.lookup.insert(binding.keystroke, idx);
        self.bindings.push(binding);
    }

    /// Look up the command bound to a keystroke
    pub fn lookup(&self, keystroke: &Keystroke) -> Option<Command> {
        self.lookup
            .get(keystroke)
            .map(|&idx| self.bindings[idx].command)
            .filter(|cmd| *cmd != Command::Unbound)
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }
}
