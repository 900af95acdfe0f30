//! AmountBuffer - the owned edit buffer behind the keypad.
//!
//! Holds the typed text together with its [`AmountState`]. Every mutation is a
//! state transition, so the cached state always describes the text.

use std::fmt;

use super::constraints::AmountKey;
use super::state::{AmountState, Transition};

/// Text being typed on the keypad plus its current shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmountBuffer {
    text: String,
    state: AmountState,
}

impl AmountBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer by replaying `text` key by key.
    ///
    /// Whitespace is trimmed and characters outside `0-9` and `.` are dropped,
    /// so the result always satisfies the amount limits.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::new();
        buffer.replay(text);
        buffer
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> AmountState {
        self.state
    }

    pub fn len_chars(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the text may be emitted as the entered amount
    pub fn is_confirmable(&self) -> bool {
        self.state.is_confirmable()
    }

    /// Feed one key. Returns the transition so callers can tell a no-op apart.
    pub fn push(&mut self, key: AmountKey) -> Transition {
        let transition = self.state.accept(key);
        transition.apply_to(&mut self.text);
        self.state = transition.next;
        transition
    }

    /// Feed a character; None if it is not part of the amount alphabet
    pub fn push_char(&mut self, ch: char) -> Option<Transition> {
        AmountKey::from_char(ch).map(|key| self.push(key))
    }

    /// Remove the last character, returning it
    pub fn delete_last(&mut self) -> Option<char> {
        let removed = self.text.pop()?;
        self.state = self.state.after_delete();
        Some(removed)
    }

    /// Empty the buffer
    pub fn clear(&mut self) {
        self.text.clear();
        self.state = AmountState::Empty;
    }

    /// Replace the content, replaying `text` through the filter
    pub fn set_content(&mut self, text: &str) {
        self.clear();
        self.replay(text);
    }

    fn replay(&mut self, text: &str) {
        for ch in text.trim().chars() {
            self.push_char(ch);
        }
    }
}

impl fmt::Display for AmountBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
