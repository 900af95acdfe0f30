//! Message types for the Elm-style architecture
//!
//! All keypad state changes flow through these message types.

use crate::editable::AmountKey;

/// Keypad messages (button taps and programmatic edits)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypadMsg {
    /// Digit button tapped (0..=9)
    Digit(u8),
    /// Decimal point button tapped
    Point,
    /// Delete button tapped
    DeleteBackward,
    /// Delete button long-pressed
    DeleteLongPress,
    /// Confirm button tapped
    Confirm,
    /// Replace the buffer text programmatically
    SetText(String),
    /// Enable or disable the confirm button
    SetAffirmEnabled(bool),
    /// Empty the buffer
    Reset,
}

impl KeypadMsg {
    /// The amount key this message types, if any
    pub fn amount_key(&self) -> Option<AmountKey> {
        match self {
            KeypadMsg::Digit(d) => AmountKey::digit(*d),
            KeypadMsg::Point => Some(AmountKey::Point),
            _ => None,
        }
    }
}

/// App messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Keypad messages
    Keypad(KeypadMsg),
    /// App messages
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a digit tap message
    pub fn digit(d: u8) -> Self {
        Msg::Keypad(KeypadMsg::Digit(d))
    }

    pub fn point() -> Self {
        Msg::Keypad(KeypadMsg::Point)
    }

    pub fn confirm() -> Self {
        Msg::Keypad(KeypadMsg::Confirm)
    }
}
