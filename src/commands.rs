//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The keypad itself never performs them; the host (or [`crate::keypad::Keypad`])
//! delivers them to the listener.

/// Side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Buffer text changed, the input field should be redrawn
    Redraw,
    /// Confirmed amount, exact buffer text
    Affirm(String),
    /// Confirm tapped on a value that cannot be emitted (host shakes the field)
    Reject,
    /// Request application exit
    Quit,
}
