//! Command enum representing all keypad actions a key can trigger
//!
//! Commands are the bridge between keybindings and the message system.
//! Each command maps to one `Msg` for the Elm-style update loop.

use std::str::FromStr;

use crate::messages::{AppMsg, KeypadMsg, Msg};

/// All keypad commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Type a digit 0..=9
    Digit(u8),
    /// Type the decimal point
    Point,
    /// Delete the last character (tap on delete)
    DeleteBackward,
    /// Clear the whole buffer (long press on delete)
    ClearInput,
    /// Confirm the amount
    Confirm,
    /// Leave the keypad session
    Quit,
    /// Removes a default binding when merging user keymaps
    Unbound,
}

impl Command {
    /// Convert this command to the message it dispatches
    pub fn to_msg(self) -> Option<Msg> {
        let msg = match self {
            Command::Digit(d) => Msg::Keypad(KeypadMsg::Digit(d)),
            Command::Point => Msg::Keypad(KeypadMsg::Point),
            Command::DeleteBackward => Msg::Keypad(KeypadMsg::DeleteBackward),
            Command::ClearInput => Msg::Keypad(KeypadMsg::DeleteLongPress),
            Command::Confirm => Msg::Keypad(KeypadMsg::Confirm),
            Command::Quit => Msg::App(AppMsg::Quit),
            Command::Unbound => return None,
        };
        Some(msg)
    }
}

// Implement FromStr for Command to parse from YAML
impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(digit) = s.strip_prefix("Digit") {
            return match digit.parse::<u8>() {
                Ok(d) if d <= 9 && digit.len() == 1 => Ok(Command::Digit(d)),
                _ => Err(()),
            };
        }

        match s {
            "Point" => Ok(Command::Point),
            "DeleteBackward" => Ok(Command::DeleteBackward),
            "ClearInput" => Ok(Command::ClearInput),
            "Confirm" => Ok(Command::Confirm),
            "Quit" => Ok(Command::Quit),
            "Unbound" => Ok(Command::Unbound),
            _ => Err(()),
        }
    }
}
