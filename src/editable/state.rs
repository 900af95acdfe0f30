//! AmountState - explicit state of the amount buffer.
//!
//! The buffer is always in exactly one of four shapes. Each key press is a
//! transition between them, so the buffer text never has to be re-scanned to
//! decide what a key does.

use super::constraints::{AmountKey, MAX_FRACTION_DIGITS, MAX_INTEGER_NUMBER};

/// Shape of the amount buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountState {
    /// Nothing typed yet
    #[default]
    Empty,
    /// Buffer is exactly `"0"`
    LeadingZero,
    /// Integer without a point; count of digits, first digit nonzero
    Integer(usize),
    /// Point has been typed.
    ///
    /// `integer` counts significant integer digits and is 0 when the integer
    /// part is a lone `0` (as in `"0."` or `"0.5"`).
    Decimal { integer: usize, fraction: usize },
}

/// What a transition does to the buffer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Key rejected, buffer unchanged
    Ignore,
    /// Push the character at the end
    Append(char),
    /// Replace the whole buffer with the character
    Replace(char),
    /// Empty buffer becomes `"0."`
    StartDecimal,
}

/// Result of feeding one key to an [`AmountState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub edit: Edit,
    pub next: AmountState,
}

impl Transition {
    fn ignore(state: AmountState) -> Self {
        Self {
            edit: Edit::Ignore,
            next: state,
        }
    }

    fn to(edit: Edit, next: AmountState) -> Self {
        Self { edit, next }
    }

    /// Check if the key changed nothing
    pub fn is_ignored(&self) -> bool {
        self.edit == Edit::Ignore
    }

    /// Apply the edit to a text buffer
    pub fn apply_to(&self, text: &mut String) {
        match self.edit {
            Edit::Ignore => {}
            Edit::Append(ch) => text.push(ch),
            Edit::Replace(ch) => {
                text.clear();
                text.push(ch);
            }
            Edit::StartDecimal => text.push_str("0."),
        }
    }
}

impl AmountState {
    /// Derive the state of an existing buffer.
    ///
    /// Follows the same case order as the key filter: empty, single character,
    /// contains a point, plain integer.
    pub fn classify(text: &str) -> Self {
        if text.is_empty() {
            return AmountState::Empty;
        }
        if text.len() == 1 {
            return if text == "0" {
                AmountState::LeadingZero
            } else {
                AmountState::Integer(1)
            };
        }
        match text.find('.') {
            Some(idx) => {
                let integer = if &text[..idx] == "0" { 0 } else { idx };
                AmountState::Decimal {
                    integer,
                    fraction: text.len() - idx - 1,
                }
            }
            None => AmountState::Integer(text.len()),
        }
    }

    /// Feed one key and get the edit plus the next state
    pub fn accept(self, key: AmountKey) -> Transition {
        let Some(ch) = key.as_char() else {
            return Transition::ignore(self);
        };
        match (self, key) {
            (AmountState::Empty, AmountKey::Point) => Transition::to(
                Edit::StartDecimal,
                AmountState::Decimal {
                    integer: 0,
                    fraction: 0,
                },
            ),
            (AmountState::Empty, AmountKey::Digit(0)) => {
                Transition::to(Edit::Append(ch), AmountState::LeadingZero)
            }
            (AmountState::Empty, AmountKey::Digit(_)) => {
                Transition::to(Edit::Append(ch), AmountState::Integer(1))
            }

            (AmountState::LeadingZero, AmountKey::Point) => Transition::to(
                Edit::Append(ch),
                AmountState::Decimal {
                    integer: 0,
                    fraction: 0,
                },
            ),
            (AmountState::LeadingZero, AmountKey::Digit(0)) => {
                Transition::to(Edit::Replace(ch), AmountState::LeadingZero)
            }
            (AmountState::LeadingZero, AmountKey::Digit(_)) => {
                Transition::to(Edit::Replace(ch), AmountState::Integer(1))
            }

            (AmountState::Integer(n), AmountKey::Point) => Transition::to(
                Edit::Append(ch),
                AmountState::Decimal {
                    integer: n,
                    fraction: 0,
                },
            ),
            (AmountState::Integer(n), AmountKey::Digit(_)) if n < MAX_INTEGER_NUMBER => {
                Transition::to(Edit::Append(ch), AmountState::Integer(n + 1))
            }

            (AmountState::Decimal { integer, fraction }, AmountKey::Digit(_))
                if fraction < MAX_FRACTION_DIGITS =>
            {
                Transition::to(
                    Edit::Append(ch),
                    AmountState::Decimal {
                        integer,
                        fraction: fraction + 1,
                    },
                )
            }

            // Second point, full integer part, full fraction part
            (state, _) => Transition::ignore(state),
        }
    }

    /// State after the last character has been removed
    pub fn after_delete(self) -> Self {
        match self {
            AmountState::Empty | AmountState::LeadingZero | AmountState::Integer(0 | 1) => {
                AmountState::Empty
            }
            AmountState::Integer(n) => AmountState::Integer(n - 1),
            AmountState::Decimal {
                integer: 0,
                fraction: 0,
            } => AmountState::LeadingZero,
            AmountState::Decimal {
                integer,
                fraction: 0,
            } => AmountState::Integer(integer),
            AmountState::Decimal { integer, fraction } => AmountState::Decimal {
                integer,
                fraction: fraction - 1,
            },
        }
    }

    /// Check if a buffer in this state may be emitted as the final amount.
    ///
    /// Rejects the empty buffer, `"0"` and `"0."`.
    pub fn is_confirmable(self) -> bool {
        !matches!(
            self,
            AmountState::Empty
                | AmountState::LeadingZero
                | AmountState::Decimal {
                    integer: 0,
                    fraction: 0
                }
        )
    }
}
