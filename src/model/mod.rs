//! Keypad model - the complete state of the amount keypad
//!
//! Follows the Elm Architecture pattern: the model is plain data, changed only
//! by [`crate::update::update`].

use crate::config::KeypadConfig;
use crate::editable::{AmountBuffer, AmountState, MAX_FRACTION_DIGITS, MAX_INTEGER_NUMBER};

/// State owned by one keypad instance
#[derive(Debug, Clone)]
pub struct KeypadModel {
    /// Amount being typed
    pub buffer: AmountBuffer,
    /// Confirm button enabled; a disabled button ignores taps
    pub affirm_enabled: bool,
}

impl Default for KeypadModel {
    fn default() -> Self {
        Self {
            buffer: AmountBuffer::new(),
            affirm_enabled: true,
        }
    }
}

impl KeypadModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Model initialised from persisted preferences
    pub fn from_config(config: &KeypadConfig) -> Self {
        Self {
            buffer: AmountBuffer::new(),
            affirm_enabled: config.affirm_enabled,
        }
    }

    /// Current buffer text
    pub fn text(&self) -> &str {
        self.buffer.as_str()
    }

    /// Check the amount limits hold, panicking with `context` if they don't.
    ///
    /// Only compiled into debug builds; called after every update.
    #[cfg(debug_assertions)]
    pub fn assert_invariants_with_context(&self, context: &str) {
        let text = self.buffer.as_str();
        let points = text.matches('.').count();
        assert!(points <= 1, "[{}] more than one point in {:?}", context, text);

        let (integer, fraction) = match text.split_once('.') {
            Some((i, f)) => (i, f),
            None => (text, ""),
        };
        assert!(
            integer.len() <= MAX_INTEGER_NUMBER,
            "[{}] integer part too long in {:?}",
            context,
            text
        );
        assert!(
            fraction.len() <= MAX_FRACTION_DIGITS,
            "[{}] fraction part too long in {:?}",
            context,
            text
        );
        assert!(
            !(integer.len() > 1 && integer.starts_with('0')),
            "[{}] redundant leading zero in {:?}",
            context,
            text
        );
        assert_eq!(
            self.buffer.state(),
            AmountState::classify(text),
            "[{}] buffer state out of sync",
            context
        );
    }
}
