//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use amountpad::editable::filter;
use amountpad::keypad::{AffirmListener, Keypad};

/// Key alphabet used by the sequence enumerations
pub const KEYS: [char; 6] = ['0', '1', '5', '9', '.', '<'];

/// Feed `keys` through the string filter, `<` deletes the last character
pub fn type_keys(keys: &str) -> String {
    keys.chars().fold(String::new(), |text, ch| match ch {
        '<' => filter::delete_last(&text),
        _ => filter::apply(&text, ch),
    })
}

/// Build a keypad and tap `keys` on it, `<` taps delete
pub fn keypad_from_keys(keys: &str) -> Keypad {
    let mut keypad = Keypad::new();
    tap_keys(&mut keypad, keys);
    keypad
}

/// Tap each key on `keypad`, `<` taps delete, other non-digits tap the point
pub fn tap_keys(keypad: &mut Keypad, keys: &str) {
    for ch in keys.chars() {
        match ch {
            '<' => {
                keypad.delete_tapped();
            }
            '.' => {
                keypad.point_tapped();
            }
            _ => {
                if let Some(d) = ch.to_digit(10) {
                    keypad.digit_tapped(d as u8);
                }
            }
        }
    }
}

/// Every key sequence over [`KEYS`] of exactly `len` keys
pub fn sequences(len: usize) -> Vec<String> {
    sequences_over(&KEYS, len)
}

/// Every key sequence over `keys` of exactly `len` keys
pub fn sequences_over(keys: &[char], len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    for _ in 0..len {
        out = out
            .iter()
            .flat_map(|prefix| {
                keys.iter().map(move |&k| {
                    let mut s = prefix.clone();
                    s.push(k);
                    s
                })
            })
            .collect();
    }
    out
}

/// Check the structural rules every buffer must obey
pub fn assert_well_formed(text: &str, context: &str) {
    assert!(
        text.chars().all(|c| c.is_ascii_digit() || c == '.'),
        "{}: foreign character in {:?}",
        context,
        text
    );
    assert!(
        text.matches('.').count() <= 1,
        "{}: more than one point in {:?}",
        context,
        text
    );

    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text, None),
    };
    assert!(
        integer.len() <= amountpad::MAX_INTEGER_NUMBER,
        "{}: integer part too long in {:?}",
        context,
        text
    );
    assert!(
        !(integer.len() > 1 && integer.starts_with('0')),
        "{}: leading zero in {:?}",
        context,
        text
    );
    if let Some(fraction) = fraction {
        assert!(
            !integer.is_empty(),
            "{}: point without integer part in {:?}",
            context,
            text
        );
        assert!(
            fraction.len() <= 2,
            "{}: fraction too long in {:?}",
            context,
            text
        );
    }
}

/// Listener that records every confirm outcome
#[derive(Debug, Default)]
pub struct Recorder {
    pub affirmed: Vec<String>,
    pub rejected: usize,
}

#[derive(Clone, Default)]
pub struct SharedRecorder(pub Rc<RefCell<Recorder>>);

impl SharedRecorder {
    pub fn affirmed(&self) -> Vec<String> {
        self.0.borrow().affirmed.clone()
    }

    pub fn rejected(&self) -> usize {
        self.0.borrow().rejected
    }
}

impl AffirmListener for SharedRecorder {
    fn on_affirm(&mut self, text: &str) {
        self.0.borrow_mut().affirmed.push(text.to_string());
    }

    fn on_reject(&mut self) {
        self.0.borrow_mut().rejected += 1;
    }
}

/// Keypad with a recording listener attached
pub fn recorded_keypad(keys: &str) -> (Keypad, SharedRecorder) {
    let recorder = SharedRecorder::default();
    let mut keypad = keypad_from_keys(keys);
    keypad.set_affirm_listener(recorder.clone());
    (keypad, recorder)
}
