//! Numeric input filter over plain string buffers.
//!
//! These are the stateless entry points: callers hand in the current text and
//! get the new text back. Overflowing or duplicate keys leave the text as is;
//! nothing here fails.

use super::constraints::AmountKey;
use super::state::AmountState;

/// Apply one key press to `buffer` and return the new text.
///
/// Characters outside `0-9` and `.` are ignored. Surrounding whitespace in
/// `buffer` is trimmed before filtering.
pub fn apply(buffer: &str, incoming: char) -> String {
    let buffer = buffer.trim();
    let Some(key) = AmountKey::from_char(incoming) else {
        return buffer.to_string();
    };
    apply_key(buffer, key)
}

/// Apply one [`AmountKey`] to `buffer` and return the new text
pub fn apply_key(buffer: &str, key: AmountKey) -> String {
    let transition = AmountState::classify(buffer).accept(key);
    let mut text = buffer.to_string();
    transition.apply_to(&mut text);
    text
}

/// Remove the last character; empty stays empty
pub fn delete_last(buffer: &str) -> String {
    let mut text = buffer.to_string();
    text.pop();
    text
}

/// Reset to the empty buffer
pub fn clear() -> String {
    String::new()
}

/// Check if `buffer` may be emitted as the entered amount.
///
/// False for `""`, `"0"` and `"0."`.
pub fn is_confirmable(buffer: &str) -> bool {
    !buffer.is_empty() && buffer != "0" && buffer != "0."
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_character() {
        assert_eq!(apply("", '.'), "0.");
        assert_eq!(apply("", '0'), "0");
        assert_eq!(apply("", '3'), "3");
    }

    #[test]
    fn test_second_character() {
        assert_eq!(apply("0", '5'), "5");
        assert_eq!(apply("0", '0'), "0");
        assert_eq!(apply("0", '.'), "0.");
        assert_eq!(apply("5", '0'), "50");
        assert_eq!(apply("5", '.'), "5.");
    }

    #[test]
    fn test_fraction_limit() {
        assert_eq!(apply("12.3", '4'), "12.34");
        assert_eq!(apply("12.34", '5'), "12.34");
        assert_eq!(apply("12.3", '.'), "12.3");
    }

    #[test]
    fn test_integer_limit() {
        assert_eq!(apply("123456", '7'), "123456");
        assert_eq!(apply("123456", '.'), "123456.");
        assert_eq!(apply("12345", '6'), "123456");
    }

    #[test]
    fn test_foreign_characters_ignored() {
        assert_eq!(apply("12", 'a'), "12");
        assert_eq!(apply("12", '-'), "12");
        assert_eq!(apply("", ' '), "");
    }

    #[test]
    fn test_out_of_range_digit_key_ignored() {
        assert_eq!(apply_key("1", AmountKey::Digit(42)), "1");
        assert_eq!(apply_key("", AmountKey::Digit(10)), "");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(apply(" 12 ", '3'), "123");
    }

    #[test]
    fn test_delete_last() {
        assert_eq!(delete_last("12.3"), "12.");
        assert_eq!(delete_last("1"), "");
        assert_eq!(delete_last(""), "");
    }

    #[test]
    fn test_clear() {
        assert_eq!(clear(), "");
    }

    #[test]
    fn test_is_confirmable() {
        assert!(!is_confirmable(""));
        assert!(!is_confirmable("0"));
        assert!(!is_confirmable("0."));
        assert!(is_confirmable("0.5"));
        assert!(is_confirmable("0.0"));
        assert!(is_confirmable("12"));
    }
}
