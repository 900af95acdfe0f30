//! Amount constraints for the keypad input.
//!
//! Limits are fixed at compile time; the keypad does not expose them as settings.

/// Maximum number of digits before the decimal point
pub const MAX_INTEGER_NUMBER: usize = 6;

/// Maximum number of digits after the decimal point
pub const MAX_FRACTION_DIGITS: usize = 2;

/// A single key the amount filter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmountKey {
    /// Digit 0..=9
    Digit(u8),
    /// Decimal point
    Point,
}

impl AmountKey {
    /// Convert a character into a key, None if the character is outside `0-9` and `.`
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(AmountKey::Point),
            '0'..='9' => Some(AmountKey::Digit(ch as u8 - b'0')),
            _ => None,
        }
    }

    /// Digit key, None if `d > 9`
    pub fn digit(d: u8) -> Option<Self> {
        (d <= 9).then_some(AmountKey::Digit(d))
    }

    /// The character this key types into the buffer, None for a digit above 9
    pub fn as_char(self) -> Option<char> {
        match self {
            AmountKey::Digit(d) => char::from_digit(u32::from(d), 10),
            AmountKey::Point => Some('.'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(AmountKey::from_char('0'), Some(AmountKey::Digit(0)));
        assert_eq!(AmountKey::from_char('9'), Some(AmountKey::Digit(9)));
        assert_eq!(AmountKey::from_char('.'), Some(AmountKey::Point));
        assert_eq!(AmountKey::from_char(','), None);
        assert_eq!(AmountKey::from_char('a'), None);
    }

    #[test]
    fn test_digit_bounds() {
        assert_eq!(AmountKey::digit(7), Some(AmountKey::Digit(7)));
        assert_eq!(AmountKey::digit(10), None);
    }

    #[test]
    fn test_as_char() {
        for ch in "0123456789.".chars() {
            assert_eq!(AmountKey::from_char(ch).unwrap().as_char(), Some(ch));
        }
    }

    #[test]
    fn test_out_of_range_digit_has_no_char() {
        assert_eq!(AmountKey::Digit(10).as_char(), None);
        assert_eq!(AmountKey::Digit(u8::MAX).as_char(), None);
    }
}
