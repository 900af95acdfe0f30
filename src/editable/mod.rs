//! Amount editing for the keypad.
//!
//! # Architecture
//!
//! - [`AmountKey`]: a digit or the decimal point
//! - [`AmountState`]: explicit buffer shape (`Empty`, `LeadingZero`, `Integer`, `Decimal`)
//! - [`AmountBuffer`]: owned text plus state, mutated only through transitions
//! - [`filter`]: stateless string functions for callers that keep their own text
//!
//! # Example
//!
//! ```
//! use amountpad::editable::{AmountBuffer, AmountKey};
//!
//! let mut buffer = AmountBuffer::new();
//! buffer.push(AmountKey::Point);
//! buffer.push(AmountKey::Digit(5));
//!
//! assert_eq!(buffer.as_str(), "0.5");
//! assert!(buffer.is_confirmable());
//! ```

mod buffer;
mod constraints;
pub mod filter;
mod state;

pub use buffer::AmountBuffer;
pub use constraints::{AmountKey, MAX_FRACTION_DIGITS, MAX_INTEGER_NUMBER};
pub use state::{AmountState, Edit, Transition};
