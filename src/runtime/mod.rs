//! Runtime module - terminal integration
//!
//! - `session` - line-driven keypad session: keys in, confirmed amounts out

pub mod session;

pub use session::{LineOutcome, Session};
