//! Adapter from typed text lines to keystrokes
//!
//! The terminal driver reads whole lines, so named keys are written in angle
//! brackets: `12.5<enter>`, `<shift+backspace>`. Plain whitespace separates
//! nothing and is skipped; use `<space>` for the space key.

use super::config::{parse_key_string, KeymapError};
use super::types::Keystroke;

/// Split a line into keystrokes
pub fn keystrokes_from_line(line: &str) -> Result<Vec<Keystroke>, KeymapError> {
    let mut strokes = Vec::new();
    let mut chars = line.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '<' => {
                let mut name = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '>' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if name.is_empty() || !closed {
                    return Err(KeymapError::InvalidKey(format!(
                        "Empty or unterminated key name in: {}",
                        line
                    )));
                }
                strokes.push(parse_key_string(&name)?);
            }
            c if c.is_whitespace() => {}
            c => strokes.push(Keystroke::char(c)),
        }
    }

    Ok(strokes)
}
