//! Line-driven keypad session
//!
//! Each input line is split into keystrokes, resolved through the keymap and
//! dispatched to the keypad. Confirm outcomes arrive through the keypad's
//! listener and are written to the output as `affirm: <text>` or `reject`.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use anyhow::Result;

use crate::commands::Cmd;
use crate::keymap::{keystrokes_from_line, Keymap};
use crate::keypad::{AffirmListener, Keypad};

/// Confirm outcome collected from the listener
#[derive(Debug, Clone, PartialEq, Eq)]
enum Outcome {
    Affirmed(String),
    Rejected,
}

#[derive(Clone, Default)]
struct OutcomeQueue(Rc<RefCell<Vec<Outcome>>>);

impl AffirmListener for OutcomeQueue {
    fn on_affirm(&mut self, text: &str) {
        self.0.borrow_mut().push(Outcome::Affirmed(text.to_string()));
    }

    fn on_reject(&mut self) {
        self.0.borrow_mut().push(Outcome::Rejected);
    }
}

/// What the caller should do after a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

pub struct Session {
    keypad: Keypad,
    keymap: Keymap,
    outcomes: OutcomeQueue,
    echo: bool,
}

impl Session {
    pub fn new(mut keypad: Keypad, keymap: Keymap, echo: bool) -> Self {
        let outcomes = OutcomeQueue::default();
        keypad.set_affirm_listener(outcomes.clone());
        Self {
            keypad,
            keymap,
            outcomes,
            echo,
        }
    }

    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Process one line of keys, writing confirm outcomes to `out`.
    ///
    /// Malformed key names are reported on `out` and the line is skipped;
    /// only write failures are errors.
    pub fn run_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<LineOutcome> {
        let strokes = match keystrokes_from_line(line) {
            Ok(strokes) => strokes,
            Err(e) => {
                tracing::warn!("Skipping line {:?}: {}", line, e);
                writeln!(out, "error: {}", e)?;
                return Ok(LineOutcome::Continue);
            }
        };

        let mut outcome = LineOutcome::Continue;
        for stroke in strokes {
            let Some(command) = self.keymap.lookup(&stroke) else {
                tracing::debug!("No binding for {}", stroke);
                continue;
            };
            let Some(msg) = command.to_msg() else {
                continue;
            };

            let cmd = self.keypad.dispatch(msg);
            self.flush_outcomes(out)?;

            if cmd == Some(Cmd::Quit) {
                outcome = LineOutcome::Quit;
                break;
            }
        }

        if self.echo {
            writeln!(out, "[{}]", self.keypad.text())?;
        }
        Ok(outcome)
    }

    fn flush_outcomes<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let drained: Vec<Outcome> = self.outcomes.0.borrow_mut().drain(..).collect();
        for outcome in drained {
            match outcome {
                Outcome::Affirmed(text) => writeln!(out, "affirm: {}", text)?,
                Outcome::Rejected => writeln!(out, "reject")?,
            }
        }
        Ok(())
    }
}
