use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use amountpad::cli::{CliArgs, InputMode};
use amountpad::config::KeypadConfig;
use amountpad::keymap::{load_default_keymap, Keymap};
use amountpad::keypad::Keypad;
use amountpad::runtime::{LineOutcome, Session};

fn main() -> Result<()> {
    let startup = CliArgs::parse().into_config();

    amountpad::tracing::init(startup.file_logging);

    let mut config = KeypadConfig::load();
    if let Some(enabled) = startup.affirm_enabled {
        config.affirm_enabled = enabled;
    }

    let mut keypad = Keypad::from_config(&config);
    if let Some(ref text) = startup.initial_text {
        keypad.set_text(text);
    }

    let keymap = Keymap::with_bindings(load_default_keymap());
    let mut session = Session::new(keypad, keymap, startup.echo || config.echo_state);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match startup.mode {
        InputMode::Script(keys) => {
            session.run_line(&keys, &mut out)?;
        }
        InputMode::Interactive => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("Failed to read from stdin")?;
                if session.run_line(&line, &mut out)? == LineOutcome::Quit {
                    break;
                }
                out.flush()?;
            }
        }
    }

    tracing::debug!(text = session.keypad().text(), "session ended");
    Ok(())
}
