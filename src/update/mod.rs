//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod keypad;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::KeypadModel;

#[cfg(debug_assertions)]
use crate::tracing::BufferSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use keypad::update_keypad;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut KeypadModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut KeypadModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Keypad(m) => keypad::update_keypad(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Update with debug tracing, buffer diffing and invariant checks
#[cfg(debug_assertions)]
fn update_traced(model: &mut KeypadModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = BufferSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = BufferSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "buffer", %diff, "state changed");
    }

    model.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Keypad::Digit(7)`
/// - `App::Quit`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Keypad(m) => format!("Keypad::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
