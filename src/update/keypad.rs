//! Keypad message handlers (button taps, programmatic edits)

use tracing::debug;

use crate::commands::Cmd;
use crate::messages::KeypadMsg;
use crate::model::KeypadModel;

/// Handle keypad messages.
///
/// Keys the filter refuses (second point, full integer or fraction part)
/// return `None`: the buffer is untouched and nothing needs redrawing.
pub fn update_keypad(model: &mut KeypadModel, msg: KeypadMsg) -> Option<Cmd> {
    match msg {
        KeypadMsg::Digit(_) | KeypadMsg::Point => {
            let key = msg.amount_key()?;
            let transition = model.buffer.push(key);
            if transition.is_ignored() {
                debug!(target: "buffer", key = ?key, text = model.text(), "key ignored");
                return None;
            }
            Some(Cmd::Redraw)
        }

        KeypadMsg::DeleteBackward => model.buffer.delete_last().map(|_| Cmd::Redraw),

        KeypadMsg::DeleteLongPress => {
            if model.buffer.is_empty() {
                return None;
            }
            model.buffer.clear();
            Some(Cmd::Redraw)
        }

        KeypadMsg::Confirm => {
            if !model.affirm_enabled {
                debug!(target: "buffer", "confirm ignored, button disabled");
                return None;
            }
            if model.buffer.is_confirmable() {
                Some(Cmd::Affirm(model.text().to_string()))
            } else {
                debug!(target: "buffer", text = model.text(), "confirm rejected");
                Some(Cmd::Reject)
            }
        }

        KeypadMsg::SetText(text) => {
            model.buffer.set_content(&text);
            if model.text() != text.trim() {
                debug!(target: "buffer", requested = %text, kept = model.text(), "text filtered");
            }
            Some(Cmd::Redraw)
        }

        KeypadMsg::SetAffirmEnabled(enabled) => {
            model.affirm_enabled = enabled;
            Some(Cmd::Redraw)
        }

        KeypadMsg::Reset => {
            model.buffer.clear();
            Some(Cmd::Redraw)
        }
    }
}
