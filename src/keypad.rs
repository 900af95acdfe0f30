//! Keypad widget - the amount keypad as a host toolkit sees it.
//!
//! Wraps [`KeypadModel`] and the update loop behind tap-shaped methods, and
//! delivers [`Cmd::Affirm`] / [`Cmd::Reject`] to the registered listener.
//! Drawing the buttons and playing the shake animation stay with the host.

use crate::commands::Cmd;
use crate::config::KeypadConfig;
use crate::messages::{KeypadMsg, Msg};
use crate::model::KeypadModel;
use crate::update::update;

/// Receives confirm outcomes from the keypad
pub trait AffirmListener {
    /// Confirm tapped on a valid amount; `text` is the exact buffer text
    fn on_affirm(&mut self, text: &str);

    /// Confirm tapped on an empty, `"0"` or `"0."` buffer
    fn on_reject(&mut self) {}
}

impl<F: FnMut(&str)> AffirmListener for F {
    fn on_affirm(&mut self, text: &str) {
        self(text)
    }
}

/// Numeric keypad bound to one amount buffer
pub struct Keypad {
    model: KeypadModel,
    listener: Option<Box<dyn AffirmListener>>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Keypad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypad")
            .field("model", &self.model)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Keypad {
    pub fn new() -> Self {
        Self {
            model: KeypadModel::new(),
            listener: None,
        }
    }

    pub fn from_config(config: &KeypadConfig) -> Self {
        Self {
            model: KeypadModel::from_config(config),
            listener: None,
        }
    }

    pub fn model(&self) -> &KeypadModel {
        &self.model
    }

    /// Current buffer text
    pub fn text(&self) -> &str {
        self.model.text()
    }

    pub fn is_affirm_enabled(&self) -> bool {
        self.model.affirm_enabled
    }

    pub fn set_affirm_listener<L: AffirmListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_affirm_listener(&mut self) {
        self.listener = None;
    }

    /// Enable or disable the confirm button
    pub fn set_affirm_enabled(&mut self, enabled: bool) {
        self.dispatch(Msg::Keypad(KeypadMsg::SetAffirmEnabled(enabled)));
    }

    /// Replace the buffer; the text is filtered like typed input
    pub fn set_text(&mut self, text: &str) {
        self.dispatch(Msg::Keypad(KeypadMsg::SetText(text.to_string())));
    }

    /// Empty the buffer
    pub fn reset(&mut self) {
        self.dispatch(Msg::Keypad(KeypadMsg::Reset));
    }

    /// Digit button tapped. Values above 9 are ignored.
    pub fn digit_tapped(&mut self, d: u8) -> Option<Cmd> {
        self.dispatch(Msg::digit(d))
    }

    pub fn point_tapped(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::point())
    }

    pub fn delete_tapped(&mut self) -> Option<Cmd> {
        self.dispatch(Msg::Keypad(KeypadMsg::DeleteBackward))
    }

    /// Delete button long-pressed: clears a non-empty buffer.
    ///
    /// Always returns `false`, the long press is never consumed and the host
    /// may still run its own long-press handling.
    pub fn delete_long_pressed(&mut self) -> bool {
        self.dispatch(Msg::Keypad(KeypadMsg::DeleteLongPress));
        false
    }

    /// Confirm button tapped.
    ///
    /// Without a listener, or with the button disabled, nothing happens.
    pub fn confirm_tapped(&mut self) -> Option<Cmd> {
        if self.listener.is_none() {
            tracing::debug!("confirm tapped without a listener");
            return None;
        }
        self.dispatch(Msg::confirm())
    }

    /// Run one message through the update loop and deliver listener commands.
    ///
    /// Returns the command so the host can redraw or quit.
    pub fn dispatch(&mut self, msg: Msg) -> Option<Cmd> {
        let cmd = update(&mut self.model, msg)?;
        self.deliver(&cmd);
        Some(cmd)
    }

    fn deliver(&mut self, cmd: &Cmd) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        match cmd {
            Cmd::Affirm(text) => {
                tracing::info!(amount = %text, "amount confirmed");
                listener.on_affirm(text);
            }
            Cmd::Reject => listener.on_reject(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        affirmed: Vec<String>,
        rejected: usize,
    }

    struct SharedRecorder(Rc<RefCell<Recorder>>);

    impl AffirmListener for SharedRecorder {
        fn on_affirm(&mut self, text: &str) {
            self.0.borrow_mut().affirmed.push(text.to_string());
        }

        fn on_reject(&mut self) {
            self.0.borrow_mut().rejected += 1;
        }
    }

    fn keypad_with_recorder() -> (Keypad, Rc<RefCell<Recorder>>) {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut keypad = Keypad::new();
        keypad.set_affirm_listener(SharedRecorder(Rc::clone(&recorder)));
        (keypad, recorder)
    }

    #[test]
    fn test_affirm_delivers_text() {
        let (mut keypad, recorder) = keypad_with_recorder();
        keypad.digit_tapped(4);
        keypad.point_tapped();
        keypad.digit_tapped(5);
        keypad.confirm_tapped();
        assert_eq!(recorder.borrow().affirmed, vec!["4.5".to_string()]);
        assert_eq!(recorder.borrow().rejected, 0);
    }

    #[test]
    fn test_reject_on_zero_point() {
        let (mut keypad, recorder) = keypad_with_recorder();
        keypad.point_tapped();
        assert_eq!(keypad.confirm_tapped(), Some(Cmd::Reject));
        assert_eq!(keypad.text(), "0.");
        assert!(recorder.borrow().affirmed.is_empty());
        assert_eq!(recorder.borrow().rejected, 1);
    }

    #[test]
    fn test_no_listener_no_confirm() {
        let mut keypad = Keypad::new();
        keypad.digit_tapped(1);
        assert_eq!(keypad.confirm_tapped(), None);
    }

    #[test]
    fn test_disabled_confirm_is_silent() {
        let (mut keypad, recorder) = keypad_with_recorder();
        keypad.set_affirm_enabled(false);
        keypad.digit_tapped(9);
        assert_eq!(keypad.confirm_tapped(), None);
        assert!(recorder.borrow().affirmed.is_empty());
        assert_eq!(recorder.borrow().rejected, 0);
    }

    #[test]
    fn test_closure_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut keypad = Keypad::new();
        keypad.set_affirm_listener(move |text: &str| sink.borrow_mut().push(text.to_string()));
        keypad.set_text("88");
        keypad.confirm_tapped();
        assert_eq!(*seen.borrow(), vec!["88".to_string()]);
    }

    #[test]
    fn test_long_press_never_consumed() {
        let mut keypad = Keypad::new();
        keypad.set_text("123");
        assert!(!keypad.delete_long_pressed());
        assert_eq!(keypad.text(), "");
        assert!(!keypad.delete_long_pressed());
    }
}
