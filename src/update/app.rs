//! App message handlers

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::KeypadModel;

/// Handle app messages
pub fn update_app(_model: &mut KeypadModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Quit => Some(Cmd::Quit),
    }
}
