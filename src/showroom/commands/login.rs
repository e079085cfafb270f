use crate::commands::{CmdMessage, CmdResult};
use crate::session::AdminSession;

pub fn run(session: &mut AdminSession, candidate: &str) -> CmdResult {
    let mut result = CmdResult::default();
    if session.authenticate(candidate) {
        result.add_message(CmdMessage::success("Logged in as admin."));
    } else {
        result.add_message(CmdMessage::error("Invalid password"));
    }
    result
}
