//! Moderation flags: blocking and unblocking videos.

use crate::commands::{CmdMessage, CmdResult};
use crate::session::Session;

use super::playback;

const NO_REASON: &str = "Not supplied";

/// Flags a video, stopping it first if it occupies the playback slot.
///
/// The stop happens before any other check, so even a refused flag attempt
/// on the playing video halts playback. With an explicit reason an existing
/// flag is an error; without one the stored reason is silently overwritten
/// (preserved defect, see DESIGN.md).
pub fn flag_video(session: &mut Session, video_id: &str, reason: Option<&str>) -> CmdResult {
    let mut result = CmdResult::default();

    let is_current = session.current().map(|v| v.id == video_id).unwrap_or(false);
    if is_current {
        result
            .messages
            .extend(playback::stop_video(session).messages);
    }

    let title = match session.library().find(video_id) {
        Some(video) => video.title.clone(),
        None => {
            result.add_message(CmdMessage::error("Cannot flag video: Video does not exist"));
            return result;
        }
    };

    match reason {
        Some(reason) => {
            if session.flag_reason(video_id).is_some() {
                result.add_message(CmdMessage::error(
                    "Cannot flag video: Video is already flagged",
                ));
            } else {
                let reason = reason.replace(' ', "_");
                result.add_message(CmdMessage::success(format!(
                    "Successfully flagged video: {} (reason: {})",
                    title, reason
                )));
                session.set_flag(video_id, reason);
            }
        }
        None => {
            session.set_flag(video_id, NO_REASON.to_string());
            result.add_message(CmdMessage::success(format!(
                "Successfully flagged video: {} (reason: {})",
                title, NO_REASON
            )));
        }
    }
    result
}

pub fn allow_video(session: &mut Session, video_id: &str) -> CmdResult {
    let mut result = CmdResult::default();

    let title = match session.library().find(video_id) {
        Some(video) => video.title.clone(),
        None => {
            result.add_message(CmdMessage::error(
                "Cannot remove flag from video: Video does not exist",
            ));
            return result;
        }
    };

    if session.remove_flag(video_id) {
        result.add_message(CmdMessage::success(format!(
            "Successfully removed flag from video: {}",
            title
        )));
    } else {
        result.add_message(CmdMessage::error(
            "Cannot remove flag from video: Video is not flagged",
        ));
    }
    result
}
