use crate::model::Video;
use crate::session::Session;

/// Details line with the moderation annotation appended when flagged.
pub fn annotated(session: &Session, video: &Video) -> String {
    match session.flag_reason(&video.id) {
        Some(reason) => format!("{} - FLAGGED (reason: {})", video.details(), reason),
        None => video.details(),
    }
}

/// Sorts by title ascending. The sort is stable, so videos with equal
/// titles keep their library order.
pub fn sorted_by_title(mut videos: Vec<Video>) -> Vec<Video> {
    videos.sort_by(|a, b| a.title.cmp(&b.title));
    videos
}
