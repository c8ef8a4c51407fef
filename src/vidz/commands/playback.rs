//! Playback operations: the single playback slot and its transitions.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::commands::{CmdMessage, CmdResult};
use crate::model::Video;
use crate::session::Session;

/// Plays a video by id.
///
/// Check order is part of the contract: the stop notice for whatever is
/// playing goes out (and the slot is emptied) before the flag and existence
/// checks, so a refused play still leaves nothing playing.
pub fn play_video(session: &mut Session, video_id: &str) -> CmdResult {
    let mut result = CmdResult::default();

    if let Some(previous) = session.take_current() {
        result.add_message(CmdMessage::success(format!(
            "Stopping video: {}",
            previous.title
        )));
    }

    if let Some(reason) = session.flag_reason(video_id) {
        result.add_message(CmdMessage::error(format!(
            "Cannot play video: Video is currently flagged (reason: {})",
            reason
        )));
        return result;
    }

    let video = match session.library().find(video_id) {
        Some(video) => video.clone(),
        None => {
            result.add_message(CmdMessage::error(
                "Cannot play video: Video does not exist",
            ));
            return result;
        }
    };

    result.add_message(CmdMessage::success(format!(
        "Playing video: {}",
        video.title
    )));
    session.set_current(video);
    result
}

pub fn stop_video(session: &mut Session) -> CmdResult {
    let mut result = CmdResult::default();
    match session.take_current() {
        Some(video) => result.add_message(CmdMessage::success(format!(
            "Stopping video: {}",
            video.title
        ))),
        None => result.add_message(CmdMessage::error(
            "Cannot stop video: No video is currently playing",
        )),
    }
    result
}

/// Picks an unflagged video uniformly at random and delegates to
/// [`play_video`]. The RNG is injected so tests can be deterministic.
pub fn play_random_video<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> CmdResult {
    let candidates: Vec<Video> = session
        .library()
        .all()
        .into_iter()
        .filter(|v| session.flag_reason(&v.id).is_none())
        .collect();

    match candidates.choose(rng) {
        Some(video) => {
            let video_id = video.id.clone();
            play_video(session, &video_id)
        }
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::warning("No videos available"));
            result
        }
    }
}

pub fn pause_video(session: &mut Session) -> CmdResult {
    let mut result = CmdResult::default();
    let title = match session.current() {
        Some(video) => video.title.clone(),
        None => {
            result.add_message(CmdMessage::error(
                "Cannot pause video: No video is currently playing",
            ));
            return result;
        }
    };

    if session.is_paused() {
        result.add_message(CmdMessage::warning(format!("Video already paused: {}", title)));
    } else {
        session.set_paused(true);
        result.add_message(CmdMessage::success(format!("Pausing video: {}", title)));
    }
    result
}

pub fn continue_video(session: &mut Session) -> CmdResult {
    let mut result = CmdResult::default();
    let title = match session.current() {
        Some(video) => video.title.clone(),
        None => {
            result.add_message(CmdMessage::error(
                "Cannot continue video: No video is currently playing",
            ));
            return result;
        }
    };

    if session.is_paused() {
        session.set_paused(false);
        result.add_message(CmdMessage::success(format!("Continuing video: {}", title)));
    } else {
        result.add_message(CmdMessage::error(
            "Cannot continue video: Video is not paused",
        ));
    }
    result
}

pub fn show_playing(session: &Session) -> CmdResult {
    let mut result = CmdResult::default();
    match session.current() {
        Some(video) if session.is_paused() => result.add_message(CmdMessage::info(format!(
            "Currently playing: {} - PAUSED",
            video.details()
        ))),
        Some(video) => result.add_message(CmdMessage::info(format!(
            "Currently playing: {}",
            video.details()
        ))),
        None => result.add_message(CmdMessage::info("No video is currently playing")),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::moderation;
    use crate::commands::testutil::{lines, session};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn playing_sets_current_and_unpauses() {
        let mut session = session();
        let result = play_video(&mut session, "amazing_cats_video_id");

        assert_eq!(lines(&result), vec!["Playing video: Amazing Cats"]);
        assert_eq!(session.current().unwrap().id, "amazing_cats_video_id");
        assert!(!session.is_paused());
    }

    #[test]
    fn playing_missing_id_reports_not_found() {
        let mut session = session();
        let result = play_video(&mut session, "does_not_exist");
        assert_eq!(lines(&result), vec!["Cannot play video: Video does not exist"]);
        assert!(session.current().is_none());
    }

    #[test]
    fn replay_stops_the_previous_video_first() {
        let mut session = session();
        play_video(&mut session, "amazing_cats_video_id");
        let result = play_video(&mut session, "amazing_cats_video_id");

        assert_eq!(
            lines(&result),
            vec![
                "Stopping video: Amazing Cats",
                "Playing video: Amazing Cats",
            ]
        );
    }

    #[test]
    fn playing_a_flagged_video_is_refused() {
        let mut session = session();
        moderation::flag_video(&mut session, "funny_dogs_video_id", Some("barking"));

        let result = play_video(&mut session, "funny_dogs_video_id");
        assert_eq!(
            lines(&result),
            vec!["Cannot play video: Video is currently flagged (reason: barking)"]
        );
        assert!(session.current().is_none());
    }

    // The stop notice precedes the flag check, and the slot stays empty
    // after the refusal.
    #[test]
    fn refused_play_still_stops_whatever_was_playing() {
        let mut session = session();
        play_video(&mut session, "amazing_cats_video_id");
        moderation::flag_video(&mut session, "funny_dogs_video_id", Some("barking"));

        let result = play_video(&mut session, "funny_dogs_video_id");
        assert_eq!(
            lines(&result),
            vec![
                "Stopping video: Amazing Cats",
                "Cannot play video: Video is currently flagged (reason: barking)",
            ]
        );
        assert!(session.current().is_none());
    }

    #[test]
    fn stop_without_current_reports_nothing_playing() {
        let mut session = session();
        let result = stop_video(&mut session);
        assert_eq!(
            lines(&result),
            vec!["Cannot stop video: No video is currently playing"]
        );
    }

    #[test]
    fn stop_clears_the_playback_slot() {
        let mut session = session();
        play_video(&mut session, "amazing_cats_video_id");
        let result = stop_video(&mut session);

        assert_eq!(lines(&result), vec!["Stopping video: Amazing Cats"]);
        assert!(session.current().is_none());
    }

    #[test]
    fn pause_twice_reports_already_paused_and_stays_paused() {
        let mut session = session();
        play_video(&mut session, "amazing_cats_video_id");
        pause_video(&mut session);
        let result = pause_video(&mut session);

        assert_eq!(lines(&result), vec!["Video already paused: Amazing Cats"]);
        assert!(session.is_paused());
    }

    #[test]
    fn pause_without_current_reports_nothing_playing() {
        let mut session = session();
        let result = pause_video(&mut session);
        assert_eq!(
            lines(&result),
            vec!["Cannot pause video: No video is currently playing"]
        );
    }

    #[test]
    fn continue_requires_a_paused_video() {
        let mut session = session();
        play_video(&mut session, "amazing_cats_video_id");
        let result = continue_video(&mut session);

        assert_eq!(lines(&result), vec!["Cannot continue video: Video is not paused"]);
        assert!(!session.is_paused());
    }

    #[test]
    fn continue_resumes_a_paused_video() {
        let mut session = session();
        play_video(&mut session, "amazing_cats_video_id");
        pause_video(&mut session);
        let result = continue_video(&mut session);

        assert_eq!(lines(&result), vec!["Continuing video: Amazing Cats"]);
        assert!(!session.is_paused());
    }

    #[test]
    fn continue_without_current_reports_nothing_playing() {
        let mut session = session();
        let result = continue_video(&mut session);
        assert_eq!(
            lines(&result),
            vec!["Cannot continue video: No video is currently playing"]
        );
    }

    #[test]
    fn show_playing_includes_paused_suffix() {
        let mut session = session();
        play_video(&mut session, "amazing_cats_video_id");
        pause_video(&mut session);

        let result = show_playing(&session);
        assert_eq!(
            lines(&result),
            vec!["Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal] - PAUSED"]
        );
    }

    #[test]
    fn show_playing_without_current() {
        let session = session();
        let result = show_playing(&session);
        assert_eq!(lines(&result), vec!["No video is currently playing"]);
    }

    #[test]
    fn play_random_skips_flagged_videos() {
        let mut session = session();
        for id in [
            "amazing_cats_video_id",
            "another_cat_video_id",
            "funny_dogs_video_id",
            "life_at_google_video_id",
        ] {
            moderation::flag_video(&mut session, id, None);
        }

        let mut rng = SmallRng::seed_from_u64(7);
        let result = play_random_video(&mut session, &mut rng);
        assert_eq!(lines(&result), vec!["Playing video: Video about nothing"]);
    }

    #[test]
    fn play_random_with_everything_flagged_reports_none_available() {
        let mut session = session();
        for video in session.library().all() {
            moderation::flag_video(&mut session, &video.id, None);
        }

        let mut rng = SmallRng::seed_from_u64(7);
        let result = play_random_video(&mut session, &mut rng);
        assert_eq!(lines(&result), vec!["No videos available"]);
    }
}
