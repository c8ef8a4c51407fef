use crate::commands::{CmdMessage, CmdResult};
use crate::session::Session;

use super::helpers::{annotated, sorted_by_title};

pub fn number_of_videos(session: &Session) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} videos in the library",
        session.library().len()
    )));
    result
}

pub fn show_all_videos(session: &Session) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Here's a list of all available videos:"));
    for video in sorted_by_title(session.library().all()) {
        result.add_message(CmdMessage::info(annotated(session, &video)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::moderation;
    use crate::commands::testutil::{lines, session};

    #[test]
    fn reports_video_count() {
        let session = session();
        let result = number_of_videos(&session);
        assert_eq!(lines(&result), vec!["5 videos in the library"]);
    }

    #[test]
    fn lists_videos_sorted_by_title() {
        let session = session();
        let result = show_all_videos(&session);
        assert_eq!(
            lines(&result),
            vec![
                "Here's a list of all available videos:",
                "Amazing Cats (amazing_cats_video_id) [#cat #animal]",
                "Another Cat Video (another_cat_video_id) [#cat #animal]",
                "Funny Dogs (funny_dogs_video_id) [#dog #animal]",
                "Life at Google (life_at_google_video_id) [#google #career]",
                "Video about nothing (nothing_video_id) []",
            ]
        );
    }

    #[test]
    fn flagged_videos_carry_the_reason_annotation() {
        let mut session = session();
        moderation::flag_video(&mut session, "funny_dogs_video_id", Some("dont like dogs"));

        let result = show_all_videos(&session);
        assert!(lines(&result).contains(
            &"Funny Dogs (funny_dogs_video_id) [#dog #animal] - FLAGGED (reason: dont_like_dogs)"
                .to_string()
        ));
    }
}
