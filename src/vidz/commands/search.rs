//! Title and tag search.
//!
//! Both searches are case-insensitive substring matches, exclude flagged
//! videos, and sort results by title. The numbered list is followed by a
//! play-one-of-these prompt; the CLI reads the answer and [`pick`] decides
//! whether it selects anything.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::Video;
use crate::session::Session;

use super::helpers::sorted_by_title;

pub fn search_videos(session: &Session, term: &str) -> CmdResult {
    let needle = term.to_lowercase();
    let matches = matching(session, |video| {
        video.title.to_lowercase().contains(&needle)
    });
    results(term, matches)
}

pub fn search_videos_with_tag(session: &Session, tag: &str) -> CmdResult {
    // Tag queries must carry the '#' marker; a bare word never matches,
    // even when a tag would.
    if !tag.contains('#') {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::warning(format!("No search results for {}", tag)));
        return result;
    }

    let needle = tag.to_lowercase();
    let matches = matching(session, |video| {
        video.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    });
    results(tag, matches)
}

/// Maps the follow-up answer onto an index into the result list. Anything
/// that is not an integer in `[1, count]` means "no".
pub fn pick(answer: &str, count: usize) -> Option<usize> {
    match answer.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= count => Some(n - 1),
        _ => None,
    }
}

fn matching<F>(session: &Session, predicate: F) -> Vec<Video>
where
    F: Fn(&Video) -> bool,
{
    let found = session
        .library()
        .all()
        .into_iter()
        .filter(|video| session.flag_reason(&video.id).is_none())
        .filter(|video| predicate(video))
        .collect();
    sorted_by_title(found)
}

fn results(term: &str, matches: Vec<Video>) -> CmdResult {
    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::warning(format!("No search results for {}", term)));
        return result;
    }

    result.add_message(CmdMessage::info(format!("Here are the results for {}:", term)));
    for (i, video) in matches.iter().enumerate() {
        result.add_message(CmdMessage::info(format!("{}) {}", i + 1, video.details())));
    }
    result.add_message(CmdMessage::info(
        "Would you like to play any of the above? If yes, specify the number of the video.",
    ));
    result.add_message(CmdMessage::info(
        "If your answer is not a valid number, we will assume it's a no.",
    ));
    result.with_listed_videos(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::moderation;
    use crate::commands::testutil::{lines, session};

    #[test]
    fn title_search_is_case_insensitive_and_sorted() {
        let session = session();
        let result = search_videos(&session, "CAT");

        assert_eq!(
            lines(&result),
            vec![
                "Here are the results for CAT:",
                "1) Amazing Cats (amazing_cats_video_id) [#cat #animal]",
                "2) Another Cat Video (another_cat_video_id) [#cat #animal]",
                "Would you like to play any of the above? If yes, specify the number of the video.",
                "If your answer is not a valid number, we will assume it's a no.",
            ]
        );
        assert_eq!(result.listed_videos.len(), 2);
    }

    #[test]
    fn no_matches_reports_no_results() {
        let session = session();
        let result = search_videos(&session, "whales");
        assert_eq!(lines(&result), vec!["No search results for whales"]);
        assert!(result.listed_videos.is_empty());
    }

    #[test]
    fn flagged_videos_are_excluded_from_results() {
        let mut session = session();
        moderation::flag_video(&mut session, "amazing_cats_video_id", None);

        let result = search_videos(&session, "cat");
        assert_eq!(result.listed_videos.len(), 1);
        assert_eq!(result.listed_videos[0].id, "another_cat_video_id");
    }

    #[test]
    fn tag_search_without_marker_never_matches() {
        let session = session();
        let result = search_videos_with_tag(&session, "cat");
        assert_eq!(lines(&result), vec!["No search results for cat"]);
    }

    #[test]
    fn tag_search_with_marker_finds_matches() {
        let session = session();
        let result = search_videos_with_tag(&session, "#cat");
        let ids: Vec<_> = result.listed_videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["amazing_cats_video_id", "another_cat_video_id"]);
    }

    #[test]
    fn tag_search_lists_a_video_once_despite_multiple_matching_tags() {
        let session = session();
        // Both "#cat" and "#animal" contain "#".
        let result = search_videos_with_tag(&session, "#");
        let cats = result
            .listed_videos
            .iter()
            .filter(|v| v.id == "amazing_cats_video_id")
            .count();
        assert_eq!(cats, 1);
    }

    #[test]
    fn pick_accepts_only_in_range_numbers() {
        assert_eq!(pick("1", 3), Some(0));
        assert_eq!(pick("3", 3), Some(2));
        assert_eq!(pick(" 2 ", 3), Some(1));
        assert_eq!(pick("0", 3), None);
        assert_eq!(pick("4", 3), None);
        assert_eq!(pick("-1", 3), None);
        assert_eq!(pick("nope", 3), None);
        assert_eq!(pick("", 3), None);
    }
}
