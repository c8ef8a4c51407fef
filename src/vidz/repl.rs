//! Line parsing for the interactive shell.
//!
//! One input line maps to one [`ReplCommand`]. Command words are matched
//! case-insensitively; arguments keep their case. `HELP` and `EXIT` belong
//! to the shell, not to the library contract.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist(String, String),
    ShowAllPlaylists,
    ShowPlaylist(String),
    RemoveFromPlaylist(String, String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    FlagVideo(String, Option<String>),
    AllowVideo(String),
    Help,
    Exit,
}

/// Parses one line. `None` means the line is not a valid command.
pub fn parse_line(line: &str) -> Option<ReplCommand> {
    let mut words = line.split_whitespace();
    let word = words.next()?.to_uppercase();
    let rest: Vec<&str> = words.collect();

    let command = match (word.as_str(), rest.as_slice()) {
        ("NUMBER_OF_VIDEOS", []) => ReplCommand::NumberOfVideos,
        ("SHOW_ALL_VIDEOS", []) => ReplCommand::ShowAllVideos,
        ("PLAY", [id]) => ReplCommand::Play(id.to_string()),
        ("STOP", []) => ReplCommand::Stop,
        ("PLAY_RANDOM", []) => ReplCommand::PlayRandom,
        ("PAUSE", []) => ReplCommand::Pause,
        ("CONTINUE", []) => ReplCommand::Continue,
        ("SHOW_PLAYING", []) => ReplCommand::ShowPlaying,
        ("CREATE_PLAYLIST", [name]) => ReplCommand::CreatePlaylist(name.to_string()),
        ("ADD_TO_PLAYLIST", [name, id]) => {
            ReplCommand::AddToPlaylist(name.to_string(), id.to_string())
        }
        ("SHOW_ALL_PLAYLISTS", []) => ReplCommand::ShowAllPlaylists,
        ("SHOW_PLAYLIST", [name]) => ReplCommand::ShowPlaylist(name.to_string()),
        ("REMOVE_FROM_PLAYLIST", [name, id]) => {
            ReplCommand::RemoveFromPlaylist(name.to_string(), id.to_string())
        }
        ("CLEAR_PLAYLIST", [name]) => ReplCommand::ClearPlaylist(name.to_string()),
        ("DELETE_PLAYLIST", [name]) => ReplCommand::DeletePlaylist(name.to_string()),
        // Search terms may contain spaces ("life at").
        ("SEARCH_VIDEOS", [_, ..]) => ReplCommand::SearchVideos(rest.join(" ")),
        ("SEARCH_VIDEOS_WITH_TAG", [tag]) => {
            ReplCommand::SearchVideosWithTag(tag.to_string())
        }
        ("FLAG_VIDEO", [id]) => ReplCommand::FlagVideo(id.to_string(), None),
        ("FLAG_VIDEO", [id, reason @ ..]) => {
            ReplCommand::FlagVideo(id.to_string(), Some(reason.join(" ")))
        }
        ("ALLOW_VIDEO", [id]) => ReplCommand::AllowVideo(id.to_string()),
        ("HELP", []) => ReplCommand::Help,
        ("EXIT", []) => ReplCommand::Exit,
        _ => return None,
    };
    Some(command)
}

pub fn help_text() -> &'static str {
    "Available commands:
  NUMBER_OF_VIDEOS
  SHOW_ALL_VIDEOS
  PLAY <video_id>
  STOP
  PLAY_RANDOM
  PAUSE
  CONTINUE
  SHOW_PLAYING
  CREATE_PLAYLIST <playlist_name>
  ADD_TO_PLAYLIST <playlist_name> <video_id>
  SHOW_ALL_PLAYLISTS
  SHOW_PLAYLIST <playlist_name>
  REMOVE_FROM_PLAYLIST <playlist_name> <video_id>
  CLEAR_PLAYLIST <playlist_name>
  DELETE_PLAYLIST <playlist_name>
  SEARCH_VIDEOS <search_term>
  SEARCH_VIDEOS_WITH_TAG <tag>
  FLAG_VIDEO <video_id> [reason]
  ALLOW_VIDEO <video_id>
  HELP
  EXIT"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_commands() {
        assert_eq!(parse_line("STOP"), Some(ReplCommand::Stop));
        assert_eq!(parse_line("NUMBER_OF_VIDEOS"), Some(ReplCommand::NumberOfVideos));
    }

    #[test]
    fn command_words_are_case_insensitive() {
        assert_eq!(
            parse_line("play amazing_cats_video_id"),
            Some(ReplCommand::Play("amazing_cats_video_id".to_string()))
        );
    }

    #[test]
    fn arguments_keep_their_case() {
        assert_eq!(
            parse_line("CREATE_PLAYLIST MyMix"),
            Some(ReplCommand::CreatePlaylist("MyMix".to_string()))
        );
    }

    #[test]
    fn flag_reason_is_optional_and_joined() {
        assert_eq!(
            parse_line("FLAG_VIDEO v1"),
            Some(ReplCommand::FlagVideo("v1".to_string(), None))
        );
        assert_eq!(
            parse_line("FLAG_VIDEO v1 dont like it"),
            Some(ReplCommand::FlagVideo(
                "v1".to_string(),
                Some("dont like it".to_string())
            ))
        );
    }

    #[test]
    fn search_terms_may_contain_spaces() {
        assert_eq!(
            parse_line("SEARCH_VIDEOS life at"),
            Some(ReplCommand::SearchVideos("life at".to_string()))
        );
    }

    #[test]
    fn wrong_arity_is_invalid() {
        assert_eq!(parse_line("PLAY"), None);
        assert_eq!(parse_line("STOP now"), None);
        assert_eq!(parse_line("ADD_TO_PLAYLIST mix"), None);
    }

    #[test]
    fn unknown_words_are_invalid() {
        assert_eq!(parse_line("WIBBLE"), None);
    }
}
