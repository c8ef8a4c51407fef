//! # API Facade
//!
//! `VidzApi` is a thin facade over the command layer: the single entry
//! point for every operation, regardless of the UI driving it. It owns the
//! [`Session`] and dispatches; business logic lives in `commands/*.rs` and
//! presentation lives with the caller.
//!
//! The facade never performs I/O. The one interactive wrinkle, the
//! play-one-of-these follow-up after a search, is handled by returning the
//! matches in the [`CmdResult`] and letting the caller hand the answer to
//! [`VidzApi::select_search_result`].

use rand::thread_rng;

use crate::commands::{self, CmdResult};
use crate::library::Library;
use crate::model::Video;
use crate::session::Session;

pub struct VidzApi {
    session: Session,
}

impl VidzApi {
    pub fn new(library: Library) -> Self {
        Self {
            session: Session::new(library),
        }
    }

    /// Read-only view of the underlying state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn number_of_videos(&self) -> CmdResult {
        commands::listing::number_of_videos(&self.session)
    }

    pub fn show_all_videos(&self) -> CmdResult {
        commands::listing::show_all_videos(&self.session)
    }

    pub fn play_video(&mut self, video_id: &str) -> CmdResult {
        commands::playback::play_video(&mut self.session, video_id)
    }

    pub fn stop_video(&mut self) -> CmdResult {
        commands::playback::stop_video(&mut self.session)
    }

    pub fn play_random_video(&mut self) -> CmdResult {
        commands::playback::play_random_video(&mut self.session, &mut thread_rng())
    }

    pub fn pause_video(&mut self) -> CmdResult {
        commands::playback::pause_video(&mut self.session)
    }

    pub fn continue_video(&mut self) -> CmdResult {
        commands::playback::continue_video(&mut self.session)
    }

    pub fn show_playing(&self) -> CmdResult {
        commands::playback::show_playing(&self.session)
    }

    pub fn create_playlist(&mut self, name: &str) -> CmdResult {
        commands::playlists::create_playlist(&mut self.session, name)
    }

    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> CmdResult {
        commands::playlists::add_to_playlist(&mut self.session, name, video_id)
    }

    pub fn show_all_playlists(&self) -> CmdResult {
        commands::playlists::show_all_playlists(&self.session)
    }

    pub fn show_playlist(&self, name: &str) -> CmdResult {
        commands::playlists::show_playlist(&self.session, name)
    }

    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> CmdResult {
        commands::playlists::remove_from_playlist(&mut self.session, name, video_id)
    }

    pub fn clear_playlist(&mut self, name: &str) -> CmdResult {
        commands::playlists::clear_playlist(&mut self.session, name)
    }

    pub fn delete_playlist(&mut self, name: &str) -> CmdResult {
        commands::playlists::delete_playlist(&mut self.session, name)
    }

    pub fn search_videos(&self, term: &str) -> CmdResult {
        commands::search::search_videos(&self.session, term)
    }

    pub fn search_videos_with_tag(&self, tag: &str) -> CmdResult {
        commands::search::search_videos_with_tag(&self.session, tag)
    }

    /// Plays the search result the answer selects, if it selects one.
    /// A non-numeric or out-of-range answer means "no" and returns `None`.
    pub fn select_search_result(&mut self, matches: &[Video], answer: &str) -> Option<CmdResult> {
        commands::search::pick(answer, matches.len()).map(|i| self.play_video(&matches[i].id))
    }

    pub fn flag_video(&mut self, video_id: &str, reason: Option<&str>) -> CmdResult {
        commands::moderation::flag_video(&mut self.session, video_id, reason)
    }

    pub fn allow_video(&mut self, video_id: &str) -> CmdResult {
        commands::moderation::allow_video(&mut self.session, video_id)
    }
}
