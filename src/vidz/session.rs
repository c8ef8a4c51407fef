//! Mutable simulator state.
//!
//! One [`Session`] owns everything an operation may touch: the playback
//! slot, the flag table, and the playlist set, plus the read-only
//! [`Library`]. All mutation goes through the command layer; execution is
//! strictly sequential, so plain fields are enough. If the session is ever
//! shared across threads, wrap the whole thing in one lock: operations are
//! multi-step and not individually atomic.

use crate::library::Library;
use crate::model::{Playlist, Video};
use std::collections::{BTreeMap, HashMap};

pub struct Session {
    library: Library,
    current: Option<Video>,
    paused: bool,
    /// video id -> reason. A present entry means the video is flagged.
    flags: HashMap<String, String>,
    /// Keyed by lower-cased name, so lookup is case-insensitive and
    /// iteration is already in display order. The name as typed lives on
    /// the Playlist itself.
    playlists: BTreeMap<String, Playlist>,
}

fn playlist_key(name: &str) -> String {
    name.to_lowercase()
}

impl Session {
    pub fn new(library: Library) -> Self {
        Self {
            library,
            current: None,
            paused: false,
            flags: HashMap::new(),
            playlists: BTreeMap::new(),
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn current(&self) -> Option<&Video> {
        self.current.as_ref()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Fills the playback slot and starts unpaused.
    pub(crate) fn set_current(&mut self, video: Video) {
        self.current = Some(video);
        self.paused = false;
    }

    /// Empties the playback slot. Resets `paused` so the
    /// paused-implies-playing invariant holds.
    pub(crate) fn take_current(&mut self) -> Option<Video> {
        self.paused = false;
        self.current.take()
    }

    pub(crate) fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn flag_reason(&self, video_id: &str) -> Option<&str> {
        self.flags.get(video_id).map(|r| r.as_str())
    }

    pub(crate) fn set_flag(&mut self, video_id: &str, reason: String) {
        self.flags.insert(video_id.to_string(), reason);
    }

    pub(crate) fn remove_flag(&mut self, video_id: &str) -> bool {
        self.flags.remove(video_id).is_some()
    }

    /// Case-insensitive playlist lookup.
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&playlist_key(name))
    }

    pub(crate) fn playlist_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&playlist_key(name))
    }

    pub(crate) fn insert_playlist(&mut self, playlist: Playlist) {
        self.playlists
            .insert(playlist_key(playlist.name()), playlist);
    }

    pub(crate) fn remove_playlist(&mut self, name: &str) -> bool {
        self.playlists.remove(&playlist_key(name)).is_some()
    }

    /// Playlists in case-insensitive alphabetical order.
    pub fn playlists(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }
}
