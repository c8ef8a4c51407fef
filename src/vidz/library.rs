//! The fixed, read-only video catalog.
//!
//! A [`Library`] is populated exactly once, either from the built-in
//! default catalog or from a JSON file (an array of `{id, title, tags}`
//! objects). It hands out snapshot copies so callers can never mutate the
//! catalog behind its back.

use crate::error::{Result, VidzError};
use crate::model::Video;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

static BUILTIN_CATALOG: Lazy<Vec<Video>> = Lazy::new(|| {
    serde_json::from_str(include_str!("default_catalog.json"))
        .expect("built-in catalog is valid JSON")
});

pub struct Library {
    videos: Vec<Video>,
}

impl Library {
    /// Builds a library, rejecting duplicate video ids.
    pub fn new(videos: Vec<Video>) -> Result<Self> {
        let mut seen = HashSet::new();
        for video in &videos {
            if !seen.insert(video.id.as_str()) {
                return Err(VidzError::Catalog(format!(
                    "duplicate video id: {}",
                    video.id
                )));
            }
        }
        Ok(Self { videos })
    }

    /// The default catalog compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            videos: BUILTIN_CATALOG.clone(),
        }
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let videos: Vec<Video> = serde_json::from_str(&content)?;
        Self::new(videos)
    }

    /// Snapshot copy of the whole catalog, in load order.
    pub fn all(&self) -> Vec<Video> {
        self.videos.clone()
    }

    /// Exact, case-sensitive id lookup. Linear scan; the catalog is small.
    pub fn find(&self, video_id: &str) -> Option<&Video> {
        self.videos.iter().find(|v| v.id == video_id)
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
