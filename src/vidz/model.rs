use serde::{Deserialize, Serialize};

/// A single catalog entry. Videos are immutable once the catalog is loaded
/// and are owned by the [`crate::library::Library`]; everything else in the
/// crate works on clones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique, case-sensitive identifier.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Video {
    pub fn new(id: impl Into<String>, title: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Display form used by every listing: `Title (video_id) [tag1 tag2]`.
    pub fn details(&self) -> String {
        format!("{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

/// A named, ordered collection of videos.
///
/// The playlist itself appends whatever it is given; keeping it free of
/// duplicate ids is the command layer's job.
#[derive(Debug, Clone)]
pub struct Playlist {
    name: String,
    videos: Vec<Video>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: Vec::new(),
        }
    }

    /// The name as originally typed, kept for display.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contained videos in insertion order.
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|v| v.id == video_id)
    }

    pub fn add(&mut self, video: Video) {
        self.videos.push(video);
    }

    /// Removes the first occurrence with the given id, if any.
    pub fn remove(&mut self, video_id: &str) {
        if let Some(pos) = self.videos.iter().position(|v| v.id == video_id) {
            self.videos.remove(pos);
        }
    }

    pub fn clear(&mut self) {
        self.videos.clear();
    }
}
