use crate::model::Video;

pub mod helpers;
pub mod listing;
pub mod moderation;
pub mod playback;
pub mod playlists;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What an operation produced: messages in emission order (the text is part
/// of the external contract) and, for the search operations, the matched
/// videos in display order.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub listed_videos: Vec<Video>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_videos(mut self, videos: Vec<Video>) -> Self {
        self.listed_videos = videos;
        self
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::CmdResult;
    use crate::library::Library;
    use crate::session::Session;

    pub fn session() -> Session {
        Session::new(Library::builtin())
    }

    pub fn lines(result: &CmdResult) -> Vec<String> {
        result.messages.iter().map(|m| m.content.clone()).collect()
    }
}
