use serde::{Deserialize, Serialize};

/// A preview rendered under a paragraph for one URL found in its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Card {
    YouTubeEmbed { video_id: String },
    VimeoEmbed { video_id: String },
    /// Direct link to an image file.
    ImageCard { url: String },
    /// Direct link to a video file.
    VideoCard { url: String },
    /// Anything else. `domain` has a leading `www.` removed.
    LinkCard { url: String, domain: String },
}

impl Card {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Card::YouTubeEmbed { .. } => "YouTubeEmbed",
            Card::VimeoEmbed { .. } => "VimeoEmbed",
            Card::ImageCard { .. } => "ImageCard",
            Card::VideoCard { .. } => "VideoCard",
            Card::LinkCard { .. } => "LinkCard",
        }
    }
}
