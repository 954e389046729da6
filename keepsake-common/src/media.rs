use serde::{Deserialize, Serialize};

/// Kind of media a gallery item points at
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// A single entry in the gallery
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub src: String,
    pub alt: String,
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    /// Poster frame shown on video thumbnails before playback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl MediaItem {
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            kind: MediaKind::Image,
            poster: None,
        }
    }

    pub fn video(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            kind: MediaKind::Video,
            poster: None,
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }
}

/// The compiled-in gallery contents, in display order.
pub fn default_media() -> Vec<MediaItem> {
    vec![
        MediaItem::image("/images/pic2.jpg", "Memory 2"),
        MediaItem::image("/images/pic4.jpg", "Memory 4"),
        MediaItem::image("/images/pic1.jpg", "Memory 1"),
        MediaItem::image("/images/pic3.jpg", "Memory 3"),
        MediaItem::image("/images/pic5.jpg", "Memory 5"),
        MediaItem::image("/images/pic6.jpg", "Memory 6"),
        MediaItem::image("/images/pic7.jpg", "Memory 7"),
        MediaItem::image("/images/pic8.jpg", "Memory 8"),
        MediaItem::video("/images/vid1.mp4", "Memory 9"),
    ]
}
