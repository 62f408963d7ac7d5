//! Core types for Folio

pub mod theme;

use serde::{Deserialize, Serialize};

pub use theme::Theme;

/// Icon shown for projects that don't name one
pub const DEFAULT_PROJECT_ICON: &str = "fas fa-folder-open";

/// Kind of a media item within a project gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Lowercase name as it appears in catalog documents
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaKind::Video)
    }
}

/// One image or video reference within a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Image or video
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Relative resource path (or absolute URL after rebasing)
    pub src: String,
}

impl MediaItem {
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.into(),
        }
    }

    pub fn video(src: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.into(),
        }
    }
}

/// One showcased project: metadata plus its ordered media items
///
/// Item order is the navigation order in the lightbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable key, also used to derive a DOM hook
    pub id: String,
    pub title: String,
    /// Font Awesome class list (decorative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub items: Vec<MediaItem>,
}

impl ProjectRecord {
    /// Create a project with no media and no metadata
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: None,
            description: String::new(),
            tags: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Icon class, falling back to the generic folder icon
    pub fn icon_or_default(&self) -> &str {
        self.icon
            .as_deref()
            .filter(|icon| !icon.trim().is_empty())
            .unwrap_or(DEFAULT_PROJECT_ICON)
    }

    pub fn image_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.kind == MediaKind::Image)
            .count()
    }

    pub fn video_count(&self) -> usize {
        self.items.iter().filter(|item| item.kind.is_video()).count()
    }

    /// Projects without media are never shown as cards
    pub fn has_media(&self) -> bool {
        !self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_decodes_lowercase() {
        let item: MediaItem =
            serde_json::from_str(r#"{ "type": "video", "src": "a/Slide.mp4" }"#).unwrap();
        assert_eq!(item, MediaItem::video("a/Slide.mp4"));
        assert_eq!(item.kind.as_str(), "video");
    }

    #[test]
    fn test_project_defaults_for_missing_fields() {
        let project: ProjectRecord =
            serde_json::from_str(r#"{ "id": "x", "title": "X" }"#).unwrap();
        assert_eq!(project.icon_or_default(), DEFAULT_PROJECT_ICON);
        assert!(project.description.is_empty());
        assert!(project.tags.is_empty());
        assert!(!project.has_media());
    }

    #[test]
    fn test_blank_icon_uses_default() {
        let mut project = ProjectRecord::new("x", "X");
        project.icon = Some("   ".to_string());
        assert_eq!(project.icon_or_default(), DEFAULT_PROJECT_ICON);

        project.icon = Some("fas fa-cube".to_string());
        assert_eq!(project.icon_or_default(), "fas fa-cube");
    }

    #[test]
    fn test_media_counts() {
        let mut project = ProjectRecord::new("p", "P");
        project.items = vec![
            MediaItem::image("1.jpg"),
            MediaItem::video("2.mp4"),
            MediaItem::image("3.jpg"),
        ];
        assert_eq!(project.image_count(), 2);
        assert_eq!(project.video_count(), 1);
    }

    #[test]
    fn test_tags_keep_order_and_duplicates() {
        let project: ProjectRecord = serde_json::from_str(
            r#"{ "id": "p", "title": "P", "tags": ["b", "a", "b"] }"#,
        )
        .unwrap();
        assert_eq!(project.tags, vec!["b", "a", "b"]);
    }
}
