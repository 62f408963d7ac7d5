//! Card renderer: projects catalog entries into summary card views.
//!
//! Everything here is a pure function of the catalog. The view layer turns a
//! [`ProjectCard`] into markup and wires its activation to the lightbox.

use crate::lightbox::OpenGallery;
use crate::scroll::reveal_delay;
use crate::types::{MediaItem, MediaKind, ProjectRecord};

/// Shown when the catalog loaded but no project has media
pub const NO_PROJECTS_MESSAGE: &str =
    "No projects found. Add folders to images/Projects/ and run `folio scan` to regenerate the catalog.";

/// Shown when no catalog source could be loaded
pub const CATALOG_MISSING_MESSAGE: &str =
    "Projects data missing. Run `folio scan` to generate it.";

/// Summary view of one project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub id: String,
    /// CSS/DOM-safe identifier derived from `id`
    pub dom_hook: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub tags: Vec<String>,
    pub cover: MediaItem,
    pub cover_alt: String,
    pub cover_icon: &'static str,
    /// e.g. "8 files"
    pub file_label: String,
    /// e.g. "7 images · 1 video"
    pub count_label: String,
    /// Reveal animation delay in milliseconds
    pub reveal_delay_ms: u64,
}

impl ProjectCard {
    /// What activating the card's "Open Gallery" control requests
    pub fn activation(&self) -> OpenGallery {
        OpenGallery::new(self.id.clone())
    }

    pub fn cover_is_video(&self) -> bool {
        self.cover.kind.is_video()
    }
}

/// Contents of the projects grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Cards(Vec<ProjectCard>),
    /// Literal message shown in place of cards
    Placeholder(String),
}

impl GridView {
    /// Grid state after every catalog source failed
    pub fn catalog_missing() -> Self {
        GridView::Placeholder(CATALOG_MISSING_MESSAGE.to_string())
    }

    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            GridView::Cards(cards) => cards,
            GridView::Placeholder(_) => &[],
        }
    }
}

/// Render one project, or `None` when it has no media.
pub fn render_card(project: &ProjectRecord) -> Option<ProjectCard> {
    let cover = project
        .items
        .iter()
        .find(|item| item.kind == MediaKind::Image)
        .or_else(|| project.items.first())?
        .clone();

    let images = project.image_count();
    let videos = project.video_count();
    let cover_icon = if videos > 0 && images == 0 {
        "fas fa-play-circle"
    } else {
        "fas fa-images"
    };

    Some(ProjectCard {
        id: project.id.clone(),
        dom_hook: dom_hook(&project.id),
        title: project.title.clone(),
        icon: project.icon_or_default().to_string(),
        description: project.description.clone(),
        tags: project.tags.clone(),
        cover,
        cover_alt: format!("{} preview", project.title),
        cover_icon,
        file_label: plural(project.items.len(), "file"),
        count_label: count_label(images, videos),
        reveal_delay_ms: 0,
    })
}

/// Render the whole grid, skipping projects without media.
pub fn render_grid(catalog: &[ProjectRecord]) -> GridView {
    let cards: Vec<ProjectCard> = catalog
        .iter()
        .filter_map(render_card)
        .enumerate()
        .map(|(position, mut card)| {
            card.reveal_delay_ms = reveal_delay(position).as_millis() as u64;
            card
        })
        .collect();

    if cards.is_empty() {
        GridView::Placeholder(NO_PROJECTS_MESSAGE.to_string())
    } else {
        GridView::Cards(cards)
    }
}

/// "3 images", "1 video", "7 images · 1 video", or empty
pub fn count_label(images: usize, videos: usize) -> String {
    match (images, videos) {
        (0, 0) => String::new(),
        (i, 0) => plural(i, "image"),
        (0, v) => plural(v, "video"),
        (i, v) => format!("{} · {}", plural(i, "image"), plural(v, "video")),
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

/// Lowercase id with runs of non-alphanumerics collapsed to `-`, prefixed `project-`.
pub fn dom_hook(id: &str) -> String {
    let mut hook = String::from("project-");
    let mut pending_dash = false;
    for ch in id.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !hook.ends_with('-') {
                hook.push('-');
            }
            pending_dash = false;
            hook.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if hook.ends_with('-') {
        hook.pop();
    }
    hook
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(items: Vec<MediaItem>) -> ProjectRecord {
        let mut p = ProjectRecord::new("Presentation Design", "Presentation Design");
        p.tags = vec!["Presentation".into(), "Slideshow".into()];
        p.items = items;
        p
    }

    #[test]
    fn test_count_labels() {
        assert_eq!(count_label(0, 0), "");
        assert_eq!(count_label(1, 0), "1 image");
        assert_eq!(count_label(4, 0), "4 images");
        assert_eq!(count_label(0, 1), "1 video");
        assert_eq!(count_label(0, 2), "2 videos");
        assert_eq!(count_label(7, 1), "7 images · 1 video");
    }

    #[test]
    fn test_cover_prefers_first_image() {
        let card = render_card(&project(vec![
            MediaItem::video("intro.mp4"),
            MediaItem::image("1.jpg"),
            MediaItem::image("2.jpg"),
        ]))
        .unwrap();
        assert_eq!(card.cover, MediaItem::image("1.jpg"));
        assert_eq!(card.cover_icon, "fas fa-images");
        assert_eq!(card.file_label, "3 files");
    }

    #[test]
    fn test_video_only_project() {
        let card = render_card(&project(vec![MediaItem::video("walkthrough.mp4")])).unwrap();
        assert!(card.cover_is_video());
        assert_eq!(card.cover_icon, "fas fa-play-circle");
        assert_eq!(card.file_label, "1 file");
        assert_eq!(card.count_label, "1 video");
    }

    #[test]
    fn test_empty_project_has_no_card() {
        assert!(render_card(&project(vec![])).is_none());
    }

    #[test]
    fn test_card_fields() {
        let card = render_card(&project(vec![MediaItem::image("1.jpg")])).unwrap();
        assert_eq!(card.cover_alt, "Presentation Design preview");
        assert_eq!(card.icon, "fas fa-folder-open");
        assert_eq!(card.tags, vec!["Presentation", "Slideshow"]);
        assert_eq!(card.dom_hook, "project-presentation-design");
    }

    #[test]
    fn test_activation_opens_first_item() {
        let card = render_card(&project(vec![MediaItem::image("1.jpg")])).unwrap();
        let open = card.activation();
        assert_eq!(open.id, "Presentation Design");
        assert_eq!(open.start_index, 0);
    }

    #[test]
    fn test_grid_skips_empty_and_staggers() {
        let mut empty = ProjectRecord::new("empty", "Empty");
        empty.items.clear();
        let mut a = ProjectRecord::new("a", "A");
        a.items.push(MediaItem::image("a.jpg"));
        let mut b = ProjectRecord::new("b", "B");
        b.items.push(MediaItem::image("b.jpg"));

        let grid = render_grid(&[a, empty, b]);
        let cards = grid.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "a");
        assert_eq!(cards[1].id, "b");
        assert_eq!(cards[0].reveal_delay_ms, 0);
        assert_eq!(cards[1].reveal_delay_ms, 80);
    }

    #[test]
    fn test_grid_placeholder_when_nothing_renders() {
        assert_eq!(
            render_grid(&[]),
            GridView::Placeholder(NO_PROJECTS_MESSAGE.to_string())
        );
        assert_eq!(
            render_grid(&[ProjectRecord::new("e", "E")]),
            GridView::Placeholder(NO_PROJECTS_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_dom_hook() {
        assert_eq!(dom_hook("Architectural Portfolio"), "project-architectural-portfolio");
        assert_eq!(dom_hook("  3D -- Renders! "), "project-3d-renders");
        assert_eq!(dom_hook("Training"), "project-training");
        assert_eq!(dom_hook("***"), "project");
    }
}
