//! Lightbox session: the modal viewer over one project's media items.
//!
//! ## State machine
//!
//! ```text
//!            open(id, i)  [id known]
//!   Closed ─────────────────────────▶ Open(id, clamp(i))
//!     ▲                                   │  show_slide(j) / next / prev
//!     │   close / backdrop / Escape       ▼
//!     └──────────────────────────── Open(id, clamp(j))
//! ```
//!
//! Mutators never fail. Unknown ids are ignored and indices are clamped to
//! `[0, len - 1]`; `next`/`prev` stop at the ends instead of wrapping.
//!
//! Each mutator returns the ordered [`StageEffect`]s the view layer must
//! perform. A video on stage is always paused before the stage changes.
//! [`Lightbox::view`] is a pure projection of the current state.

use crate::gallery::GalleryIndex;
use crate::types::{MediaItem, MediaKind, ProjectRecord};

/// Request to open a gallery, as issued by a card's activation control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGallery {
    pub id: String,
    pub start_index: usize,
}

impl OpenGallery {
    /// Open `id` at its first item
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            start_index: 0,
        }
    }

    pub fn at(id: impl Into<String>, start_index: usize) -> Self {
        Self {
            id: id.into(),
            start_index,
        }
    }
}

/// Lightbox session state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open { gallery_id: String, index: usize },
}

/// Content of the stage for the active item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageView {
    /// Image scaled to fit the stage
    Image { src: String, alt: String },
    /// Video fitted to the stage, playing with controls
    Video {
        src: String,
        controls: bool,
        autoplay: bool,
    },
}

impl StageView {
    fn for_item(item: &MediaItem, title: &str, index: usize) -> Self {
        match item.kind {
            MediaKind::Image => StageView::Image {
                src: item.src.clone(),
                alt: format!("{} - {}", title, index + 1),
            },
            MediaKind::Video => StageView::Video {
                src: item.src.clone(),
                controls: true,
                autoplay: true,
            },
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, StageView::Video { .. })
    }

    pub fn src(&self) -> &str {
        match self {
            StageView::Image { src, .. } | StageView::Video { src, .. } => src,
        }
    }
}

/// Imperative side effect for the view layer, in emission order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEffect {
    /// Prevent the page behind the overlay from scrolling
    LockPageScroll,
    UnlockPageScroll,
    /// Stop playback of the video currently on stage
    PauseVideo,
    /// Replace the stage content
    ShowStage(StageView),
    /// Bring the thumbnail at this index into view in the strip
    ScrollThumbIntoView(usize),
}

/// One entry of the thumbnail strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbView {
    pub index: usize,
    pub kind: MediaKind,
    pub src: String,
    pub active: bool,
}

impl ThumbView {
    /// Videos get a generic play indicator instead of a preview
    pub fn shows_play_indicator(&self) -> bool {
        self.kind.is_video()
    }
}

/// Everything the open lightbox displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub gallery_id: String,
    pub title: String,
    /// "{index + 1} / {len}"
    pub counter: String,
    pub index: usize,
    pub len: usize,
    pub stage: StageView,
    pub thumbs: Vec<ThumbView>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// Keyboard input the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(LightboxKey::Escape),
            "ArrowLeft" => Some(LightboxKey::ArrowLeft),
            "ArrowRight" => Some(LightboxKey::ArrowRight),
            _ => None,
        }
    }
}

/// The lightbox session object.
///
/// Owns the gallery index it resolves ids against. Constructed once by the
/// view layer; its methods are the only way to change the session state.
#[derive(Debug, Clone, Default)]
pub struct Lightbox {
    gallery: GalleryIndex,
    state: LightboxState,
}

impl Lightbox {
    pub fn new(gallery: GalleryIndex) -> Self {
        Self {
            gallery,
            state: LightboxState::Closed,
        }
    }

    pub fn gallery(&self) -> &GalleryIndex {
        &self.gallery
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open { .. })
    }

    /// Open project and active index, if open
    pub fn current(&self) -> Option<(&ProjectRecord, usize)> {
        match &self.state {
            LightboxState::Closed => None,
            LightboxState::Open { gallery_id, index } => {
                self.gallery.get(gallery_id).map(|project| (project, *index))
            }
        }
    }

    /// Swap in a freshly loaded index. An open session is closed first.
    pub fn replace_gallery(&mut self, gallery: GalleryIndex) -> Vec<StageEffect> {
        let effects = self.close();
        self.gallery = gallery;
        effects
    }

    /// Open `id` at `start_index` (clamped). No-op when the id is unknown.
    pub fn open(&mut self, id: &str, start_index: usize) -> Vec<StageEffect> {
        let Some(project) = self.gallery.get(id) else {
            tracing::debug!(id = %id, "ignoring open for unknown gallery");
            return Vec::new();
        };
        if project.items.is_empty() {
            tracing::debug!(id = %id, "ignoring open for gallery without media");
            return Vec::new();
        }

        let index = start_index.min(project.items.len() - 1);
        let stage = StageView::for_item(&project.items[index], &project.title, index);

        let mut effects = Vec::with_capacity(4);
        if self.current_is_video() {
            effects.push(StageEffect::PauseVideo);
        }
        if !self.is_open() {
            effects.push(StageEffect::LockPageScroll);
        }
        effects.push(StageEffect::ShowStage(stage));
        effects.push(StageEffect::ScrollThumbIntoView(index));

        tracing::debug!(id = %id, index, "lightbox opened");
        self.state = LightboxState::Open {
            gallery_id: id.to_string(),
            index,
        };
        effects
    }

    pub fn open_request(&mut self, request: &OpenGallery) -> Vec<StageEffect> {
        self.open(&request.id, request.start_index)
    }

    /// Move to `target`, clamped to the open gallery.
    ///
    /// No-op when closed or when the clamped target is already active.
    pub fn show_slide(&mut self, target: isize) -> Vec<StageEffect> {
        let Some((project, current)) = self.current() else {
            return Vec::new();
        };
        let last = project.items.len().saturating_sub(1);
        let index = target.clamp(0, last as isize) as usize;
        if index == current {
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(3);
        if project.items[current].kind.is_video() {
            effects.push(StageEffect::PauseVideo);
        }
        effects.push(StageEffect::ShowStage(StageView::for_item(
            &project.items[index],
            &project.title,
            index,
        )));
        effects.push(StageEffect::ScrollThumbIntoView(index));

        if let LightboxState::Open { index: active, .. } = &mut self.state {
            *active = index;
        }
        effects
    }

    /// Jump directly to a thumbnail's index
    pub fn jump_to(&mut self, index: usize) -> Vec<StageEffect> {
        self.show_slide(index.min(isize::MAX as usize) as isize)
    }

    pub fn next(&mut self) -> Vec<StageEffect> {
        match self.current() {
            Some((_, index)) => self.show_slide(index as isize + 1),
            None => Vec::new(),
        }
    }

    pub fn prev(&mut self) -> Vec<StageEffect> {
        match self.current() {
            Some((_, index)) => self.show_slide(index as isize - 1),
            None => Vec::new(),
        }
    }

    /// Close the viewer. No-op when already closed.
    pub fn close(&mut self) -> Vec<StageEffect> {
        if !self.is_open() {
            return Vec::new();
        }
        let mut effects = Vec::with_capacity(2);
        if self.current_is_video() {
            effects.push(StageEffect::PauseVideo);
        }
        effects.push(StageEffect::UnlockPageScroll);
        self.state = LightboxState::Closed;
        tracing::debug!("lightbox closed");
        effects
    }

    /// Click on the overlay; only clicks outside the content area close it
    pub fn backdrop_click(&mut self, inside_content: bool) -> Vec<StageEffect> {
        if inside_content {
            Vec::new()
        } else {
            self.close()
        }
    }

    /// Keyboard navigation; ignored while closed
    pub fn handle_key(&mut self, key: LightboxKey) -> Vec<StageEffect> {
        if !self.is_open() {
            return Vec::new();
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::ArrowLeft => self.prev(),
        }
    }

    /// Pure projection of the open session, `None` when closed
    pub fn view(&self) -> Option<LightboxView> {
        let (project, index) = self.current()?;
        let len = project.items.len();
        let item = project.items.get(index)?;

        let thumbs = project
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ThumbView {
                index: i,
                kind: item.kind,
                src: item.src.clone(),
                active: i == index,
            })
            .collect();

        Some(LightboxView {
            gallery_id: project.id.clone(),
            title: project.title.clone(),
            counter: format!("{} / {}", index + 1, len),
            index,
            len,
            stage: StageView::for_item(item, &project.title, index),
            thumbs,
            prev_disabled: index == 0,
            next_disabled: index == len - 1,
        })
    }

    fn current_is_video(&self) -> bool {
        self.current()
            .and_then(|(project, index)| project.items.get(index))
            .is_some_and(|item| item.kind.is_video())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lightbox() -> Lightbox {
        let mut mixed = ProjectRecord::new("mixed", "Mixed");
        mixed.items = vec![
            MediaItem::image("1.jpg"),
            MediaItem::video("2.mp4"),
            MediaItem::image("3.jpg"),
        ];
        let mut single = ProjectRecord::new("single", "Single");
        single.items = vec![MediaItem::image("only.jpg")];
        Lightbox::new(GalleryIndex::build(&[mixed, single, ProjectRecord::new("empty", "Empty")]))
    }

    #[test]
    fn test_initially_closed() {
        let lb = lightbox();
        assert_eq!(lb.state(), &LightboxState::Closed);
        assert!(lb.view().is_none());
    }

    #[test]
    fn test_open_effects() {
        let mut lb = lightbox();
        let effects = lb.open("mixed", 0);
        assert_eq!(
            effects,
            vec![
                StageEffect::LockPageScroll,
                StageEffect::ShowStage(StageView::Image {
                    src: "1.jpg".into(),
                    alt: "Mixed - 1".into()
                }),
                StageEffect::ScrollThumbIntoView(0),
            ]
        );
    }

    #[test]
    fn test_open_clamps_start_index() {
        let mut lb = lightbox();
        lb.open("mixed", 99);
        assert_eq!(
            lb.state(),
            &LightboxState::Open {
                gallery_id: "mixed".into(),
                index: 2
            }
        );
    }

    #[test]
    fn test_open_unknown_or_empty_is_noop() {
        let mut lb = lightbox();
        assert!(lb.open("nope", 0).is_empty());
        assert!(lb.open("empty", 0).is_empty());
        assert!(!lb.is_open());
    }

    #[test]
    fn test_leaving_video_pauses_first() {
        let mut lb = lightbox();
        lb.open("mixed", 1);
        let effects = lb.next();
        assert_eq!(effects[0], StageEffect::PauseVideo);
        assert!(matches!(effects[1], StageEffect::ShowStage(StageView::Image { .. })));
    }

    #[test]
    fn test_close_pauses_video_and_unlocks() {
        let mut lb = lightbox();
        lb.open("mixed", 1);
        assert_eq!(
            lb.close(),
            vec![StageEffect::PauseVideo, StageEffect::UnlockPageScroll]
        );
        assert!(lb.close().is_empty());
    }

    #[test]
    fn test_backdrop_click() {
        let mut lb = lightbox();
        lb.open("single", 0);
        assert!(lb.backdrop_click(true).is_empty());
        assert!(lb.is_open());
        assert_eq!(lb.backdrop_click(false), vec![StageEffect::UnlockPageScroll]);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        let mut lb = lightbox();
        assert!(lb.handle_key(LightboxKey::ArrowRight).is_empty());
        assert!(lb.handle_key(LightboxKey::Escape).is_empty());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(LightboxKey::from_key_name("Escape"), Some(LightboxKey::Escape));
        assert_eq!(LightboxKey::from_key_name("ArrowLeft"), Some(LightboxKey::ArrowLeft));
        assert_eq!(LightboxKey::from_key_name("ArrowRight"), Some(LightboxKey::ArrowRight));
        assert_eq!(LightboxKey::from_key_name("Enter"), None);
    }

    #[test]
    fn test_switching_gallery_while_open() {
        let mut lb = lightbox();
        lb.open("mixed", 1);
        let effects = lb.open("single", 0);
        assert_eq!(effects[0], StageEffect::PauseVideo);
        assert!(!effects.contains(&StageEffect::LockPageScroll));
        assert_eq!(lb.view().unwrap().title, "Single");
    }

    #[test]
    fn test_single_item_gallery_disables_both() {
        let mut lb = lightbox();
        lb.open("single", 0);
        let view = lb.view().unwrap();
        assert_eq!(view.counter, "1 / 1");
        assert!(view.prev_disabled);
        assert!(view.next_disabled);
    }

    #[test]
    fn test_replace_gallery_closes() {
        let mut lb = lightbox();
        lb.open("mixed", 0);
        let effects = lb.replace_gallery(GalleryIndex::default());
        assert_eq!(effects, vec![StageEffect::UnlockPageScroll]);
        assert!(!lb.is_open());
        assert!(lb.gallery().is_empty());
    }

    #[test]
    fn test_thumbs_mark_active_and_play_indicator() {
        let mut lb = lightbox();
        lb.open("mixed", 2);
        let view = lb.view().unwrap();
        let active: Vec<usize> = view.thumbs.iter().filter(|t| t.active).map(|t| t.index).collect();
        assert_eq!(active, vec![2]);
        assert!(view.thumbs[1].shows_play_indicator());
        assert!(!view.thumbs[0].shows_play_indicator());
    }
}
