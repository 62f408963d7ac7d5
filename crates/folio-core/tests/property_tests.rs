//! Property-based tests for the card renderer and lightbox
//!
//! Uses proptest to check the navigation invariants over arbitrary galleries
//! and operation sequences.

use folio_core::{
    render_grid, GalleryIndex, Lightbox, LightboxKey, MediaItem, MediaKind, ProjectRecord,
    StageEffect,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn media_strategy() -> impl Strategy<Value = MediaItem> {
    (any::<bool>(), "[a-z0-9]{1,8}").prop_map(|(video, name)| {
        if video {
            MediaItem::video(format!("{}.mp4", name))
        } else {
            MediaItem::image(format!("{}.jpg", name))
        }
    })
}

fn project_strategy(max_items: usize) -> impl Strategy<Value = ProjectRecord> {
    (
        "[A-Za-z ]{1,16}",
        prop::collection::vec(media_strategy(), 0..max_items),
    )
        .prop_map(|(title, items)| {
            let mut p = ProjectRecord::new(title.clone(), title);
            p.items = items;
            p
        })
}

/// Navigation inputs a user can produce
#[derive(Debug, Clone)]
enum NavOp {
    Next,
    Prev,
    Jump(usize),
    Key(LightboxKey),
}

fn nav_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<NavOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(NavOp::Next),
            3 => Just(NavOp::Prev),
            2 => (0..64usize).prop_map(NavOp::Jump),
            1 => Just(NavOp::Key(LightboxKey::ArrowLeft)),
            1 => Just(NavOp::Key(LightboxKey::ArrowRight)),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Exactly the projects with media become cards, in catalog order
    #[test]
    fn cards_are_projects_with_media(projects in prop::collection::vec(project_strategy(6), 0..8)) {
        let expected: Vec<String> = projects
            .iter()
            .filter(|p| !p.items.is_empty())
            .map(|p| p.id.clone())
            .collect();
        let actual: Vec<String> = render_grid(&projects)
            .cards()
            .iter()
            .map(|c| c.id.clone())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// Opening at any index lands on the nearest valid one
    #[test]
    fn open_clamps(project in project_strategy(12), start in 0..100usize) {
        prop_assume!(!project.items.is_empty());
        let len = project.items.len();
        let id = project.id.clone();
        let mut lb = Lightbox::new(GalleryIndex::build(&[project]));

        lb.open(&id, start);
        let view = lb.view().unwrap();
        prop_assert_eq!(view.index, start.min(len - 1));
        prop_assert_eq!(view.counter, format!("{} / {}", start.min(len - 1) + 1, len));
    }

    /// Any navigation sequence keeps the index in range and the controls consistent
    #[test]
    fn navigation_stays_in_bounds(project in project_strategy(12), ops in nav_ops_strategy(40)) {
        prop_assume!(!project.items.is_empty());
        let len = project.items.len();
        let id = project.id.clone();
        let mut lb = Lightbox::new(GalleryIndex::build(&[project]));
        lb.open(&id, 0);

        for op in ops {
            let before = lb.view().unwrap().index;
            let effects = match op {
                NavOp::Next => lb.next(),
                NavOp::Prev => lb.prev(),
                NavOp::Jump(i) => lb.jump_to(i),
                NavOp::Key(k) => lb.handle_key(k),
            };

            let view = lb.view().unwrap();
            prop_assert!(view.index < len);
            prop_assert_eq!(view.prev_disabled, view.index == 0);
            prop_assert_eq!(view.next_disabled, view.index == len - 1);
            prop_assert_eq!(view.thumbs.iter().filter(|t| t.active).count(), 1);

            // No state change means no effects, and vice versa
            prop_assert_eq!(effects.is_empty(), before == view.index);
        }
    }

    /// Whenever a video leaves the stage it is paused before anything else happens
    #[test]
    fn video_paused_before_stage_change(project in project_strategy(12), ops in nav_ops_strategy(30)) {
        prop_assume!(!project.items.is_empty());
        let id = project.id.clone();
        let kinds: Vec<MediaKind> = project.items.iter().map(|i| i.kind).collect();
        let mut lb = Lightbox::new(GalleryIndex::build(&[project]));
        lb.open(&id, 0);

        for op in ops {
            let before = lb.view().unwrap().index;
            let effects = match op {
                NavOp::Next => lb.next(),
                NavOp::Prev => lb.prev(),
                NavOp::Jump(i) => lb.jump_to(i),
                NavOp::Key(k) => lb.handle_key(k),
            };
            if effects.is_empty() {
                continue;
            }
            if kinds[before].is_video() {
                prop_assert_eq!(&effects[0], &StageEffect::PauseVideo);
            } else {
                prop_assert!(!effects.contains(&StageEffect::PauseVideo));
            }
        }
    }

    /// Prev at the first item and next at the last item change nothing
    #[test]
    fn boundary_navigation_is_noop(project in project_strategy(12)) {
        prop_assume!(!project.items.is_empty());
        let len = project.items.len();
        let id = project.id.clone();
        let mut lb = Lightbox::new(GalleryIndex::build(&[project]));

        lb.open(&id, 0);
        let at_start = lb.state().clone();
        prop_assert!(lb.prev().is_empty());
        prop_assert_eq!(lb.state(), &at_start);

        lb.open(&id, len - 1);
        let at_end = lb.state().clone();
        prop_assert!(lb.next().is_empty());
        prop_assert_eq!(lb.state(), &at_end);
    }
}
