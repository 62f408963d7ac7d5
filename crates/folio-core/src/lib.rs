//! Folio Core Library
//!
//! Data model and view state for a portfolio of project galleries.
//!
//! ## Overview
//!
//! ```text
//! Catalog ──▶ GalleryIndex ──▶ ProjectCard (one per project with media)
//!                   │                 │ "Open Gallery"
//!                   ▼                 ▼
//!               Lightbox  ◀──── OpenGallery { id, start_index: 0 }
//! ```
//!
//! Nothing in this crate touches a DOM. Renderers are pure functions from
//! data (and lightbox state) to view values; the desktop shell binds them to
//! markup and events.
//!
//! ## Quick Start
//!
//! ```ignore
//! use folio_core::{load_catalog, CatalogSource, GalleryIndex, Lightbox};
//!
//! let catalog = load_catalog(&[CatalogSource::embedded()]).await?;
//! let grid = folio_core::render_grid(&catalog);
//!
//! let mut lightbox = Lightbox::new(GalleryIndex::build(&catalog));
//! lightbox.open("Training", 0);
//! assert_eq!(lightbox.view().unwrap().counter, "1 / 4");
//! ```

pub mod card;
pub mod catalog;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod lightbox;
pub mod prefs;
pub mod scan;
pub mod scroll;
pub mod site;
pub mod typewriter;
pub mod types;

// Re-exports
pub use card::{render_card, render_grid, GridView, ProjectCard};
pub use catalog::{load_catalog, parse_catalog, CatalogSource};
pub use contact::{ComposeMessage, ContactForm};
pub use error::{ContactError, LoadError, PrefsError, ScanError};
pub use gallery::GalleryIndex;
pub use lightbox::{
    Lightbox, LightboxKey, LightboxState, LightboxView, OpenGallery, StageEffect, StageView,
    ThumbView,
};
pub use prefs::PreferenceStore;
pub use site::SiteConfig;
pub use typewriter::{Frame, Typewriter};
pub use types::*;
