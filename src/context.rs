//! Shared state for the Folio shell.
//!
//! The root [`App`](crate::app::App) provides the site configuration, the
//! preference store, the active theme, the catalog load state and the single
//! lightbox session; child components reach them through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! let mut lightbox = use_lightbox();
//! let effects = lightbox.write().open("Training", 0);
//! apply_effects(effects);
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;
use folio_core::{GridView, Lightbox, PreferenceStore, SiteConfig, Theme};

/// Projects grid while the catalog is being fetched and after
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogState {
    Loading,
    Ready(GridView),
}

/// Get the data directory for the application.
/// Uses the global data dir set from command line args.
pub fn get_data_dir() -> PathBuf {
    crate::get_data_dir()
}

pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

pub fn use_site() -> Signal<SiteConfig> {
    use_context::<Signal<SiteConfig>>()
}

pub fn use_catalog() -> Signal<CatalogState> {
    use_context::<Signal<CatalogState>>()
}

/// Hook to access the lightbox session.
///
/// Every mutator returns the effects to hand to
/// [`apply_effects`](crate::components::apply_effects).
pub fn use_lightbox() -> Signal<Lightbox> {
    use_context::<Signal<Lightbox>>()
}

pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

pub fn use_prefs() -> Signal<PreferenceStore> {
    use_context::<Signal<PreferenceStore>>()
}

/// Flip the theme and persist the choice.
///
/// A failed write is logged; the theme still changes for this session.
pub fn toggle_theme(mut theme: Signal<Theme>, mut prefs: Signal<PreferenceStore>) {
    let next = theme.peek().toggled();
    theme.set(next);
    if let Err(e) = prefs.write().set_theme(next) {
        tracing::warn!(error = %e, "Failed to save theme preference");
    }
}
