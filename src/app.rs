use dioxus::prelude::*;
use folio_core::{
    load_catalog, render_grid, GalleryIndex, GridView, Lightbox, PreferenceStore, ProjectRecord,
    StageEffect,
};

use crate::components::apply_effects;
use crate::context::{get_data_dir, get_site_config, CatalogState};
use crate::pages::Home;
use crate::theme::{Palette, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - The single-page portfolio
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Swap a freshly loaded catalog into the session.
///
/// An open lightbox is closed first, so the returned effects must still run.
fn install_catalog(
    lightbox: &mut Lightbox,
    projects: &[ProjectRecord],
) -> (Vec<StageEffect>, GridView) {
    let effects = lightbox.replace_gallery(GalleryIndex::build(projects));
    (effects, render_grid(projects))
}

/// Root application component.
///
/// Provides global styles, site context, the lightbox session and routing.
/// Icon fonts are linked from the window's head (see `main`).
#[component]
pub fn App() -> Element {
    let site = use_signal(get_site_config);
    let prefs = use_signal(|| PreferenceStore::in_dir_or_empty(&get_data_dir()));
    let theme = use_signal(|| prefs.peek().theme());
    let mut catalog: Signal<CatalogState> = use_signal(|| CatalogState::Loading);
    let mut lightbox: Signal<Lightbox> = use_signal(|| Lightbox::new(GalleryIndex::default()));

    use_context_provider(|| site);
    use_context_provider(|| prefs);
    use_context_provider(|| theme);
    use_context_provider(|| catalog);
    use_context_provider(|| lightbox);

    // Load the catalog once on mount
    use_effect(move || {
        spawn(async move {
            let sources = site.peek().catalog_sources();
            match load_catalog(&sources).await {
                Ok(projects) => {
                    tracing::info!(count = projects.len(), "Catalog loaded");
                    let (effects, grid) = install_catalog(&mut lightbox.write(), &projects);
                    apply_effects(effects);
                    catalog.set(CatalogState::Ready(grid));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Projects data not found");
                    catalog.set(CatalogState::Ready(GridView::catalog_missing()));
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        div {
            class: "app-root",
            "data-theme": "{theme().as_str()}",
            style: "{Palette::for_theme(theme()).css_vars()}",
            Router::<Route> {}
        }
    }
}
