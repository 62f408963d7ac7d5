//! Projects Section
//!
//! Grid of project cards built from the loaded catalog. Each card's
//! "Open Gallery" button opens the lightbox at the project's first item.

use dioxus::prelude::*;
use folio_core::{GridView, ProjectCard};
use folio_ui::{Button, ButtonVariant, Icon, TagList};

use crate::components::apply_effects;
use crate::context::{use_catalog, use_lightbox, CatalogState};

#[component]
pub fn ProjectsSection() -> Element {
    let catalog = use_catalog();

    rsx! {
        section { class: "section projects", id: "projects",
            h2 { class: "section-title", "Projects" }
            div { class: "projects-grid", id: "projectsGrid",
                match catalog() {
                    CatalogState::Loading => rsx! {
                        p { class: "grid-placeholder", "Loading projects…" }
                    },
                    CatalogState::Ready(GridView::Placeholder(message)) => rsx! {
                        p { class: "grid-placeholder", "{message}" }
                    },
                    CatalogState::Ready(GridView::Cards(cards)) => rsx! {
                        for card in cards {
                            ProjectCardView { key: "{card.dom_hook}", card: card.clone() }
                        }
                    },
                }
            }
        }
    }
}

/// One project card
#[component]
pub fn ProjectCardView(card: ProjectCard) -> Element {
    let mut lightbox = use_lightbox();
    let request = card.activation();

    let open_gallery = move |_: ()| {
        let effects = lightbox.write().open_request(&request);
        apply_effects(effects);
    };

    rsx! {
        article {
            class: "project-card reveal visible",
            "data-project": "{card.dom_hook}",
            style: "animation-delay: {card.reveal_delay_ms}ms;",

            div { class: "project-thumb",
                if card.cover_is_video() {
                    video {
                        src: "{card.cover.src}",
                        muted: true,
                        preload: "metadata",
                    }
                } else {
                    img {
                        src: "{card.cover.src}",
                        alt: "{card.cover_alt}",
                        loading: "lazy",
                    }
                }
                div { class: "project-thumb-overlay",
                    span {
                        Icon { class: card.cover_icon }
                        " {card.file_label}"
                    }
                }
            }

            div { class: "project-card-body",
                div { class: "project-card-top",
                    div { class: "project-icon", Icon { class: card.icon.clone() } }
                    span { class: "project-count", "{card.count_label}" }
                }
                h3 { "{card.title}" }
                p { "{card.description}" }
                TagList { tags: card.tags.clone() }
                Button {
                    variant: ButtonVariant::Primary,
                    class: Some("btn-gallery".to_string()),
                    onclick: open_gallery,
                    Icon { class: "fas fa-expand-alt" }
                    " Open Gallery"
                }
            }
        }
    }
}
