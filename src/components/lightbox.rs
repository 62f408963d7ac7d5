//! Lightbox Modal
//!
//! Full-window viewer for one project's media: stage, counter, prev/next,
//! and a thumbnail strip. All state lives in the shared
//! [`Lightbox`](folio_core::Lightbox) session; this component renders its
//! view and forwards input to it.
//!
//! Imperative work the markup cannot express (pausing a video, locking page
//! scroll, centering the active thumbnail) comes back from the session as
//! [`StageEffect`]s and is run by [`apply_effects`] in order.

use dioxus::prelude::*;
use folio_core::{LightboxKey, StageEffect, StageView};
use folio_ui::{CloseButton, Icon, IconButton};

use crate::context::use_lightbox;

const STAGE_ID: &str = "lightboxStage";

/// Forwards lightbox keys pressed anywhere in the window
const KEY_LISTENER_JS: &str = r#"
document.addEventListener('keydown', (e) => {
  if (e.key === 'Escape' || e.key === 'ArrowLeft' || e.key === 'ArrowRight') {
    dioxus.send(e.key);
  }
});
"#;

fn thumb_dom_id(index: usize) -> String {
    format!("lb-thumb-{}", index)
}

fn effect_script(effect: &StageEffect) -> Option<String> {
    match effect {
        StageEffect::LockPageScroll => Some("document.body.style.overflow = 'hidden';".to_string()),
        StageEffect::UnlockPageScroll => Some("document.body.style.overflow = '';".to_string()),
        StageEffect::PauseVideo => Some(format!(
            "document.querySelector('#{} video')?.pause();",
            STAGE_ID
        )),
        // The stage itself is rendered from the session's view
        StageEffect::ShowStage(_) => None,
        // Wait a frame so the strip has re-rendered
        StageEffect::ScrollThumbIntoView(index) => Some(format!(
            "requestAnimationFrame(() => document.getElementById('{}')?.scrollIntoView({{ inline: 'center', block: 'nearest', behavior: 'smooth' }}));",
            thumb_dom_id(*index)
        )),
    }
}

/// Run lightbox side effects against the webview, in emission order
pub fn apply_effects(effects: Vec<StageEffect>) {
    for effect in &effects {
        tracing::trace!(?effect, "lightbox effect");
        if let Some(js) = effect_script(effect) {
            document::eval(&js);
        }
    }
}

#[component]
pub fn LightboxModal() -> Element {
    let mut lightbox = use_lightbox();

    // Keyboard: Escape closes, arrows navigate; ignored while closed
    use_future(move || async move {
        let mut keys = document::eval(KEY_LISTENER_JS);
        while let Ok(name) = keys.recv::<String>().await {
            if let Some(key) = LightboxKey::from_key_name(&name) {
                let effects = lightbox.write().handle_key(key);
                apply_effects(effects);
            }
        }
    });

    let Some(view) = lightbox.read().view() else {
        return rsx! {};
    };

    let close = move |_: ()| {
        let effects = lightbox.write().close();
        apply_effects(effects);
    };

    rsx! {
        div {
            class: "lightbox-overlay open",
            id: "lightboxOverlay",
            onclick: move |_| {
                let effects = lightbox.write().backdrop_click(false);
                apply_effects(effects);
            },

            div {
                class: "lightbox-content",
                onclick: move |e| e.stop_propagation(),

                div { class: "lightbox-header",
                    h3 { class: "lightbox-title", id: "lightboxTitle", "{view.title}" }
                    span { class: "lightbox-counter", id: "lightboxCounter", "{view.counter}" }
                    CloseButton { onclick: close }
                }

                div { class: "lightbox-body",
                    IconButton {
                        icon: "fas fa-chevron-left".to_string(),
                        aria_label: "Previous".to_string(),
                        class: Some("lb-nav lb-prev".to_string()),
                        disabled: view.prev_disabled,
                        onclick: move |_| {
                            let effects = lightbox.write().prev();
                            apply_effects(effects);
                        },
                    }

                    div { class: "lightbox-stage", id: STAGE_ID,
                        match view.stage.clone() {
                            StageView::Image { src, alt } => rsx! {
                                img { key: "{src}", src: "{src}", alt: "{alt}" }
                            },
                            StageView::Video { src, controls, autoplay } => rsx! {
                                video {
                                    key: "{src}",
                                    src: "{src}",
                                    controls: controls,
                                    autoplay: autoplay,
                                }
                            },
                        }
                    }

                    IconButton {
                        icon: "fas fa-chevron-right".to_string(),
                        aria_label: "Next".to_string(),
                        class: Some("lb-nav lb-next".to_string()),
                        disabled: view.next_disabled,
                        onclick: move |_| {
                            let effects = lightbox.write().next();
                            apply_effects(effects);
                        },
                    }
                }

                div { class: "lightbox-thumbs", id: "lightboxThumbs",
                    for thumb in view.thumbs.clone() {
                        div {
                            key: "{thumb.index}",
                            id: thumb_dom_id(thumb.index),
                            class: match (thumb.active, thumb.shows_play_indicator()) {
                                (true, true) => "lb-thumb video-thumb active",
                                (true, false) => "lb-thumb active",
                                (false, true) => "lb-thumb video-thumb",
                                (false, false) => "lb-thumb",
                            },
                            onclick: move |_| {
                                let effects = lightbox.write().jump_to(thumb.index);
                                apply_effects(effects);
                            },
                            if thumb.shows_play_indicator() {
                                Icon { class: "fas fa-play" }
                            } else {
                                img { src: "{thumb.src}", alt: "", loading: "lazy" }
                            }
                        }
                    }
                }
            }
        }
    }
}
