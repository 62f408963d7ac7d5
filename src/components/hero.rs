//! Hero Section
//!
//! Greeting with the typed role title and a background that pulses where it
//! is pressed.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use folio_core::typewriter::START_DELAY;
use folio_core::Typewriter;
use folio_ui::{Button, ButtonVariant, Icon};

use crate::components::nav_header::scroll_to_section;
use crate::context::use_site;

/// Lifetime of a click pulse, matching its CSS animation
const PULSE_DURATION: Duration = Duration::from_millis(800);

#[derive(Clone, Copy, PartialEq, Debug)]
struct Pulse {
    id: u64,
    x: f64,
    y: f64,
}

/// Position of a client-space point inside a box whose top-left corner is
/// `origin`, also in client space
fn relative_to(client: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
    (client.0 - origin.0, client.1 - origin.1)
}

#[component]
pub fn HeroSection() -> Element {
    let site = use_site();
    let mut typed = use_signal(String::new);
    let mut pulses: Signal<Vec<Pulse>> = use_signal(Vec::new);
    let mut next_pulse = use_signal(|| 0u64);
    let mut hero: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    use_future(move || async move {
        let mut writer = Typewriter::new(site.peek().hero_phrases.clone());
        if writer.is_empty() {
            return;
        }
        tokio::time::sleep(START_DELAY).await;
        loop {
            let frame = writer.tick();
            typed.set(frame.text);
            tokio::time::sleep(frame.delay).await;
        }
    });

    // Pulses are positioned inside the hero, so the press is measured
    // against the hero's box rather than whichever child was hit
    let on_press = move |e: MouseEvent| {
        let client = e.client_coordinates();
        let id = *next_pulse.peek();
        next_pulse.set(id + 1);

        spawn(async move {
            let Some(mounted) = hero.peek().clone() else {
                return;
            };
            let origin = match mounted.get_client_rect().await {
                Ok(rect) => (rect.origin.x, rect.origin.y),
                Err(e) => {
                    tracing::debug!(error = ?e, "hero bounds unavailable");
                    return;
                }
            };
            let (x, y) = relative_to((client.x, client.y), origin);
            pulses.write().push(Pulse { id, x, y });

            tokio::time::sleep(PULSE_DURATION).await;
            pulses.write().retain(|p| p.id != id);
        });
    };

    rsx! {
        section {
            class: "hero",
            id: "hero",
            onmounted: move |e: MountedEvent| hero.set(Some(e.data())),
            onmousedown: on_press,

            div { class: "interactive-bg",
                for pulse in pulses() {
                    div {
                        key: "{pulse.id}",
                        class: "click-pulse",
                        style: "left: {pulse.x}px; top: {pulse.y}px;",
                    }
                }
            }

            div { class: "hero-content",
                p { class: "hero-greeting", "Hello, I'm" }
                h1 { class: "hero-name", "{site.read().owner}" }
                h2 { class: "hero-title",
                    span { class: "typed", "{typed}" }
                    span { class: "cursor", "|" }
                }
                div { class: "hero-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| scroll_to_section("projects"),
                        Icon { class: "fas fa-th-large" }
                        " View Projects"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| scroll_to_section("contact"),
                        Icon { class: "fas fa-envelope" }
                        " Get in Touch"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_on_child_lands_inside_hero() {
        // Hero starts 64px down the window, a press over the title at (300, 250)
        assert_eq!(relative_to((300.0, 250.0), (0.0, 64.0)), (300.0, 186.0));
    }

    #[test]
    fn press_at_hero_corner_is_origin() {
        assert_eq!(relative_to((12.5, 40.0), (12.5, 40.0)), (0.0, 0.0));
    }
}
