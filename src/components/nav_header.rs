//! Navigation Header Component
//!
//! Sticky header with the owner's name, section links, theme toggle and a
//! hamburger menu for narrow windows. The link of the section under the
//! viewport's probe line is highlighted while scrolling.

use dioxus::prelude::*;
use folio_core::scroll::{active_section, navbar_scrolled, SectionBounds};
use folio_core::site::SECTIONS;
use folio_ui::{Icon, IconButton};

use crate::context::{toggle_theme, use_prefs, use_site, use_theme};

/// Reports `[scrollY, [{id, top, height}, ...]]` on every scroll
const SCROLL_SPY_JS: &str = r#"
const report = () => {
  const sections = Array.from(document.querySelectorAll('section[id]')).map(s => ({
    id: s.id,
    top: s.offsetTop,
    height: s.offsetHeight,
  }));
  dioxus.send([window.scrollY, sections]);
};
window.addEventListener('scroll', report, { passive: true });
report();
"#;

/// Smoothly scroll the section with this anchor id to the top of the window
pub fn scroll_to_section(id: &str) {
    let js = format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        id
    );
    document::eval(&js);
}

#[component]
pub fn NavHeader() -> Element {
    let site = use_site();
    let theme = use_theme();
    let prefs = use_prefs();

    let mut menu_open = use_signal(|| false);
    let mut scrolled = use_signal(|| false);
    let mut active: Signal<Option<String>> = use_signal(|| None);

    // Scroll spy
    use_future(move || async move {
        let mut spy = document::eval(SCROLL_SPY_JS);
        loop {
            match spy.recv::<(f64, Vec<SectionBounds>)>().await {
                Ok((scroll_y, sections)) => {
                    scrolled.set(navbar_scrolled(scroll_y));
                    let current = active_section(scroll_y, &sections).map(str::to_string);
                    if *active.peek() != current {
                        active.set(current);
                    }
                }
                Err(e) => {
                    tracing::debug!(error = ?e, "Scroll spy stopped");
                    break;
                }
            }
        }
    });

    let nav_class = if scrolled() { "navbar scrolled" } else { "navbar" };
    let links_class = if menu_open() { "nav-links open" } else { "nav-links" };
    let hamburger_class = if menu_open() { "hamburger open" } else { "hamburger" };

    rsx! {
        // Outside click closes the menu
        if menu_open() {
            div {
                class: "nav-backdrop",
                onclick: move |_| menu_open.set(false),
            }
        }

        nav { class: "{nav_class}", id: "navbar",
            a {
                class: "nav-logo",
                href: "#hero",
                onclick: move |e| {
                    e.prevent_default();
                    scroll_to_section("hero");
                },
                "{site.read().owner}"
            }

            ul { class: "{links_class}", id: "navLinks",
                for (id, label) in SECTIONS {
                    li { key: "{id}",
                        a {
                            href: "#{id}",
                            class: if active().as_deref() == Some(id) { "active" } else { "" },
                            onclick: move |e| {
                                e.prevent_default();
                                menu_open.set(false);
                                scroll_to_section(id);
                            },
                            "{label}"
                        }
                    }
                }
            }

            div { class: "nav-actions",
                IconButton {
                    icon: theme().toggle_icon().to_string(),
                    aria_label: "Toggle theme".to_string(),
                    class: Some("theme-toggle".to_string()),
                    onclick: move |_| toggle_theme(theme, prefs),
                }

                button {
                    class: "{hamburger_class}",
                    r#type: "button",
                    "aria-label": "Menu",
                    onclick: move |_| menu_open.toggle(),
                    Icon { class: if menu_open() { "fas fa-times" } else { "fas fa-bars" } }
                }
            }
        }
    }
}
