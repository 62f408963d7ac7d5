//! Font Awesome icon element

use dioxus::prelude::*;

/// Decorative `<i>` icon, hidden from screen readers
///
/// ```rust,ignore
/// rsx! { Icon { class: "fas fa-sun" } }
/// ```
#[component]
pub fn Icon(#[props(into)] class: String) -> Element {
    rsx! {
        i { class: "{class}", "aria-hidden": "true" }
    }
}
