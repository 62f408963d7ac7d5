//! Tag List Component
//!
//! Row of short project labels. Order is preserved and duplicates are kept.

use dioxus::prelude::*;

/// Properties for the TagList component
#[derive(Clone, PartialEq, Props)]
pub struct TagListProps {
    pub tags: Vec<String>,
    #[props(default = "project-tags".to_string())]
    pub class: String,
}

/// Displays the tags of a project as inline pills
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagList { tags: vec!["3D Rendering".to_string(), "Design".to_string()] }
/// }
/// ```
#[component]
pub fn TagList(props: TagListProps) -> Element {
    if props.tags.is_empty() {
        return VNode::empty();
    }

    rsx! {
        div { class: "{props.class}",
            for (i, tag) in props.tags.iter().enumerate() {
                span { key: "{i}", class: "tag", "{tag}" }
            }
        }
    }
}
