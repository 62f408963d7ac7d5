//! Static page sections: about, skills and footer.

use dioxus::prelude::*;
use folio_ui::{Icon, TagList};

use crate::context::use_site;

/// Skill groups shown in the skills section: (icon, heading, skills)
const SKILL_GROUPS: [(&str, &str, &[&str]); 3] = [
    (
        "fas fa-drafting-compass",
        "Design & Drafting",
        &["AutoCAD", "Revit", "SketchUp"],
    ),
    (
        "fas fa-cube",
        "Visualization",
        &["Lumion", "3D Rendering", "Walkthroughs"],
    ),
    (
        "fas fa-chalkboard-teacher",
        "Presentation & Training",
        &["Presentation Design", "AutoCAD Instruction", "Course Material"],
    ),
];

#[component]
pub fn AboutSection() -> Element {
    let site = use_site();
    let site = site.read();

    rsx! {
        section { class: "section about", id: "about",
            h2 { class: "section-title", "About" }
            div { class: "about-body reveal visible",
                p {
                    "I'm {site.owner}, an {site.role} working across drafting, visualization "
                    "and presentation design. I also teach AutoCAD."
                }
            }
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    rsx! {
        section { class: "section skills", id: "skills",
            h2 { class: "section-title", "Skills" }
            div { class: "skills-grid",
                for (icon, heading, skills) in SKILL_GROUPS {
                    div { key: "{heading}", class: "skill-card",
                        div { class: "skill-icon", Icon { class: icon } }
                        h3 { "{heading}" }
                        TagList {
                            tags: skills.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                            class: "skill-tags".to_string(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let site = use_site();
    let year = chrono::Local::now().format("%Y").to_string();

    rsx! {
        footer { class: "footer",
            p { "© {year} {site.read().owner}" }
        }
    }
}
