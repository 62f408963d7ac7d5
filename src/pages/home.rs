//! The single-page portfolio: every section stacked, with the lightbox on top.

use dioxus::prelude::*;

use crate::components::{
    AboutSection, ContactSection, Footer, HeroSection, LightboxModal, NavHeader, ProjectsSection,
    SkillsSection,
};

#[component]
pub fn Home() -> Element {
    rsx! {
        NavHeader {}
        main { class: "page",
            HeroSection {}
            AboutSection {}
            ProjectsSection {}
            SkillsSection {}
            ContactSection {}
        }
        Footer {}
        LightboxModal {}
    }
}
