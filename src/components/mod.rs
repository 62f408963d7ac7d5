//! UI Components for Folio.
//!
//! One component per page section, plus the lightbox modal.

mod contact_form;
mod hero;
mod lightbox;
pub mod nav_header;
mod projects_grid;
mod sections;

pub use contact_form::ContactSection;
pub use hero::HeroSection;
pub use lightbox::{apply_effects, LightboxModal};
pub use nav_header::NavHeader;
pub use projects_grid::ProjectsSection;
pub use sections::{AboutSection, Footer, SkillsSection};
