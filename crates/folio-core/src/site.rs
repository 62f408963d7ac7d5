//! Site identity and page structure.

use std::path::PathBuf;

use crate::catalog::{CatalogSource, CATALOG_PATH};

/// Phrases cycled by the hero typewriter
pub const HERO_PHRASES: [&str; 4] = [
    "Architectural Engineer",
    "AutoCAD Instructor",
    "Presentation Designer",
    "Visualizer",
];

/// Anchor ids of the page sections, in page order, with their nav labels
pub const SECTIONS: [(&str, &str); 5] = [
    ("hero", "Home"),
    ("about", "About"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// Who the portfolio belongs to and where its catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner: String,
    pub role: String,
    /// Address the contact form composes mail to
    pub recipient: String,
    pub hero_phrases: Vec<String>,
    /// Use the catalog compiled into the binary
    pub use_embedded: bool,
    /// Catalog document on disk, tried after the embedded one
    pub catalog_path: Option<PathBuf>,
    /// Site root to fetch `data/projects.json` from, tried last
    pub catalog_url: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Mohamed Abdelraouf".to_string(),
            role: "Architectural Engineer".to_string(),
            recipient: "mohamed.abdelraoufalex@gmail.com".to_string(),
            hero_phrases: HERO_PHRASES.iter().map(|p| p.to_string()).collect(),
            use_embedded: true,
            catalog_path: Some(PathBuf::from(CATALOG_PATH)),
            catalog_url: None,
        }
    }
}

impl SiteConfig {
    /// Catalog sources in the order they should be tried.
    ///
    /// An unparseable catalog URL is logged and skipped.
    pub fn catalog_sources(&self) -> Vec<CatalogSource> {
        let mut sources = Vec::new();
        if self.use_embedded {
            sources.push(CatalogSource::embedded());
        }
        if let Some(path) = &self.catalog_path {
            sources.push(CatalogSource::File(path.clone()));
        }
        if let Some(url) = &self.catalog_url {
            match CatalogSource::remote(url) {
                Ok(source) => sources.push(source),
                Err(e) => tracing::warn!(url = %url, error = %e, "ignoring catalog url"),
            }
        }
        sources
    }
}
