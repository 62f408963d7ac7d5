//! Catalog loading
//!
//! The catalog is an ordered list of [`ProjectRecord`]s. It can come from
//! several interchangeable sources, tried in order until one succeeds:
//!
//! - [`CatalogSource::Embedded`] - a document compiled into the binary (primary)
//! - [`CatalogSource::File`] - a document on disk, `data/projects.json` by default
//! - [`CatalogSource::Remote`] - fetched over HTTP with a cache-busting query
//!
//! Callers only see the resulting `Vec<ProjectRecord>`; the gallery index
//! never learns which source satisfied it.
//!
//! Documents are either a bare JSON array or the script form
//! `window.projectData = [...];`.

use std::path::PathBuf;

use url::Url;

use crate::error::LoadError;
use crate::types::ProjectRecord;

/// Fixed location of the catalog document relative to a site root
pub const CATALOG_PATH: &str = "data/projects.json";

/// Catalog compiled into the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../data/projects.json");

const SCRIPT_PREFIX: &str = "window.projectData";

/// Where a catalog document can be obtained from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Document already held in memory
    Embedded(String),
    /// Document on the local filesystem
    File(PathBuf),
    /// Site root; the document is fetched from `{base}/data/projects.json`
    Remote(Url),
}

impl CatalogSource {
    /// The catalog shipped with the binary
    pub fn embedded() -> Self {
        CatalogSource::Embedded(EMBEDDED_CATALOG.to_string())
    }

    /// Remote source from a site root URL string.
    ///
    /// The root is treated as a directory, so `https://host/portfolio` and
    /// `https://host/portfolio/` name the same site.
    pub fn remote(base: &str) -> Result<Self, LoadError> {
        Ok(CatalogSource::Remote(site_root(Url::parse(base)?)))
    }

    /// Short human-readable description for logs
    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Embedded(_) => "embedded".to_string(),
            CatalogSource::File(path) => format!("file {}", path.display()),
            CatalogSource::Remote(base) => format!("remote {}", base),
        }
    }

    /// Load and decode the catalog from this source
    pub async fn load(&self) -> Result<Vec<ProjectRecord>, LoadError> {
        match self {
            CatalogSource::Embedded(doc) => parse_catalog(doc),
            CatalogSource::File(path) => {
                let doc = tokio::fs::read_to_string(path).await?;
                parse_catalog(&doc)
            }
            CatalogSource::Remote(base) => {
                let now_ms = chrono::Utc::now().timestamp_millis();
                let url = cache_busted_url(base, now_ms)?;
                tracing::debug!(%url, "fetching catalog");

                let doc = reqwest::get(url)
                    .await?
                    .error_for_status()?
                    .text()
                    .await?;
                let mut projects = parse_catalog(&doc)?;
                rebase_items(&mut projects, base);
                Ok(projects)
            }
        }
    }
}

/// Try each source in order and return the first catalog that loads.
///
/// Failures are logged and the next source is tried. When every source
/// fails, the last error is returned.
pub async fn load_catalog(sources: &[CatalogSource]) -> Result<Vec<ProjectRecord>, LoadError> {
    let mut last_err = LoadError::NoSources;

    for source in sources {
        match source.load().await {
            Ok(projects) => {
                tracing::info!(
                    source = %source.describe(),
                    count = projects.len(),
                    "catalog loaded"
                );
                return Ok(projects);
            }
            Err(e) => {
                tracing::warn!(source = %source.describe(), error = %e, "catalog source failed");
                last_err = e;
            }
        }
    }

    Err(last_err)
}

/// Decode a catalog document, accepting the `window.projectData = ...;` form.
pub fn parse_catalog(doc: &str) -> Result<Vec<ProjectRecord>, LoadError> {
    Ok(serde_json::from_str(unwrap_script(doc))?)
}

fn unwrap_script(doc: &str) -> &str {
    let trimmed = doc.trim();
    let Some(rest) = trimmed.strip_prefix(SCRIPT_PREFIX) else {
        return trimmed;
    };
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('=').unwrap_or(rest);
    rest.trim().trim_end_matches(';').trim_end()
}

fn site_root(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}

/// Catalog document URL under `base` with a `v=<millis>` cache buster.
pub fn cache_busted_url(base: &Url, now_ms: i64) -> Result<Url, LoadError> {
    let mut url = base.join(CATALOG_PATH)?;
    url.query_pairs_mut().append_pair("v", &now_ms.to_string());
    Ok(url)
}

/// Resolve relative media paths against the site root they were fetched from.
pub fn rebase_items(projects: &mut [ProjectRecord], base: &Url) {
    for item in projects.iter_mut().flat_map(|p| p.items.iter_mut()) {
        match base.join(&item.src) {
            Ok(resolved) => item.src = resolved.to_string(),
            Err(e) => tracing::debug!(src = %item.src, error = %e, "media path left as-is"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MediaKind;

    #[test]
    fn test_embedded_catalog_decodes() {
        let projects = parse_catalog(EMBEDDED_CATALOG).unwrap();
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "Architectural Portfolio",
                "Presentation Design",
                "Visualization",
                "Training"
            ]
        );

        let presentation = &projects[1];
        assert_eq!(presentation.items.len(), 8);
        assert_eq!(presentation.items[7].kind, MediaKind::Video);
    }

    #[test]
    fn test_script_form_is_unwrapped() {
        let doc = "window.projectData = [\r\n  { \"id\": \"a\", \"title\": \"A\" }\r\n];\r\n";
        let projects = parse_catalog(doc).unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].id, "a");
    }

    #[test]
    fn test_bare_array() {
        let projects = parse_catalog("  []  ").unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_decode_error() {
        let err = parse_catalog(r#"{ "projects": [] }"#).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_cache_busted_url() {
        let base = Url::parse("https://example.com/site/").unwrap();
        let url = cache_busted_url(&base, 1700000000123).unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/site/data/projects.json?v=1700000000123"
        );
    }

    #[test]
    fn test_remote_root_without_trailing_slash() {
        let CatalogSource::Remote(base) = CatalogSource::remote("https://example.com/portfolio").unwrap() else {
            panic!("expected a remote source");
        };
        assert_eq!(base.as_str(), "https://example.com/portfolio/");

        let url = cache_busted_url(&base, 1).unwrap();
        assert_eq!(url.as_str(), "https://example.com/portfolio/data/projects.json?v=1");

        let mut projects = parse_catalog(
            r#"[{ "id": "t", "title": "T", "items": [{ "type": "image", "src": "images/1.jpg" }] }]"#,
        )
        .unwrap();
        rebase_items(&mut projects, &base);
        assert_eq!(projects[0].items[0].src, "https://example.com/portfolio/images/1.jpg");
    }

    #[test]
    fn test_remote_root_keeps_trailing_slash() {
        assert_eq!(
            CatalogSource::remote("https://example.com/").unwrap(),
            CatalogSource::Remote(Url::parse("https://example.com/").unwrap())
        );
    }

    #[test]
    fn test_rebase_items() {
        let base = Url::parse("https://example.com/").unwrap();
        let mut projects = parse_catalog(
            r#"[{ "id": "t", "title": "T", "items": [{ "type": "image", "src": "images/Projects/Training/1.jpg" }] }]"#,
        )
        .unwrap();
        rebase_items(&mut projects, &base);
        assert_eq!(
            projects[0].items[0].src,
            "https://example.com/images/Projects/Training/1.jpg"
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(CatalogSource::embedded().describe(), "embedded");
        assert_eq!(
            CatalogSource::File(PathBuf::from("data/projects.json")).describe(),
            "file data/projects.json"
        );
    }

    #[tokio::test]
    async fn test_no_sources() {
        let err = load_catalog(&[]).await.unwrap_err();
        assert!(matches!(err, LoadError::NoSources));
    }

    #[tokio::test]
    async fn test_falls_through_to_next_source() {
        let sources = vec![
            CatalogSource::File(PathBuf::from("/definitely/not/here/projects.json")),
            CatalogSource::Embedded(r#"[{ "id": "a", "title": "A" }]"#.to_string()),
        ];
        let projects = load_catalog(&sources).await.unwrap();
        assert_eq!(projects[0].id, "a");
    }

    #[tokio::test]
    async fn test_all_sources_fail_returns_last_error() {
        let sources = vec![
            CatalogSource::Embedded("not json".to_string()),
            CatalogSource::File(PathBuf::from("/definitely/not/here/projects.json")),
        ];
        let err = load_catalog(&sources).await.unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
