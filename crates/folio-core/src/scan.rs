//! Build a catalog from a folder tree of project media.
//!
//! ```text
//! images/Projects/
//! ├── Training/
//! │   ├── 1.jpg
//! │   └── 2.png
//! └── Presentation Design/
//!     ├── 1.jpg
//!     └── Slide.mp4
//! ```
//!
//! Each sub-folder becomes one project (id and title = folder name) and its
//! media files become items in natural filename order. Metadata authored in
//! a previous catalog (icon, description, tags, title) is carried over by id.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::path::Path;

use crate::error::ScanError;
use crate::types::{MediaItem, MediaKind, ProjectRecord};

/// Default path prefix of media `src`s, relative to the site root
pub const DEFAULT_PREFIX: &str = "images/Projects";

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mov"];

/// Media kind from a file extension, `None` for non-media files
pub fn media_kind_for(path: &Path) -> Option<MediaKind> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Scan `dir` into a catalog, keeping metadata from `existing` by id.
pub fn scan_projects(
    dir: &Path,
    prefix: &str,
    existing: &[ProjectRecord],
) -> Result<Vec<ProjectRecord>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotFound(dir.display().to_string()));
    }

    let previous: HashMap<&str, &ProjectRecord> =
        existing.iter().map(|p| (p.id.as_str(), p)).collect();
    let prefix = prefix.trim_end_matches('/');

    let mut folders = visible_entries(dir)?
        .into_iter()
        .filter(|(_, path)| path.is_dir())
        .collect::<Vec<_>>();
    folders.sort_by(|a, b| natural_cmp(&a.0, &b.0));

    let mut catalog = Vec::with_capacity(folders.len());
    for (name, path) in folders {
        let mut files = visible_entries(&path)?
            .into_iter()
            .filter_map(|(file, file_path)| {
                media_kind_for(&file_path).filter(|_| file_path.is_file()).map(|kind| (file, kind))
            })
            .collect::<Vec<_>>();
        files.sort_by(|a, b| natural_cmp(&a.0, &b.0));

        let items = files
            .into_iter()
            .map(|(file, kind)| MediaItem {
                kind,
                src: if prefix.is_empty() {
                    format!("{}/{}", name, file)
                } else {
                    format!("{}/{}/{}", prefix, name, file)
                },
            })
            .collect::<Vec<_>>();

        let mut project = match previous.get(name.as_str()) {
            Some(prev) => (*prev).clone(),
            None => ProjectRecord::new(name.clone(), name.clone()),
        };
        tracing::debug!(project = %name, items = items.len(), "scanned project folder");
        project.items = items;
        catalog.push(project);
    }

    Ok(catalog)
}

fn visible_entries(dir: &Path) -> Result<Vec<(String, std::path::PathBuf)>, ScanError> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 name");
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        entries.push((name, entry.path()));
    }
    Ok(entries)
}

/// Pretty JSON catalog document
pub fn to_json(catalog: &[ProjectRecord]) -> serde_json::Result<String> {
    let mut doc = serde_json::to_string_pretty(catalog)?;
    doc.push('\n');
    Ok(doc)
}

/// Script form that assigns the catalog to `window.projectData`
pub fn to_script(catalog: &[ProjectRecord]) -> serde_json::Result<String> {
    Ok(format!(
        "window.projectData = {};\n",
        serde_json::to_string_pretty(catalog)?
    ))
}

/// Compare names so that "2.jpg" sorts before "10.jpg".
///
/// Digit runs compare by numeric value, everything else case-insensitively.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = Chunks::new(a);
    let mut right = Chunks::new(b);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                let ord = compare_chunk(x, y);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn compare_chunk(x: &str, y: &str) -> Ordering {
    let x_digits = x.starts_with(|c: char| c.is_ascii_digit());
    let y_digits = y.starts_with(|c: char| c.is_ascii_digit());
    match (x_digits, y_digits) {
        (true, true) => {
            let xs = x.trim_start_matches('0');
            let ys = y.trim_start_matches('0');
            xs.len().cmp(&ys.len()).then_with(|| xs.cmp(ys))
        }
        _ => x.to_lowercase().cmp(&y.to_lowercase()),
    }
}

/// Splits a string into alternating digit / non-digit runs
struct Chunks<'a> {
    rest: &'a str,
}

impl<'a> Chunks<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let digits = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(self.rest.len());
        let (chunk, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(chunk)
    }
}
