//! Gallery index: O(1) lookup of project records by id.

use std::collections::HashMap;

use crate::types::ProjectRecord;

/// Lookup from project id to project record.
///
/// Built from the catalog with last-write-wins semantics: when two records
/// share an id, the later one replaces the earlier one. Replaced ids are
/// remembered so authoring tools can report them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryIndex {
    by_id: HashMap<String, ProjectRecord>,
    duplicates: Vec<String>,
}

impl GalleryIndex {
    /// Build the index from an ordered catalog
    pub fn build(catalog: &[ProjectRecord]) -> Self {
        let mut index = Self::default();
        for project in catalog {
            index.insert(project.clone());
        }
        index
    }

    fn insert(&mut self, project: ProjectRecord) {
        let id = project.id.clone();
        if self.by_id.insert(id.clone(), project).is_some() {
            tracing::warn!(id = %id, "duplicate project id, earlier entry replaced");
            if !self.duplicates.contains(&id) {
                self.duplicates.push(id);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.by_id.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Ids that appeared more than once in the catalog, in first-collision order
    pub fn duplicate_ids(&self) -> &[String] {
        &self.duplicates
    }
}
