//! Read-only catalog of places

use crate::filter::{filter_places, FilterState, Scope, TagFilter};
use crate::sample;
use crate::types::{AgeGroup, Category, Place};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate place id {0:?}")]
    DuplicateId(String),
}

/// Ordered, immutable collection of places
#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for place in &places {
            if !seen.insert(place.id.as_str()) {
                return Err(CatalogError::DuplicateId(place.id.clone()));
            }
        }
        Ok(Self { places })
    }

    /// The eight-place sample dataset bundled with the app
    pub fn builtin() -> Self {
        Self {
            places: sample::places(),
        }
    }

    /// Parse a JSON array of place records
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let places: Vec<Place> = serde_json::from_str(json)?;
        Self::new(places)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), places = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Detail lookup by place id
    pub fn find(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    /// Places with an event period
    pub fn events(&self) -> Vec<&Place> {
        self.filter(&FilterState::default(), Scope::Event)
    }

    pub fn by_category(&self, category: TagFilter<Category>) -> Vec<&Place> {
        let state = FilterState {
            category,
            ..FilterState::default()
        };
        self.filter(&state, Scope::Outing)
    }

    pub fn by_age(&self, age_group: TagFilter<AgeGroup>) -> Vec<&Place> {
        let state = FilterState {
            age_group,
            ..FilterState::default()
        };
        self.filter(&state, Scope::Outing)
    }

    pub fn filter(&self, state: &FilterState, scope: Scope) -> Vec<&Place> {
        filter_places(&self.places, state, scope)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert!(!catalog.is_empty());

        let ids: Vec<_> = catalog.places().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);

        // Builtin data satisfies the uniqueness check
        assert!(Catalog::new(catalog.places().to_vec()).is_ok());
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("4").map(|p| p.name.as_str()), Some("科学館"));
        assert!(catalog.find("999").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_events() {
        let catalog = Catalog::builtin();
        let events = catalog.events();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|p| p.is_event()));
    }

    #[test]
    fn test_by_category_and_age() {
        let catalog = Catalog::builtin();
        let indoor: Vec<_> = catalog
            .by_category(TagFilter::Only(Category::Indoor))
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(indoor, vec!["2", "8"]);

        assert_eq!(catalog.by_category(TagFilter::All).len(), 8);
        assert_eq!(catalog.by_age(TagFilter::Only(AgeGroup::Preschool)).len(), 7);
        assert!(catalog.by_age(TagFilter::Unknown("x".into())).is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut places = Catalog::builtin().places().to_vec();
        places[1].id = "1".to_string();
        assert!(matches!(
            Catalog::new(places),
            Err(CatalogError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("catalog.json");
        let builtin = Catalog::builtin();
        let places = &builtin.places()[..3];
        std::fs::write(&path, serde_json::to_string(places).unwrap()).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.events().len(), 1);
    }

    #[test]
    fn test_load_errors() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        assert!(matches!(Catalog::load(&missing), Err(CatalogError::Io { .. })));

        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }
}
