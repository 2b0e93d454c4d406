//! Catalog data and selection-chain state.
//!
//! The entity → hall → camera pickers form a chain: choosing an entity
//! resets the hall and camera picks, choosing a hall resets the camera.
//! The camera pick itself lives in [`crate::state::HallState`], since
//! selecting a camera creates the hall view.

use seatmap::{sample_catalog, Camera, Catalog, Entity, Hall};

/// Where the current catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Remote fetch still in flight; the sample is shown meanwhile.
    Loading,
    /// Fetched from the catalog endpoint.
    Remote,
    /// Built-in sample data (endpoint unreachable).
    Sample,
}

/// State for the selection pickers and the catalog backing them.
pub struct CatalogState {
    catalog: Catalog,
    source: CatalogSource,
    selected_entity: Option<String>,
    selected_hall: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Starts with the sample catalog so the pickers work immediately;
    /// a completed remote fetch replaces it.
    pub fn new() -> Self {
        Self {
            catalog: sample_catalog().clone(),
            source: CatalogSource::Loading,
            selected_entity: None,
            selected_hall: None,
        }
    }

    // ===== Queries =====

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn selected_entity(&self) -> Option<&Entity> {
        self.selected_entity
            .as_deref()
            .and_then(|id| self.catalog.entity_by_id(id))
    }

    pub fn selected_hall(&self) -> Option<&Hall> {
        self.selected_hall
            .as_deref()
            .and_then(|id| self.catalog.hall_by_id(id))
    }

    /// Halls selectable for the chosen entity.
    pub fn available_halls(&self) -> Vec<&Hall> {
        match &self.selected_entity {
            Some(entity_id) => self.catalog.halls_for_entity(entity_id),
            None => Vec::new(),
        }
    }

    /// Cameras selectable for the chosen hall.
    pub fn available_cameras(&self) -> Vec<&Camera> {
        match &self.selected_hall {
            Some(hall_id) => self.catalog.cameras_for_hall(hall_id),
            None => Vec::new(),
        }
    }

    // ===== Mutations =====

    /// Replaces the catalog after a fetch completes.
    ///
    /// Selections are reset: remote identifiers need not match the
    /// sample's.
    pub fn install_catalog(&mut self, catalog: Catalog, remote: bool) {
        self.catalog = catalog;
        self.source = if remote {
            CatalogSource::Remote
        } else {
            CatalogSource::Sample
        };
        self.selected_entity = None;
        self.selected_hall = None;
    }

    /// Selects an entity and resets the downstream picks.
    pub fn select_entity(&mut self, entity_id: &str) {
        self.selected_entity = Some(entity_id.to_string());
        self.selected_hall = None;
    }

    /// Selects a hall within the chosen entity.
    pub fn select_hall(&mut self, hall_id: &str) {
        self.selected_hall = Some(hall_id.to_string());
    }
}
