//! Entity / hall / camera catalog.
//!
//! The catalog comes from a remote endpoint when reachable, with a fixed
//! local sample as the fallback so the annotation UI never blocks on the
//! network. The wire format nests cameras inside halls inside entities;
//! it is flattened into three lists for the selection pickers.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

/// Default catalog endpoint. Overridable via `SEATMAP_CATALOG_URL`.
pub const DEFAULT_CATALOG_URL: &str = "http://192.168.0.227:8000/entities";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hall {
    pub id: String,
    pub name: String,
    pub entity_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub hall_id: String,
}

/// Flattened catalog of selectable entities, halls and cameras.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub entities: Vec<Entity>,
    pub halls: Vec<Hall>,
    pub cameras: Vec<Camera>,
}

impl Catalog {
    pub fn halls_for_entity<'a>(&'a self, entity_id: &str) -> Vec<&'a Hall> {
        self.halls.iter().filter(|h| h.entity_id == entity_id).collect()
    }

    pub fn cameras_for_hall<'a>(&'a self, hall_id: &str) -> Vec<&'a Camera> {
        self.cameras.iter().filter(|c| c.hall_id == hall_id).collect()
    }

    pub fn entity_by_id(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn hall_by_id(&self, id: &str) -> Option<&Hall> {
        self.halls.iter().find(|h| h.id == id)
    }

    pub fn camera_by_id(&self, id: &str) -> Option<&Camera> {
        self.cameras.iter().find(|c| c.id == id)
    }
}

// Wire format of the remote endpoint.

#[derive(Debug, Deserialize)]
struct ApiCamera {
    #[serde(rename = "cameraId")]
    camera_id: String,
    #[serde(rename = "cameraName")]
    camera_name: String,
}

#[derive(Debug, Deserialize)]
struct ApiHall {
    #[serde(rename = "hallId")]
    hall_id: String,
    #[serde(rename = "hallName")]
    hall_name: String,
    cameras: Vec<ApiCamera>,
}

#[derive(Debug, Deserialize)]
struct ApiEntity {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "entityName")]
    entity_name: String,
    halls: Vec<ApiHall>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    entities: Vec<ApiEntity>,
}

impl From<ApiResponse> for Catalog {
    fn from(response: ApiResponse) -> Self {
        let mut catalog = Catalog::default();
        for entity in response.entities {
            for hall in &entity.halls {
                for camera in &hall.cameras {
                    catalog.cameras.push(Camera {
                        id: camera.camera_id.clone(),
                        name: camera.camera_name.clone(),
                        hall_id: hall.hall_id.clone(),
                    });
                }
                catalog.halls.push(Hall {
                    id: hall.hall_id.clone(),
                    name: hall.hall_name.clone(),
                    entity_id: entity.id.clone(),
                });
            }
            catalog.entities.push(Entity {
                id: entity.id,
                name: entity.entity_name,
            });
        }
        catalog
    }
}

/// Parses the remote wire format into a flattened catalog.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let response: ApiResponse =
        serde_json::from_str(json).context("malformed catalog response")?;
    Ok(response.into())
}

/// Fetches the catalog from the remote endpoint.
///
/// Blocking; run it off the UI thread. Callers fall back to
/// [`sample_catalog`] on any error.
pub fn fetch_catalog(url: &str) -> Result<Catalog> {
    let response = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()?
        .get(url)
        .send()
        .with_context(|| format!("catalog request to {} failed", url))?
        .error_for_status()?;
    let body = response.text()?;
    parse_catalog(&body)
}

static SAMPLE_CATALOG: Lazy<Catalog> = Lazy::new(|| {
    let entity = |id: &str, name: &str| Entity { id: id.into(), name: name.into() };
    let hall = |id: &str, name: &str, entity_id: &str| Hall {
        id: id.into(),
        name: name.into(),
        entity_id: entity_id.into(),
    };
    let camera = |id: &str, name: &str, hall_id: &str| Camera {
        id: id.into(),
        name: name.into(),
        hall_id: hall_id.into(),
    };

    Catalog {
        entities: vec![
            entity("entity1", "Cinema Complex A"),
            entity("entity2", "Cinema Complex B"),
        ],
        halls: vec![
            hall("hall1", "Hall 1", "entity1"),
            hall("hall2", "Hall 2", "entity1"),
            hall("hall3", "Hall 3", "entity2"),
        ],
        cameras: vec![
            camera("camera1", "Front Camera", "hall1"),
            camera("camera2", "Back Camera", "hall1"),
            camera("camera3", "Main Camera", "hall2"),
            camera("camera4", "Side Camera", "hall3"),
        ],
    }
});

/// Built-in catalog used when the remote endpoint is unreachable.
pub fn sample_catalog() -> &'static Catalog {
    &SAMPLE_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_relationships_are_consistent() {
        let catalog = sample_catalog();
        assert_eq!(catalog.entities.len(), 2);
        assert_eq!(catalog.halls.len(), 3);
        assert_eq!(catalog.cameras.len(), 4);
        for hall in &catalog.halls {
            assert!(catalog.entity_by_id(&hall.entity_id).is_some());
        }
        for camera in &catalog.cameras {
            assert!(catalog.hall_by_id(&camera.hall_id).is_some());
        }
    }

    #[test]
    fn filtering_follows_the_hierarchy() {
        let catalog = sample_catalog();
        let halls = catalog.halls_for_entity("entity1");
        assert_eq!(halls.len(), 2);
        let cameras = catalog.cameras_for_hall("hall1");
        assert_eq!(cameras.len(), 2);
        assert!(cameras.iter().all(|c| c.hall_id == "hall1"));
        assert!(catalog.cameras_for_hall("no-such-hall").is_empty());
    }

    #[test]
    fn parses_and_flattens_the_wire_format() {
        let json = r#"{
            "entities": [
                {
                    "_id": "e1",
                    "entityName": "Complex",
                    "halls": [
                        {
                            "hallId": "h1",
                            "hallName": "Big Hall",
                            "cameras": [
                                { "cameraId": "c1", "cameraName": "Front" },
                                { "cameraId": "c2", "cameraName": "Back" }
                            ]
                        }
                    ]
                }
            ]
        }"#;
        let catalog = parse_catalog(json).unwrap();
        assert_eq!(catalog.entities.len(), 1);
        assert_eq!(catalog.halls.len(), 1);
        assert_eq!(catalog.cameras.len(), 2);
        assert_eq!(catalog.halls[0].entity_id, "e1");
        assert_eq!(catalog.cameras[1].hall_id, "h1");
        assert_eq!(catalog.cameras[1].name, "Back");
    }

    #[test]
    fn rejects_malformed_responses() {
        assert!(parse_catalog("not json").is_err());
        assert!(parse_catalog(r#"{"entities": [{"_id": 3}]}"#).is_err());
    }
}
