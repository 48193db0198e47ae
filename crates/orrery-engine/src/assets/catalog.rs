use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::components::appearance::Appearance;
use crate::components::body::{Body, BodyKind, Orbit};
use crate::core::registry::BodyRegistry;
use crate::error::RegistryError;

/// Body catalog describing a scene's bodies. Loaded from JSON, either baked
/// into the game or fetched at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BodyCatalog {
    pub bodies: Vec<BodyRecord>,
}

/// One catalog entry. Either `orbit` or `position` places the body; when both
/// are missing it sits at the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub kind: BodyKind,
    #[serde(default)]
    pub orbit: Option<Orbit>,
    /// Fixed world position for static bodies, `[x, y, z]`.
    #[serde(default)]
    pub position: Option<Vec3>,
    /// Id of the body this one orbits. Must appear earlier in the catalog.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub spin_rate: f32,
    #[serde(default)]
    pub appearance: Appearance,
    /// Free-form descriptive fields passed through to the UI.
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl BodyRecord {
    pub fn into_body(self) -> Body {
        let mut body = Body::new(self.id, self.name, self.kind)
            .with_spin_rate(self.spin_rate)
            .with_appearance(self.appearance)
            .with_metadata(self.metadata);
        if let Some(position) = self.position {
            body = body.with_position(position);
        }
        if let Some(orbit) = self.orbit {
            body = body.with_orbit(orbit);
        }
        if let Some(parent) = self.parent {
            body = body.with_parent(parent);
        }
        body
    }
}

/// Outcome of registering a catalog.
#[derive(Debug, Default)]
pub struct CatalogReport {
    /// Slots assigned to the accepted records, in catalog order.
    pub registered: Vec<usize>,
    pub rejected: Vec<RegistryError>,
}

impl CatalogReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl BodyCatalog {
    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Register every record in order. A rejected record does not stop the
    /// rest; its error is collected in the report.
    pub fn register_into(self, registry: &mut BodyRegistry) -> CatalogReport {
        let mut report = CatalogReport::default();
        for record in self.bodies {
            match registry.register(record.into_body()) {
                Ok(slot) => report.registered.push(slot),
                Err(err) => {
                    log::warn!("catalog record rejected: {err}");
                    report.rejected.push(err);
                }
            }
        }
        log::info!(
            "catalog: {} registered, {} rejected ({} bodies total)",
            report.registered.len(),
            report.rejected.len(),
            registry.len()
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = r#"{
        "bodies": [
            { "id": "sun", "name": "Sun", "kind": "Star",
              "appearance": { "radius": 20.0, "emissive": 1.0 } },
            { "id": "earth", "name": "Earth",
              "orbit": { "radius": 80.0, "angular_speed": 0.0696 },
              "parent": "sun",
              "appearance": { "radius": 7.0, "color": { "r": 0.29, "g": 0.68, "b": 1.0 } },
              "metadata": { "info": "Our home planet." } },
            { "id": "moon", "name": "Moon", "kind": "Moon",
              "orbit": { "radius": 12.0, "angular_speed": 0.9, "phase": 1.0 },
              "parent": "earth",
              "appearance": { "radius": 2.0 } },
            { "id": "vega", "name": "Vega", "kind": "Other",
              "position": [300.0, 1200.0, -2000.0] }
        ]
    }"#;

    #[test]
    fn parse_and_register_scene() {
        let catalog = BodyCatalog::from_json(SCENE).unwrap();
        assert_eq!(catalog.len(), 4);

        let mut reg = BodyRegistry::new();
        let report = catalog.register_into(&mut reg);
        assert!(report.is_clean());
        assert_eq!(report.registered, vec![0, 1, 2, 3]);

        let earth = reg.find("earth").unwrap();
        assert_eq!(earth.parent.as_deref(), Some("sun"));
        assert_eq!(earth.appearance.radius, 7.0);
        assert_eq!(earth.metadata["info"], "Our home planet.");
        assert_eq!(reg.find("moon").unwrap().orbit.unwrap().phase, 1.0);
        assert_eq!(reg.find("sun").unwrap().kind, BodyKind::Star);

        let vega = reg.find("vega").unwrap();
        assert!(vega.is_static());
        assert_eq!(vega.transform.position, Vec3::new(300.0, 1200.0, -2000.0));
    }

    #[test]
    fn bad_records_are_reported_not_fatal() {
        let json = r#"{
            "bodies": [
                { "id": "sun", "name": "Sun" },
                { "id": "sun", "name": "Sun again" },
                { "id": "ghost", "name": "Ghost", "parent": "nowhere",
                  "orbit": { "radius": 5.0, "angular_speed": 1.0 } },
                { "id": "neg", "name": "Neg",
                  "orbit": { "radius": -5.0, "angular_speed": 1.0 } },
                { "id": "mars", "name": "Mars",
                  "orbit": { "radius": 100.0, "angular_speed": 0.05 } }
            ]
        }"#;
        let mut reg = BodyRegistry::new();
        let report = BodyCatalog::from_json(json).unwrap().register_into(&mut reg);

        assert_eq!(report.registered.len(), 2);
        assert_eq!(report.rejected.len(), 3);
        assert!(matches!(report.rejected[0], RegistryError::DuplicateId { .. }));
        assert!(matches!(report.rejected[1], RegistryError::UnknownParent { .. }));
        assert!(matches!(report.rejected[2], RegistryError::InvalidOrbit { .. }));
        assert_eq!(reg.find("sun").unwrap().name, "Sun");
        assert!(reg.find("mars").is_some());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(BodyCatalog::from_json("{ \"bodies\": [ { \"name\": 3 } ] }").is_err());
        assert!(BodyCatalog::from_json("not json").is_err());
    }
}
