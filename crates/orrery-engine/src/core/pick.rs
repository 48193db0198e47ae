use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use crate::core::registry::BodyRegistry;
use crate::renderer::camera::Camera3D;

/// Distances closer than this are treated as a tie.
pub const TIE_EPSILON: f32 = 1e-4;

/// Ray for 3D picking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    pub fn at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }

    /// Distance along the ray to the first point on a sphere.
    ///
    /// Returns the nearest non-negative root, so a ray starting inside the
    /// sphere reports its exit point.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let a = self.direction.dot(self.direction);
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }
        let sqrt_d = discriminant.sqrt();
        let near = (-b - sqrt_d) / (2.0 * a);
        if near >= 0.0 {
            return Some(near);
        }
        let far = (-b + sqrt_d) / (2.0 * a);
        if far >= 0.0 {
            Some(far)
        } else {
            None
        }
    }
}

/// Screen region owned by the UI (sidebar, toolbar) in normalized pointer
/// space. Clicks inside never reach the scene. Edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExclusionRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ExclusionRect {
    /// Build from any two opposite corners.
    pub fn new(a: Vec2, b: Vec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// Registry slot of the hit body.
    pub slot: usize,
    /// Distance from the camera along the pick ray.
    pub distance: f32,
}

/// Resolves pointer positions to bodies. Holds only the UI exclusion regions;
/// picking itself reads the registry and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct PickResolver {
    exclusions: Vec<ExclusionRect>,
}

impl PickResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all exclusion regions with a single one.
    pub fn set_exclusion(&mut self, rect: ExclusionRect) {
        self.exclusions.clear();
        self.exclusions.push(rect);
    }

    pub fn clear_exclusions(&mut self) {
        self.exclusions.clear();
    }

    pub fn exclusions(&self) -> &[ExclusionRect] {
        &self.exclusions
    }

    /// Whether a pointer position falls inside any UI region.
    pub fn is_excluded(&self, ndc: Vec2) -> bool {
        self.exclusions.iter().any(|r| r.contains(ndc))
    }

    /// Nearest body under the pointer, or `None`.
    ///
    /// Pointers inside an exclusion region report no hit without casting a
    /// ray. Equal distances (within [`TIE_EPSILON`]) go to the body that was
    /// registered first.
    pub fn pick(
        &self,
        registry: &BodyRegistry,
        camera: &Camera3D,
        ndc: Vec2,
    ) -> Option<PickHit> {
        if self.is_excluded(ndc) {
            return None;
        }
        let ray = camera.ray_from_ndc(ndc);
        nearest_hit(registry, &ray)
    }
}

/// Nearest sphere hit along a ray across all bodies, first-registered on ties.
pub fn nearest_hit(registry: &BodyRegistry, ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for (slot, body) in registry.all().enumerate() {
        let Some(distance) = ray.intersects_sphere(body.transform.position, body.appearance.radius)
        else {
            continue;
        };
        let closer = match best {
            None => true,
            Some(b) => distance < b.distance - TIE_EPSILON,
        };
        if closer {
            best = Some(PickHit { slot, distance });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::{Body, BodyKind};

    fn camera() -> Camera3D {
        Camera3D::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO)
    }

    fn sphere(id: &str, at: Vec3, radius: f32) -> Body {
        Body::new(id, id, BodyKind::Planet).with_position(at).with_radius(radius)
    }

    #[test]
    fn sphere_hit_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let d = ray.intersects_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((d - 8.0).abs() < 1e-5);
        assert!(ray.intersects_sphere(Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
        // Behind the origin
        assert!(ray.intersects_sphere(Vec3::new(0.0, 0.0, 20.0), 2.0).is_none());
    }

    #[test]
    fn ray_inside_sphere_hits_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let d = ray.intersects_sphere(Vec3::ZERO, 3.0).unwrap();
        assert!((d - 3.0).abs() < 1e-5);
    }

    #[test]
    fn nearest_body_wins() {
        let mut reg = BodyRegistry::new();
        reg.register(sphere("far", Vec3::new(0.0, 0.0, -50.0), 10.0)).unwrap();
        reg.register(sphere("near", Vec3::new(0.0, 0.0, 20.0), 5.0)).unwrap();

        let hit = PickResolver::new().pick(&reg, &camera(), Vec2::ZERO).unwrap();
        assert_eq!(reg.get(hit.slot).unwrap().id, "near");
        assert!((hit.distance - 75.0).abs() < 1e-3);
    }

    #[test]
    fn exact_tie_goes_to_first_registered() {
        let mut reg = BodyRegistry::new();
        // Same center and radius: identical intersection distance
        reg.register(sphere("first", Vec3::ZERO, 5.0)).unwrap();
        reg.register(sphere("second", Vec3::ZERO, 5.0)).unwrap();

        let hit = PickResolver::new().pick(&reg, &camera(), Vec2::ZERO).unwrap();
        assert_eq!(hit.slot, 0);
    }

    #[test]
    fn miss_reports_none() {
        let mut reg = BodyRegistry::new();
        reg.register(sphere("earth", Vec3::ZERO, 1.0)).unwrap();
        assert!(PickResolver::new()
            .pick(&reg, &camera(), Vec2::new(0.9, 0.9))
            .is_none());
    }

    #[test]
    fn exclusion_region_short_circuits() {
        let mut reg = BodyRegistry::new();
        // Big enough to cover the whole view
        reg.register(sphere("sky", Vec3::ZERO, 80.0)).unwrap();

        let mut picker = PickResolver::new();
        picker.set_exclusion(ExclusionRect::new(Vec2::new(-1.0, -1.0), Vec2::new(-0.6, 1.0)));

        assert!(picker.pick(&reg, &camera(), Vec2::new(-0.8, 0.0)).is_none());
        assert!(picker.pick(&reg, &camera(), Vec2::new(-0.6, 1.0)).is_none());
        assert!(picker.pick(&reg, &camera(), Vec2::ZERO).is_some());

        picker.clear_exclusions();
        assert!(picker.pick(&reg, &camera(), Vec2::new(-0.8, 0.0)).is_some());
    }

    #[test]
    fn picking_does_not_mutate() {
        let mut reg = BodyRegistry::new();
        reg.register(sphere("earth", Vec3::new(1.0, 2.0, 3.0), 4.0)).unwrap();
        let before = reg.find("earth").unwrap().transform;
        let _ = PickResolver::new().pick(&reg, &camera(), Vec2::ZERO);
        assert_eq!(reg.find("earth").unwrap().transform, before);
    }
}
