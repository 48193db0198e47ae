// core/kinematics.rs
//
// Per-frame body motion. Orbit positions are a pure function of simulated
// time; spin and sky rotation are cosmetic increments that never feed back
// into positions.

use std::f32::consts::TAU;
use glam::Vec3;
use crate::core::registry::BodyRegistry;

/// Owns the global sky rotation and drives body transforms each tick.
#[derive(Debug, Clone, Default)]
pub struct Kinematics {
    /// Rotation of the whole background sphere, radians in `[0, TAU)`.
    sky_rotation: f32,
    /// Radians per simulated second.
    sky_rotation_rate: f32,
}

impl Kinematics {
    pub fn new(sky_rotation_rate: f32) -> Self {
        Self {
            sky_rotation: 0.0,
            sky_rotation_rate,
        }
    }

    /// Run one tick: recompute orbit positions at `sim_time`, then advance
    /// spin and sky rotation by `sim_dt`.
    pub fn update(&mut self, registry: &mut BodyRegistry, sim_time: f64, sim_dt: f64) {
        update_positions(registry, sim_time);
        apply_spin(registry, sim_dt);
        if self.sky_rotation_rate.is_finite() {
            self.sky_rotation =
                wrap_angle(self.sky_rotation + self.sky_rotation_rate * sim_dt as f32);
        }
    }

    pub fn sky_rotation(&self) -> f32 {
        self.sky_rotation
    }
}

/// Place every orbiting body at `parent_position + orbit(t)`.
///
/// Relies on parents being registered before their children: walking slots in
/// order means a parent's position is already current when its child reads it.
pub fn update_positions(registry: &mut BodyRegistry, t: f64) {
    for slot in 0..registry.len() {
        let Some(orbit) = registry.get(slot).and_then(|b| b.orbit) else {
            continue;
        };
        let origin = registry
            .parent_slot(slot)
            .and_then(|p| registry.get(p))
            .map(|parent| parent.transform.position)
            .unwrap_or(Vec3::ZERO);

        if let Some(transform) = registry.transform_mut(slot) {
            transform.position = origin + orbit.local_position(t);
        }
    }
}

/// Fold an angle into `[0, TAU)`.
///
/// `rem_euclid` rounds tiny negative inputs up to exactly `TAU`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Advance each body's cosmetic self-rotation.
pub fn apply_spin(registry: &mut BodyRegistry, sim_dt: f64) {
    let dt = sim_dt as f32;
    for slot in 0..registry.len() {
        let Some(rate) = registry.get(slot).map(|b| b.spin_rate) else {
            continue;
        };
        if rate == 0.0 || !rate.is_finite() {
            continue;
        }
        if let Some(transform) = registry.transform_mut(slot) {
            transform.spin = wrap_angle(transform.spin + rate * dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::{Body, BodyKind, Orbit};
    use crate::core::time::SimClock;

    const EPS: f32 = 1e-3;

    fn scene() -> BodyRegistry {
        let mut reg = BodyRegistry::new();
        reg.register(Body::new("sun", "Sun", BodyKind::Star)).unwrap();
        reg.register(
            Body::new("earth", "Earth", BodyKind::Planet)
                .with_orbit(Orbit::new(80.0, 0.7, 0.3))
                .with_spin_rate(0.6),
        )
        .unwrap();
        reg.register(
            Body::new("moon", "Moon", BodyKind::Moon)
                .with_parent("earth")
                .with_orbit(Orbit::new(12.0, -2.5, 1.0)),
        )
        .unwrap();
        reg.register(
            Body::new("vega", "Vega", BodyKind::Star).with_position(Vec3::new(0.0, 900.0, -900.0)),
        )
        .unwrap();
        reg
    }

    fn position(reg: &BodyRegistry, id: &str) -> Vec3 {
        reg.find(id).unwrap().transform.position
    }

    #[test]
    fn orbit_formula_in_world_space() {
        let mut reg = scene();
        update_positions(&mut reg, 2.0);

        let angle = 0.3 + 0.7 * 2.0_f64;
        let expected = Vec3::new((80.0 * angle.cos()) as f32, 0.0, (80.0 * angle.sin()) as f32);
        assert!((position(&reg, "earth") - expected).length() < EPS);
    }

    #[test]
    fn moon_orbits_current_parent_position() {
        let mut reg = scene();
        update_positions(&mut reg, 5.0);

        let earth = position(&reg, "earth");
        let moon = position(&reg, "moon");
        let offset = moon - earth;
        assert!((offset.length() - 12.0).abs() < EPS);
        assert!(offset.y.abs() < EPS);
    }

    #[test]
    fn static_bodies_stay_put() {
        let mut reg = scene();
        update_positions(&mut reg, 123.0);
        apply_spin(&mut reg, 1.0);
        assert_eq!(position(&reg, "vega"), Vec3::new(0.0, 900.0, -900.0));
        assert_eq!(position(&reg, "sun"), Vec3::ZERO);
    }

    #[test]
    fn positions_are_periodic() {
        let mut reg = scene();
        let t = 3.7;
        update_positions(&mut reg, t);
        let before = position(&reg, "earth");

        let period = reg.find("earth").unwrap().orbit.unwrap().period().unwrap();
        update_positions(&mut reg, t + period);
        assert!((position(&reg, "earth") - before).length() < EPS);
    }

    #[test]
    fn zero_time_scale_freezes_positions() {
        let mut reg = scene();
        let mut kin = Kinematics::new(0.0);
        let mut clock = SimClock::new(0.0, 1.0);

        let dt = clock.advance(0.016);
        kin.update(&mut reg, clock.simulated_time(), dt);
        let first = position(&reg, "moon");

        let dt = clock.advance(0.5);
        kin.update(&mut reg, clock.simulated_time(), dt);
        assert_eq!(position(&reg, "moon"), first);
    }

    #[test]
    fn reversing_time_returns_to_start() {
        let mut reg = scene();
        let mut kin = Kinematics::new(0.0);
        let mut clock = SimClock::new(1.0, 1.0);
        kin.update(&mut reg, clock.simulated_time(), 0.0);
        let start = position(&reg, "moon");

        for _ in 0..60 {
            let dt = clock.advance(1.0 / 60.0);
            kin.update(&mut reg, clock.simulated_time(), dt);
        }
        assert!((position(&reg, "moon") - start).length() > 1.0);

        clock.set_time_scale(-1.0);
        for _ in 0..60 {
            let dt = clock.advance(1.0 / 60.0);
            kin.update(&mut reg, clock.simulated_time(), dt);
        }
        assert!((position(&reg, "moon") - start).length() < EPS);
    }

    #[test]
    fn spin_does_not_touch_position() {
        let mut reg = scene();
        update_positions(&mut reg, 1.0);
        let before = position(&reg, "earth");

        apply_spin(&mut reg, 100.0);
        let earth = reg.find("earth").unwrap();
        assert_eq!(earth.transform.position, before);
        assert!(earth.transform.spin >= 0.0 && earth.transform.spin < TAU);
    }

    #[test]
    fn wrap_angle_stays_below_tau() {
        assert_eq!(wrap_angle(-1e-9), 0.0);
        assert_eq!(wrap_angle(TAU), 0.0);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < 1e-6);
        assert!((wrap_angle(7.0) - (7.0 - TAU)).abs() < 1e-5);
    }

    #[test]
    fn tiny_reverse_step_keeps_angles_in_range() {
        let mut reg = BodyRegistry::new();
        reg.register(Body::new("earth", "Earth", BodyKind::Planet).with_spin_rate(1.0))
            .unwrap();
        let mut kin = Kinematics::new(1.0);
        kin.update(&mut reg, -1e-9, -1e-9);

        let spin = reg.find("earth").unwrap().transform.spin;
        assert!((0.0..TAU).contains(&spin));
        assert!((0.0..TAU).contains(&kin.sky_rotation()));
    }

    #[test]
    fn sky_rotation_wraps() {
        let mut reg = BodyRegistry::new();
        let mut kin = Kinematics::new(1.0);
        kin.update(&mut reg, 0.0, 7.0);
        assert!((kin.sky_rotation() - (7.0 - TAU)).abs() < 1e-4);
    }
}
