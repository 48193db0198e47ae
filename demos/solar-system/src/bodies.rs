/// Scene data: the Sun, eight planets, a handful of moons and a backdrop of
/// bright named stars.
///
/// Distances and sizes are display units, not physical ones. Angular speeds
/// are radians per simulated second; at time scale 1 Earth laps the Sun in
/// about 90 seconds.

use std::f64::consts::TAU;
use glam::Vec3;
use orrery_engine::{Appearance, BodyCatalog, BodyColor, BodyKind, BodyRecord, Orbit};

/// Planet speed unit → radians per simulated second.
pub const SPEED_TO_RAD: f64 = 0.024;
/// Self-rotation of planets and moons, radians per simulated second.
pub const SPIN_RATE: f32 = 0.6;

// ── Sun ──────────────────────────────────────────────────────────────

pub const SUN_ID: &str = "sun";
pub const SUN_RADIUS: f32 = 20.0;
pub const SUN_COLOR: u32 = 0xffdd88;
pub const SUN_EMISSIVE: f32 = 3.5;

// ── Planets ──────────────────────────────────────────────────────────

pub struct PlanetDesc {
    pub name: &'static str,
    pub radius: f32,
    pub orbit_radius: f64,
    /// Relative speed; multiplied by `SPEED_TO_RAD`.
    pub speed: f64,
    pub color: u32,
    pub info: &'static str,
}

pub const PLANET_COUNT: usize = 8;

#[rustfmt::skip]
pub const PLANETS: [PlanetDesc; PLANET_COUNT] = [
    PlanetDesc { name: "Mercury", radius: 4.0,  orbit_radius: 40.0,  speed: 4.7,  color: 0xb5b5b5, info: "Smallest planet." },
    PlanetDesc { name: "Venus",   radius: 6.0,  orbit_radius: 60.0,  speed: 3.5,  color: 0xffd79a, info: "Hot and toxic atmosphere." },
    PlanetDesc { name: "Earth",   radius: 7.0,  orbit_radius: 80.0,  speed: 2.9,  color: 0x4aaeff, info: "Our home planet." },
    PlanetDesc { name: "Mars",    radius: 6.0,  orbit_radius: 100.0, speed: 2.4,  color: 0xff6b47, info: "The red planet." },
    PlanetDesc { name: "Jupiter", radius: 14.0, orbit_radius: 130.0, speed: 1.3,  color: 0xf1e1c2, info: "Largest planet." },
    PlanetDesc { name: "Saturn",  radius: 12.0, orbit_radius: 160.0, speed: 0.97, color: 0xfbeec0, info: "Has a beautiful ring." },
    PlanetDesc { name: "Uranus",  radius: 10.0, orbit_radius: 200.0, speed: 0.68, color: 0xa8eaff, info: "Tilted sideways." },
    PlanetDesc { name: "Neptune", radius: 10.0, orbit_radius: 240.0, speed: 0.54, color: 0x6f86ff, info: "Farthest planet." },
];

/// Registry id of a planet (its lowercase name).
pub fn planet_id(index: usize) -> Option<String> {
    PLANETS.get(index).map(|p| p.name.to_lowercase())
}

// ── Moons ────────────────────────────────────────────────────────────

/// Circular orbit around a planet.
pub struct MoonDesc {
    pub name: &'static str,
    /// Index into `PLANETS`.
    pub parent: usize,
    /// Distance from the parent's center. Clear of the parent's radius.
    pub orbit_radius: f64,
    /// Negative for retrograde.
    pub angular_speed: f64,
    pub radius: f32,
    pub color: u32,
}

#[rustfmt::skip]
pub const MOONS: [MoonDesc; 9] = [
    MoonDesc { name: "Moon",     parent: 2, orbit_radius: 12.0, angular_speed: 0.93,  radius: 1.8, color: 0xb3b3b3 },
    MoonDesc { name: "Phobos",   parent: 3, orbit_radius: 9.0,  angular_speed: 2.4,   radius: 0.9, color: 0x807366 },
    MoonDesc { name: "Deimos",   parent: 3, orbit_radius: 12.0, angular_speed: 1.5,   radius: 0.7, color: 0x8c8073 },
    MoonDesc { name: "Io",       parent: 4, orbit_radius: 18.0, angular_speed: 1.9,   radius: 1.6, color: 0xe6cc4d },
    MoonDesc { name: "Europa",   parent: 4, orbit_radius: 21.0, angular_speed: 1.35,  radius: 1.4, color: 0xccb380 },
    MoonDesc { name: "Ganymede", parent: 4, orbit_radius: 25.0, angular_speed: 0.95,  radius: 2.0, color: 0x998c80 },
    MoonDesc { name: "Callisto", parent: 4, orbit_radius: 29.0, angular_speed: 0.62,  radius: 1.8, color: 0x594d47 },
    MoonDesc { name: "Titan",    parent: 5, orbit_radius: 20.0, angular_speed: 0.64,  radius: 2.0, color: 0xd9b34d },
    MoonDesc { name: "Triton",   parent: 7, orbit_radius: 15.0, angular_speed: -0.85, radius: 1.6, color: 0x99b3cc },
];

// ── Backdrop stars ───────────────────────────────────────────────────

/// Radius of the sphere the named stars sit on. Inside the camera far plane.
pub const STAR_SPHERE_RADIUS: f32 = 2500.0;

pub struct StarDesc {
    pub name: &'static str,
    /// Right ascension in hours.
    pub ra_hours: f64,
    /// Declination in degrees.
    pub dec_degrees: f64,
    /// Apparent visual magnitude (smaller is brighter).
    pub magnitude: f32,
}

#[rustfmt::skip]
pub const STARS: [StarDesc; 15] = [
    StarDesc { name: "Sirius",     ra_hours: 6.752,  dec_degrees: -16.716, magnitude: -1.46 },
    StarDesc { name: "Canopus",    ra_hours: 6.399,  dec_degrees: -52.696, magnitude: -0.74 },
    StarDesc { name: "Arcturus",   ra_hours: 14.261, dec_degrees: 19.182,  magnitude: -0.05 },
    StarDesc { name: "Vega",       ra_hours: 18.616, dec_degrees: 38.784,  magnitude: 0.03 },
    StarDesc { name: "Capella",    ra_hours: 5.278,  dec_degrees: 45.998,  magnitude: 0.08 },
    StarDesc { name: "Rigel",      ra_hours: 5.242,  dec_degrees: -8.202,  magnitude: 0.13 },
    StarDesc { name: "Procyon",    ra_hours: 7.655,  dec_degrees: 5.225,   magnitude: 0.34 },
    StarDesc { name: "Betelgeuse", ra_hours: 5.919,  dec_degrees: 7.407,   magnitude: 0.42 },
    StarDesc { name: "Altair",     ra_hours: 19.846, dec_degrees: 8.868,   magnitude: 0.76 },
    StarDesc { name: "Aldebaran",  ra_hours: 4.599,  dec_degrees: 16.509,  magnitude: 0.86 },
    StarDesc { name: "Antares",    ra_hours: 16.490, dec_degrees: -26.432, magnitude: 0.96 },
    StarDesc { name: "Spica",      ra_hours: 13.420, dec_degrees: -11.161, magnitude: 0.97 },
    StarDesc { name: "Pollux",     ra_hours: 7.755,  dec_degrees: 28.026,  magnitude: 1.14 },
    StarDesc { name: "Deneb",      ra_hours: 20.690, dec_degrees: 45.280,  magnitude: 1.25 },
    StarDesc { name: "Polaris",    ra_hours: 2.530,  dec_degrees: 89.264,  magnitude: 1.98 },
];

/// Unit direction for equatorial coordinates, Y toward the celestial pole.
pub fn sky_direction(ra_hours: f64, dec_degrees: f64) -> Vec3 {
    let ra = ra_hours / 24.0 * TAU;
    let dec = dec_degrees.to_radians();
    Vec3::new(
        (dec.cos() * ra.cos()) as f32,
        dec.sin() as f32,
        (-dec.cos() * ra.sin()) as f32,
    )
}

/// Display radius for a star: brighter stars are bigger.
pub fn star_radius(magnitude: f32) -> f32 {
    (14.0 - 3.0 * magnitude).clamp(6.0, 20.0)
}

/// Deterministic hash for orbit phases (no external rand crate).
pub fn phase_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

/// Starting angle in `[0, TAU)` derived from `seed`.
pub fn initial_phase(seed: u32) -> f64 {
    phase_hash(seed) as f64 / (u32::MAX as f64 + 1.0) * TAU
}

// ── Catalog ──────────────────────────────────────────────────────────

fn record(id: String, name: &str, kind: BodyKind) -> BodyRecord {
    BodyRecord {
        id,
        name: name.to_string(),
        kind,
        orbit: None,
        position: None,
        parent: None,
        spin_rate: 0.0,
        appearance: Appearance::default(),
        metadata: serde_json::Value::Null,
    }
}

/// The whole scene, parents before children.
pub fn scene_catalog() -> BodyCatalog {
    let mut bodies = Vec::with_capacity(1 + PLANET_COUNT + MOONS.len() + STARS.len());

    let mut sun = record(SUN_ID.to_string(), "Sun", BodyKind::Star);
    sun.spin_rate = 0.05;
    sun.appearance =
        Appearance::new(SUN_RADIUS, BodyColor::from_hex(SUN_COLOR)).with_emissive(SUN_EMISSIVE);
    sun.metadata = serde_json::json!({ "info": "The star at the center." });
    bodies.push(sun);

    for (i, p) in PLANETS.iter().enumerate() {
        let angular_speed = p.speed * SPEED_TO_RAD;
        let mut planet = record(p.name.to_lowercase(), p.name, BodyKind::Planet);
        let phase = initial_phase(i as u32 * 7 + 31);
        planet.orbit = Some(Orbit::new(p.orbit_radius, angular_speed, phase));
        planet.parent = Some(SUN_ID.to_string());
        planet.spin_rate = SPIN_RATE;
        planet.appearance = Appearance::new(p.radius, BodyColor::from_hex(p.color));
        planet.metadata = serde_json::json!({
            "info": p.info,
            "speed": p.speed,
            "period_s": TAU / angular_speed,
        });
        bodies.push(planet);
    }

    for (i, m) in MOONS.iter().enumerate() {
        let parent = PLANETS[m.parent].name;
        let mut moon = record(m.name.to_lowercase(), m.name, BodyKind::Moon);
        let phase = initial_phase(i as u32 * 13 + 97);
        moon.orbit = Some(Orbit::new(m.orbit_radius, m.angular_speed, phase));
        moon.parent = Some(parent.to_lowercase());
        moon.spin_rate = SPIN_RATE;
        moon.appearance = Appearance::new(m.radius, BodyColor::from_hex(m.color));
        moon.metadata = serde_json::json!({ "info": format!("Moon of {parent}.") });
        bodies.push(moon);
    }

    for s in &STARS {
        let mut star = record(s.name.to_lowercase(), s.name, BodyKind::Star);
        star.position = Some(sky_direction(s.ra_hours, s.dec_degrees) * STAR_SPHERE_RADIUS);
        star.appearance = Appearance::new(star_radius(s.magnitude), BodyColor::new(1.0, 1.0, 0.95))
            .with_emissive(1.0);
        star.metadata = serde_json::json!({
            "ra_hours": s.ra_hours,
            "dec_degrees": s.dec_degrees,
            "magnitude": s.magnitude,
        });
        bodies.push(star);
    }

    BodyCatalog { bodies }
}
