use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::components::appearance::Appearance;

/// Broad category of a celestial body. Only used for display and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BodyKind {
    Star,
    #[default]
    Planet,
    Moon,
    Other,
}

impl BodyKind {
    /// Numeric code written into render snapshots.
    pub fn code(self) -> f32 {
        match self {
            BodyKind::Star => 0.0,
            BodyKind::Planet => 1.0,
            BodyKind::Moon => 2.0,
            BodyKind::Other => 3.0,
        }
    }
}

/// Circular orbit parameters.
///
/// `angular_speed` is in radians per simulated second; its sign picks the
/// direction of travel. `phase` is the angle at `t = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orbit {
    pub radius: f64,
    pub angular_speed: f64,
    #[serde(default)]
    pub phase: f64,
}

impl Orbit {
    pub fn new(radius: f64, angular_speed: f64, phase: f64) -> Self {
        Self { radius, angular_speed, phase }
    }

    /// Position in the parent's frame at simulated time `t`, on the XZ plane.
    pub fn local_position(&self, t: f64) -> Vec3 {
        let angle = self.phase + self.angular_speed * t;
        Vec3::new(
            (self.radius * angle.cos()) as f32,
            0.0,
            (self.radius * angle.sin()) as f32,
        )
    }

    /// Time for one full revolution, or `None` for a stationary orbit.
    pub fn period(&self) -> Option<f64> {
        if self.angular_speed == 0.0 {
            None
        } else {
            Some(std::f64::consts::TAU / self.angular_speed.abs())
        }
    }

    /// Describe the first problem that makes this orbit unusable.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if !self.radius.is_finite() {
            return Err(format!("radius {} is not finite", self.radius));
        }
        if self.radius < 0.0 {
            return Err(format!("radius {} is negative", self.radius));
        }
        if !self.angular_speed.is_finite() {
            return Err(format!("angular speed {} is not finite", self.angular_speed));
        }
        if !self.phase.is_finite() {
            return Err(format!("phase {} is not finite", self.phase));
        }
        Ok(())
    }
}

/// World-space placement. Written by the kinematics pass only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Transform {
    pub position: Vec3,
    /// Cosmetic self-rotation about the local Y axis, in `[0, TAU)`.
    pub spin: f32,
}

/// One orbiting or fixed body in the scene.
#[derive(Debug, Clone)]
pub struct Body {
    /// Stable identifier, unique within a registry.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    pub kind: BodyKind,
    pub transform: Transform,
    /// Present iff the body moves.
    pub orbit: Option<Orbit>,
    /// Id of the body whose position is this body's orbital origin.
    pub parent: Option<String>,
    /// Self-rotation rate in radians per simulated second.
    pub spin_rate: f32,
    pub appearance: Appearance,
    /// Descriptive payload for the UI panel. Never read by the core.
    pub metadata: serde_json::Value,
}

impl Body {
    /// Create a static body at the origin.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: BodyKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            transform: Transform::default(),
            orbit: None,
            parent: None,
            spin_rate: 0.0,
            appearance: Appearance::default(),
            metadata: serde_json::Value::Null,
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = Some(orbit);
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_spin_rate(mut self, spin_rate: f32) -> Self {
        self.spin_rate = spin_rate;
        self
    }

    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.appearance.radius = radius;
        self
    }

    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn is_static(&self) -> bool {
        self.orbit.is_none()
    }
}
