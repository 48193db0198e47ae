use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::extensions::easing::Easing;
use crate::extensions::transition::OffsetPolicy;
use crate::renderer::camera::Camera3D;

/// Configuration for the engine, provided by the game.
/// Every section falls back to its defaults when missing from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrreryConfig {
    pub camera: CameraConfig,
    pub transition: TransitionConfig,
    pub time: TimeConfig,
}

/// Home view and projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub home_position: Vec3,
    pub home_target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial aspect ratio, replaced once the host reports its size.
    pub aspect: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            home_position: Vec3::new(0.0, 200.0, 400.0),
            home_target: Vec3::ZERO,
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 3000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl CameraConfig {
    /// Camera placed at the home view.
    pub fn build(&self) -> Camera3D {
        Camera3D::new(self.home_position, self.home_target).with_projection(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub duration_ms: f32,
    pub easing: Easing,
    pub offset: OffsetPolicy,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1200.0,
            easing: Easing::default(),
            offset: OffsetPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// Simulated seconds per real second at startup.
    pub time_scale: f64,
    /// Longest frame delta accepted, in seconds.
    pub max_frame_dt: f32,
    /// Backdrop rotation in radians per simulated second.
    pub sky_rotation_rate: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_frame_dt: 0.25,
            sky_rotation_rate: 0.0,
        }
    }
}

impl OrreryConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = OrreryConfig::from_json("{}").unwrap();
        assert_eq!(config, OrreryConfig::default());
        assert_eq!(config.transition.duration_ms, 1200.0);
        assert_eq!(config.camera.home_position, Vec3::new(0.0, 200.0, 400.0));
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let json = r#"{
            "transition": { "easing": "QuadOut" },
            "time": { "time_scale": 5.0 }
        }"#;
        let config = OrreryConfig::from_json(json).unwrap();
        assert_eq!(config.transition.easing, Easing::QuadOut);
        assert_eq!(config.transition.duration_ms, 1200.0);
        assert_eq!(config.time.time_scale, 5.0);
        assert_eq!(config.time.max_frame_dt, 0.25);
        assert_eq!(config.camera, CameraConfig::default());
    }

    #[test]
    fn json_roundtrip() {
        let mut config = OrreryConfig::default();
        config.transition.offset = OffsetPolicy::FixedFromOrigin {
            direction: Vec3::new(0.0, 1.0, 1.0),
            distance: 600.0,
        };
        let back = OrreryConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn camera_built_at_home() {
        let cam = CameraConfig::default().build();
        assert_eq!(cam.position, Vec3::new(0.0, 200.0, 400.0));
        assert_eq!(cam.target, Vec3::ZERO);
        assert!((cam.fov_y - 60f32.to_radians()).abs() < 1e-6);
    }
}
