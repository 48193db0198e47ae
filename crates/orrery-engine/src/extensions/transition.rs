// extensions/transition.rs
//
// Camera transition controller: a single time-bounded, eased flight of the
// camera position and look-at point. Idle -> Animating -> Idle.
//
// Usage:
//   let mut transitions = TransitionController::new(1200.0, Easing::SmoothStep);
//   transitions.start_toward(&camera, body_pos, body_radius, &policy);
//   transitions.advance(dt, &mut camera);  // once per tick

use glam::Vec3;
use serde::{Deserialize, Serialize};
use crate::renderer::camera::Camera3D;
use super::easing::{Easing, lerp_vec3};

/// Where the camera ends up relative to the body it flies to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OffsetPolicy {
    /// Fixed offset from the target (close-up framing).
    RelativeToTarget { offset: Vec3 },
    /// Fixed point along `direction` from the world origin, ignoring the
    /// target's location (wide orbital view).
    FixedFromOrigin { direction: Vec3, distance: f32 },
    /// Back off from the target along `direction` by a multiple of the
    /// body's radius, never closer than `min_distance`.
    ScaledByRadius {
        direction: Vec3,
        multiple: f32,
        min_distance: f32,
    },
}

impl OffsetPolicy {
    /// Camera end position for a target at `target` with visual `radius`.
    pub fn end_position(&self, target: Vec3, radius: f32) -> Vec3 {
        match *self {
            OffsetPolicy::RelativeToTarget { offset } => target + offset,
            OffsetPolicy::FixedFromOrigin { direction, distance } => {
                direction.normalize_or_zero() * distance
            }
            OffsetPolicy::ScaledByRadius {
                direction,
                multiple,
                min_distance,
            } => {
                let distance = (radius * multiple).max(min_distance);
                target + direction.normalize_or_zero() * distance
            }
        }
    }
}

impl Default for OffsetPolicy {
    fn default() -> Self {
        OffsetPolicy::RelativeToTarget {
            offset: Vec3::new(0.0, 40.0, 70.0),
        }
    }
}

/// An in-flight camera move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransition {
    pub start_position: Vec3,
    pub end_position: Vec3,
    pub start_target: Vec3,
    pub end_target: Vec3,
    /// Controller clock reading (seconds) when the move began.
    pub start_time: f64,
    pub duration_ms: f32,
}

impl CameraTransition {
    /// Normalized progress [0, 1] at controller time `now`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let elapsed_ms = ((now - self.start_time) * 1000.0) as f32;
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }
}

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Animating(CameraTransition),
}

/// Outcome of starting a transition. `Preempted` is informational: an earlier
/// flight was abandoned mid-way and replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStart {
    Started,
    Preempted,
}

/// Drives at most one camera transition at a time. A new start replaces the
/// current one immediately; there is no queue.
#[derive(Debug, Clone)]
pub struct TransitionController {
    state: TransitionState,
    /// Unscaled seconds accumulated from `advance`.
    now: f64,
    duration_ms: f32,
    easing: Easing,
    preempted: u32,
}

impl TransitionController {
    pub fn new(duration_ms: f32, easing: Easing) -> Self {
        Self {
            state: TransitionState::Idle,
            now: 0.0,
            duration_ms,
            easing,
            preempted: 0,
        }
    }

    /// Begin flying from wherever the camera currently is to the given
    /// position and look-at point.
    ///
    /// The start is snapshotted from the live camera, not from a previous
    /// transition's end, so preempting mid-flight keeps the path continuous.
    pub fn start(
        &mut self,
        camera: &Camera3D,
        end_position: Vec3,
        end_target: Vec3,
    ) -> TransitionStart {
        let outcome = if self.is_animating() {
            self.preempted += 1;
            log::debug!("camera transition preempted mid-flight");
            TransitionStart::Preempted
        } else {
            TransitionStart::Started
        };

        self.state = TransitionState::Animating(CameraTransition {
            start_position: camera.position,
            end_position,
            start_target: camera.target,
            end_target,
            start_time: self.now,
            duration_ms: self.duration_ms,
        });
        outcome
    }

    /// Begin flying toward a body at `target` with visual `radius`, framed by
    /// `policy`.
    pub fn start_toward(
        &mut self,
        camera: &Camera3D,
        target: Vec3,
        radius: f32,
        policy: &OffsetPolicy,
    ) -> TransitionStart {
        self.start(camera, policy.end_position(target, radius), target)
    }

    /// Advance the controller clock and write the interpolated view into the
    /// camera. Returns `true` on the tick the transition completes.
    ///
    /// On completion the camera is set to the exact end values, with no
    /// interpolation residue.
    pub fn advance(&mut self, dt: f32, camera: &mut Camera3D) -> bool {
        if dt.is_finite() && dt > 0.0 {
            self.now += dt as f64;
        }

        let TransitionState::Animating(tr) = self.state else {
            return false;
        };

        let t = tr.progress(self.now);
        if t >= 1.0 {
            camera.set_view(tr.end_position, tr.end_target);
            self.state = TransitionState::Idle;
            return true;
        }

        let e = self.easing.apply(t);
        camera.set_view(
            lerp_vec3(tr.start_position, tr.end_position, e),
            lerp_vec3(tr.start_target, tr.end_target, e),
        );
        false
    }

    /// Abort any flight and jump straight to a view, without easing.
    pub fn cancel_to(&mut self, camera: &mut Camera3D, position: Vec3, target: Vec3) {
        self.state = TransitionState::Idle;
        camera.set_view(position, target);
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, TransitionState::Animating(_))
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// The in-flight transition, if any.
    pub fn current(&self) -> Option<&CameraTransition> {
        match &self.state {
            TransitionState::Animating(tr) => Some(tr),
            TransitionState::Idle => None,
        }
    }

    /// Progress of the in-flight transition, `None` when idle.
    pub fn progress(&self) -> Option<f32> {
        self.current().map(|tr| tr.progress(self.now))
    }

    /// How many transitions have been abandoned by a newer start.
    pub fn preempted_count(&self) -> u32 {
        self.preempted
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new(1200.0, Easing::SmoothStep)
    }
}
