// extensions/mod.rs
//
// Camera animation helpers. Independent of the body registry: they only
// read positions handed to them and write into a Camera3D.

pub mod easing;
pub mod transition;

pub use easing::{Easing, lerp, lerp_vec3, ease, ease_vec3};
pub use transition::{
    CameraTransition, OffsetPolicy, TransitionController, TransitionStart, TransitionState,
};
