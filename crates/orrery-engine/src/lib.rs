pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;
pub mod extensions;
pub mod config;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::game::{Game, EngineContext};
pub use api::types::GameEvent;
pub use components::appearance::{Appearance, BodyColor};
pub use components::body::{Body, BodyKind, Orbit, Transform};
pub use core::registry::{BodyRegistry, MAX_PARENT_DEPTH};
pub use core::time::SimClock;
pub use core::kinematics::{Kinematics, update_positions, apply_spin};
pub use core::pick::{ExclusionRect, PickHit, PickResolver, Ray, TIE_EPSILON};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{BodyInstance, BodyBuffer};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::catalog::{BodyCatalog, BodyRecord, CatalogReport};
pub use systems::focus::{FocusInfo, SelectionCoordinator, find_by_name};
pub use systems::render::build_body_buffer;
pub use config::{OrreryConfig, CameraConfig, TransitionConfig, TimeConfig};
pub use error::RegistryError;

pub use extensions::{
    Easing, lerp, lerp_vec3, ease, ease_vec3,
    CameraTransition, OffsetPolicy, TransitionController, TransitionStart, TransitionState,
};
