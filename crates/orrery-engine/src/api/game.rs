use glam::{Vec2, Vec3};
use crate::api::types::GameEvent;
use crate::assets::catalog::{BodyCatalog, CatalogReport};
use crate::components::body::Body;
use crate::config::OrreryConfig;
use crate::core::kinematics::{update_positions, Kinematics};
use crate::core::pick::PickResolver;
use crate::core::registry::BodyRegistry;
use crate::core::time::SimClock;
use crate::error::RegistryError;
use crate::extensions::transition::TransitionController;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::systems::focus::{FocusInfo, SelectionCoordinator};

/// The core contract every scene must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> OrreryConfig {
        OrreryConfig::default()
    }

    /// Register bodies and set up the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-tick input handling: clicks, searches, time controls.
    /// Body positions are already current for this tick when this runs.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub bodies: BodyRegistry,
    pub clock: SimClock,
    pub kinematics: Kinematics,
    pub camera: Camera3D,
    pub transitions: TransitionController,
    pub picker: PickResolver,
    pub focus: SelectionCoordinator,
    pub events: Vec<GameEvent>,
    home_position: Vec3,
    home_target: Vec3,
}

impl EngineContext {
    pub fn new(config: &OrreryConfig) -> Self {
        let camera = config.camera.build();
        Self {
            bodies: BodyRegistry::new(),
            clock: SimClock::new(config.time.time_scale, config.time.max_frame_dt),
            kinematics: Kinematics::new(config.time.sky_rotation_rate),
            camera,
            transitions: TransitionController::new(
                config.transition.duration_ms,
                config.transition.easing,
            ),
            picker: PickResolver::new(),
            focus: SelectionCoordinator::new(config.transition.offset),
            events: Vec::new(),
            home_position: camera.position,
            home_target: camera.target,
        }
    }

    // ── Scene setup ──────────────────────────────────────────────────────

    /// Register a body and place it at the current simulated time, so it can
    /// be picked before the next tick.
    pub fn register(&mut self, body: Body) -> Result<usize, RegistryError> {
        let slot = self.bodies.register(body)?;
        update_positions(&mut self.bodies, self.clock.simulated_time());
        Ok(slot)
    }

    /// Register every body of a catalog. Bad records are skipped and reported.
    pub fn load_catalog(&mut self, catalog: BodyCatalog) -> CatalogReport {
        let report = catalog.register_into(&mut self.bodies);
        update_positions(&mut self.bodies, self.clock.simulated_time());
        report
    }

    /// Parse and register a JSON catalog.
    pub fn load_catalog_json(&mut self, json: &str) -> Result<CatalogReport, serde_json::Error> {
        let catalog = BodyCatalog::from_json(json)?;
        Ok(self.load_catalog(catalog))
    }

    // ── Frame steps ──────────────────────────────────────────────────────

    /// Advance the simulation clock and move every body. Returns the
    /// simulated delta applied.
    pub fn step_kinematics(&mut self, frame_dt: f32) -> f64 {
        let sim_dt = self.clock.advance(frame_dt);
        self.kinematics
            .update(&mut self.bodies, self.clock.simulated_time(), sim_dt);
        sim_dt
    }

    /// Advance the camera transition on unscaled time, so flights finish even
    /// while the simulation is paused. Returns `true` when a flight lands.
    pub fn step_camera(&mut self, frame_dt: f32) -> bool {
        let dt = self.clock.clamp_frame_dt(frame_dt);
        self.transitions.advance(dt, &mut self.camera)
    }

    // ── Selection ────────────────────────────────────────────────────────

    /// Pick at a pointer position and fly to the hit body.
    pub fn select_at(&mut self, ndc: Vec2) -> Option<usize> {
        self.focus.select_at(
            ndc,
            &self.bodies,
            &self.picker,
            &self.camera,
            &mut self.transitions,
        )
    }

    /// Search by name and fly to the match.
    pub fn focus_by_name(&mut self, query: &str) -> Option<usize> {
        self.focus
            .select_by_name(query, &self.bodies, &self.camera, &mut self.transitions)
    }

    /// Fly to a body by id.
    pub fn focus_id(&mut self, id: &str) -> Option<usize> {
        let slot = self.bodies.slot_of(id)?;
        self.focus
            .focus_slot(slot, &self.bodies, &self.camera, &mut self.transitions)
    }

    pub fn focused_info(&self) -> Option<FocusInfo> {
        self.focus.focused_info(&self.bodies)
    }

    /// Drop the focus, abort any flight and jump straight to the home view.
    pub fn reset_view(&mut self) {
        self.focus.clear();
        self.transitions
            .cancel_to(&mut self.camera, self.home_position, self.home_target);
    }

    // ── Events ───────────────────────────────────────────────────────────

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&OrreryConfig::default())
    }
}
