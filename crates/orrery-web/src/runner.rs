use glam::Vec2;
use orrery_engine::{
    build_body_buffer, BodyBuffer, CameraUniform, EngineContext, ExclusionRect, Game,
    InputEvent, InputQueue, OrreryConfig,
};

/// Generic runner that wires a scene into the engine loop.
///
/// Each concrete scene creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    body_buffer: BodyBuffer,
    camera_uniform: CameraUniform,
    config: OrreryConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let ctx = EngineContext::new(&config);
        let camera_uniform = ctx.camera.uniform();

        Self {
            game,
            ctx,
            input: InputQueue::new(),
            body_buffer: BodyBuffer::new(),
            camera_uniform,
            config,
            initialized: false,
        }
    }

    /// Initialize the scene. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.rebuild_snapshot();
        self.initialized = true;
        log::info!("scene ready: {} bodies", self.ctx.bodies.len());
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: move bodies, let the scene handle input against the
    /// fresh positions, then move the camera and publish the snapshot.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.ctx.step_kinematics(dt);

        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        self.ctx.step_camera(dt);
        self.rebuild_snapshot();
    }

    fn rebuild_snapshot(&mut self) {
        build_body_buffer(
            &self.ctx.bodies,
            self.ctx.focus.focused(),
            self.ctx.kinematics.sky_rotation(),
            &mut self.body_buffer,
        );
        self.camera_uniform = self.ctx.camera.uniform();
    }

    // ---- Direct requests from the UI ----

    /// Search box submit. Returns `false` when nothing matches.
    pub fn search(&mut self, query: &str) -> bool {
        self.ctx.focus_by_name(query).is_some()
    }

    /// Focused body as JSON, or `null`.
    pub fn focus_json(&self) -> String {
        let Some(info) = self.ctx.focused_info() else {
            return "null".to_string();
        };
        match serde_json::to_string(&info) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("focus info not serializable: {err}");
                "null".to_string()
            }
        }
    }

    /// Register bodies from a JSON catalog. Returns how many were accepted.
    pub fn load_catalog(&mut self, json: &str) -> u32 {
        match self.ctx.load_catalog_json(json) {
            Ok(report) => {
                self.rebuild_snapshot();
                report.registered.len() as u32
            }
            Err(err) => {
                log::warn!("catalog parse failed: {err}");
                0
            }
        }
    }

    /// Replace the pick exclusion regions with one rectangle in normalized
    /// pointer space.
    pub fn set_exclusion(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) {
        self.ctx
            .picker
            .set_exclusion(ExclusionRect::new(Vec2::new(x0, y0), Vec2::new(x1, y1)));
    }

    pub fn clear_exclusions(&mut self) {
        self.ctx.picker.clear_exclusions();
    }

    pub fn reset_view(&mut self) {
        self.ctx.reset_view();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.ctx.camera.resize(width, height);
        self.camera_uniform = self.ctx.camera.uniform();
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.ctx.clock.set_time_scale(scale);
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.ctx.clock.set_paused(paused);
    }

    // ---- Pointer accessors for host-side reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.body_buffer.instances_ptr()
    }

    pub fn body_count(&self) -> u32 {
        self.body_buffer.instance_count()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_uniform as *const CameraUniform as *const f32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    pub fn sky_rotation(&self) -> f32 {
        self.body_buffer.sky_rotation
    }

    pub fn simulated_time(&self) -> f64 {
        self.ctx.clock.simulated_time()
    }

    pub fn is_animating(&self) -> bool {
        self.ctx.transitions.is_animating()
    }

    pub fn fov_y(&self) -> f32 {
        self.ctx.camera.fov_y
    }

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use orrery_engine::{Body, BodyKind, Orbit};

    /// Records where Earth was when `update` ran and selects on pointer up.
    #[derive(Default)]
    struct Probe {
        seen: Vec<Vec3>,
    }

    impl Game for Probe {
        fn init(&mut self, ctx: &mut EngineContext) {
            ctx.register(Body::new("sun", "Sun", BodyKind::Star).with_radius(20.0))
                .unwrap();
            ctx.register(
                Body::new("earth", "Earth", BodyKind::Planet)
                    .with_orbit(Orbit::new(80.0, 1.0, 0.0))
                    .with_radius(7.0),
            )
            .unwrap();
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.seen
                .push(ctx.bodies.find("earth").unwrap().transform.position);
            for event in input.iter() {
                if let InputEvent::PointerUp { x, y } = *event {
                    ctx.select_at(Vec2::new(x, y));
                }
            }
        }
    }

    #[test]
    fn update_sees_positions_of_this_tick() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner.tick(0.1);
        runner.tick(0.1);

        let expected = Orbit::new(80.0, 1.0, 0.0).local_position(0.2);
        let last = *runner.game.seen.last().unwrap();
        assert!((last - expected).length() < 1e-3);
    }

    #[test]
    fn input_is_drained_after_update() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        runner.push_input(InputEvent::PointerUp { x: 0.0, y: 0.0 });
        runner.tick(0.016);
        assert!(runner.input.is_empty());
        assert!(runner.is_animating());
        assert!(runner.focus_json().contains("\"name\":\"Sun\""));
    }

    #[test]
    fn snapshot_matches_registry() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        assert_eq!(runner.body_count(), 2);
        assert_eq!(runner.focus_json(), "null");
        assert!(!runner.search("pluto"));
        assert!(runner.search("earth"));
        runner.tick(0.016);
        assert_eq!(runner.body_buffer.instances[1].focused, 1.0);
    }

    #[test]
    fn bad_catalog_is_reported_as_zero() {
        let mut runner = GameRunner::new(Probe::default());
        runner.init();
        assert_eq!(runner.load_catalog("nope"), 0);
        let json = r#"{ "bodies": [ { "id": "mars", "name": "Mars",
            "orbit": { "radius": 100.0, "angular_speed": 0.5 } } ] }"#;
        assert_eq!(runner.load_catalog(json), 1);
        assert_eq!(runner.body_count(), 3);
    }
}
