/// Solar System: interactive 3D orrery with circular orbits.
///
/// Click a body (or pick it from the sidebar, or search for it) and the
/// camera flies over to it. Drags are left to the host's orbit controls.

use glam::Vec2;
use orrery_engine::{
    EngineContext, Game, GameEvent, InputEvent, InputQueue, OrreryConfig,
};

use crate::bodies;

// ── Custom event kinds from the UI ───────────────────────────────────

const CUSTOM_SET_SPEED: u32 = 2;
const CUSTOM_TOGGLE_PAUSE: u32 = 3;
const CUSTOM_SELECT: u32 = 4;
const CUSTOM_RESET_VIEW: u32 = 6;
/// a = right edge of the left sidebar in NDC x; a <= -1 removes it.
const CUSTOM_SET_SIDEBAR: u32 = 7;
const CUSTOM_RESIZE: u32 = 99;

// ── Game events to the UI ────────────────────────────────────────────

const EVENT_TIME_INFO: f32 = 1.0;
const EVENT_SELECTION: f32 = 3.0;

// ── Keys ─────────────────────────────────────────────────────────────

const KEY_SPACE: u32 = 32;
const KEY_ESCAPE: u32 = 27;

// ── Pointer ──────────────────────────────────────────────────────────

/// Pointer travel (NDC units) beyond which a press is a drag, not a click.
const DRAG_THRESHOLD: f32 = 0.01;

pub struct SolarSystem {
    dragging: bool,
    drag_moved: bool,
    drag_start: Vec2,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            dragging: false,
            drag_moved: false,
            drag_start: Vec2::ZERO,
        }
    }

    fn handle_custom(ctx: &mut EngineContext, kind: u32, a: f32, b: f32) {
        match kind {
            CUSTOM_SET_SPEED => ctx.clock.set_time_scale(a as f64),
            CUSTOM_TOGGLE_PAUSE => ctx.clock.toggle_pause(),
            CUSTOM_SELECT => {
                let picked = usize::try_from(a as i64)
                    .ok()
                    .and_then(bodies::planet_id)
                    .and_then(|id| ctx.focus_id(&id));
                if picked.is_none() {
                    ctx.focus.clear();
                }
            }
            CUSTOM_RESET_VIEW => ctx.reset_view(),
            CUSTOM_SET_SIDEBAR => {
                if a <= -1.0 {
                    ctx.picker.clear_exclusions();
                } else {
                    ctx.picker.set_exclusion(orrery_engine::ExclusionRect::new(
                        Vec2::new(-1.0, -1.0),
                        Vec2::new(a, 1.0),
                    ));
                }
            }
            CUSTOM_RESIZE => ctx.camera.resize(a, b),
            _ => {}
        }
    }

    fn emit_status(ctx: &mut EngineContext) {
        ctx.emit_event(GameEvent {
            kind: EVENT_TIME_INFO,
            a: ctx.clock.simulated_time() as f32,
            b: ctx.clock.time_scale() as f32,
            c: if ctx.clock.is_paused() { 1.0 } else { 0.0 },
        });

        let focused = ctx.focus.focused();
        let sel_idx = focused.map(|i| i as f32).unwrap_or(-1.0);
        let sel_dist = ctx
            .focus
            .focused_body(&ctx.bodies)
            .map(|b| b.transform.position.length())
            .unwrap_or(0.0);
        let animating = if ctx.transitions.is_animating() { 1.0 } else { 0.0 };
        ctx.emit_event(GameEvent {
            kind: EVENT_SELECTION,
            a: sel_idx,
            b: sel_dist,
            c: animating,
        });
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> OrreryConfig {
        let mut config = OrreryConfig::default();
        config.time.sky_rotation_rate = 0.002;
        config
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let report = ctx.load_catalog(bodies::scene_catalog());
        if !report.is_clean() {
            log::warn!("solar-system: {} bodies rejected", report.rejected.len());
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::Custom { kind, a, b, .. } => Self::handle_custom(ctx, kind, a, b),
                InputEvent::KeyDown { key_code: KEY_SPACE } => ctx.clock.toggle_pause(),
                InputEvent::KeyDown { key_code: KEY_ESCAPE } => ctx.reset_view(),
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.drag_moved = false;
                    self.drag_start = Vec2::new(x, y);
                }
                InputEvent::PointerMove { x, y } => {
                    if self.dragging && Vec2::new(x, y).distance(self.drag_start) > DRAG_THRESHOLD {
                        self.drag_moved = true;
                    }
                }
                InputEvent::PointerUp { x, y } => {
                    if self.dragging && !self.drag_moved {
                        // Click (not a drag) → pick
                        ctx.select_at(Vec2::new(x, y));
                    }
                    self.dragging = false;
                    self.drag_moved = false;
                }
                _ => {}
            }
        }

        Self::emit_status(ctx);
    }
}
