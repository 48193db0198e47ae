pub mod runner;

pub use runner::GameRunner;
pub use orrery_engine;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, input, search, focus, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_game!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$game_type`: The scene struct type that implements `orrery_engine::Game`
///   and has a `new()` constructor
/// - `$game_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;
        use $crate::orrery_engine::InputEvent;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call game_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn game_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let runner = $crate::GameRunner::new(game);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        // ---- Input (pointer coordinates are NDC, y up) ----

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input(InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_key_down(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_key_up(key_code: u32) {
            with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
        }

        #[wasm_bindgen]
        pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) {
            with_runner(|r| r.push_input(InputEvent::Custom { kind, a, b, c }));
        }

        // ---- Direct UI requests ----

        #[wasm_bindgen]
        pub fn game_search(query: &str) -> bool {
            with_runner(|r| r.search(query))
        }

        #[wasm_bindgen]
        pub fn game_focus_json() -> String {
            with_runner(|r| r.focus_json())
        }

        #[wasm_bindgen]
        pub fn game_load_catalog(json: &str) -> u32 {
            with_runner(|r| r.load_catalog(json))
        }

        #[wasm_bindgen]
        pub fn game_set_exclusion(x0: f32, y0: f32, x1: f32, y1: f32) {
            with_runner(|r| r.set_exclusion(x0, y0, x1, y1));
        }

        #[wasm_bindgen]
        pub fn game_clear_exclusions() {
            with_runner(|r| r.clear_exclusions());
        }

        #[wasm_bindgen]
        pub fn game_reset_view() {
            with_runner(|r| r.reset_view());
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32) {
            with_runner(|r| r.resize(width, height));
        }

        #[wasm_bindgen]
        pub fn game_set_time_scale(scale: f64) {
            with_runner(|r| r.set_time_scale(scale));
        }

        #[wasm_bindgen]
        pub fn game_set_paused(paused: bool) {
            with_runner(|r| r.set_paused(paused));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_bodies_ptr() -> *const f32 {
            with_runner(|r| r.bodies_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count())
        }

        #[wasm_bindgen]
        pub fn get_body_floats() -> u32 {
            $crate::orrery_engine::BodyInstance::FLOATS as u32
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr())
        }

        #[wasm_bindgen]
        pub fn get_camera_floats() -> u32 {
            $crate::orrery_engine::CameraUniform::FLOATS as u32
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len())
        }

        #[wasm_bindgen]
        pub fn get_sky_rotation() -> f32 {
            with_runner(|r| r.sky_rotation())
        }

        #[wasm_bindgen]
        pub fn get_simulated_time() -> f64 {
            with_runner(|r| r.simulated_time())
        }

        #[wasm_bindgen]
        pub fn get_camera_animating() -> bool {
            with_runner(|r| r.is_animating())
        }

        #[wasm_bindgen]
        pub fn get_fov_y() -> f32 {
            with_runner(|r| r.fov_y())
        }
    };
}
