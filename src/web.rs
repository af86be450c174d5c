//! Browser facade
//!
//! JavaScript owns the canvas, the animation-frame loop and the DOM
//! listeners. It forwards elapsed time and pointer/restart events here and
//! draws from the JSON snapshot.

use wasm_bindgen::prelude::*;

use crate::Vector2;
use crate::driver::{Renderer, TickDriver};
use crate::sim::{Frame, GameState, TickInput};
use crate::tuning::Tuning;

/// Keeps the latest frame serialized for the JS side
#[derive(Default)]
struct SnapshotRenderer {
    json: String,
}

impl Renderer for SnapshotRenderer {
    fn draw(&mut self, frame: &Frame<'_>) {
        match serde_json::to_string(frame) {
            Ok(json) => self.json = json,
            Err(e) => log::warn!("Snapshot serialization failed: {}", e),
        }
    }
}

/// Game instance holding all state
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    driver: TickDriver,
    input: TickInput,
    renderer: SnapshotRenderer,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game. `tuning_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64, tuning_json: &str) -> WebGame {
        let tuning = if tuning_json.is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).unwrap_or_else(|e| {
                log::warn!("Invalid tuning, using defaults: {}", e);
                Tuning::default()
            })
        };
        let driver = TickDriver::new(tuning.tick_interval_ms);
        let state = GameState::new(seed as u64, tuning);
        let mut renderer = SnapshotRenderer::default();
        renderer.draw(&state.frame());
        WebGame {
            state,
            driver,
            input: TickInput::default(),
            renderer,
        }
    }

    pub fn start(&mut self) -> bool {
        self.driver.start()
    }

    pub fn stop(&mut self) -> bool {
        self.driver.stop()
    }

    /// Advance by `elapsed_ms` of wall time; returns ticks run
    pub fn frame(&mut self, elapsed_ms: f64) -> u32 {
        self.driver.advance(
            elapsed_ms / 1000.0,
            &mut self.state,
            &mut self.input,
            &mut self.renderer,
        )
    }

    /// Pointer moved to normalized display x (0 = left edge, 1 = right edge)
    pub fn pointer_moved(&mut self, nx: f64) {
        if self.state.is_running() {
            let world = self.state.viewport.from_normalized(Vector2::new(nx, 0.0));
            self.input.pointer_x = Some(world.x);
        }
    }

    /// Restart requested (click/tap on the game-over screen)
    pub fn restart_requested(&mut self) {
        if !self.state.is_running() {
            self.input.restart = true;
        }
    }

    pub fn running(&self) -> bool {
        self.state.is_running()
    }

    pub fn points(&self) -> f64 {
        self.state.points as f64
    }

    /// Latest frame as JSON (viewport, world, player, points, phase)
    pub fn snapshot_json(&self) -> String {
        self.renderer.json.clone()
    }
}

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("Tunnel Runner starting...");
}

/// Fresh session seed from the JS RNG
#[wasm_bindgen]
pub fn random_seed() -> f64 {
    (js_sys::Math::random() * u32::MAX as f64).floor()
}
