//! Fixed-tick driver and renderer boundary
//!
//! The host (browser animation frame, native loop) reports elapsed wall time;
//! the driver turns it into whole simulation ticks and hands each resulting
//! frame to the renderer.

use crate::consts::MAX_SUBSTEPS;
use crate::sim::{Frame, GameState, TickInput, tick};

/// Anything that can present a frame. Owns all pixel output.
pub trait Renderer {
    fn draw(&mut self, frame: &Frame<'_>);
}

/// Accumulator-based fixed-tick driver
#[derive(Debug, Clone)]
pub struct TickDriver {
    /// Seconds per tick
    period: f64,
    accumulator: f64,
    running: bool,
    ticks: u64,
}

impl TickDriver {
    pub fn new(tick_interval_ms: u32) -> Self {
        Self {
            period: f64::from(tick_interval_ms.max(1)) / 1000.0,
            accumulator: 0.0,
            running: false,
            ticks: 0,
        }
    }

    /// Start ticking. Returns false if already started.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.accumulator = 0.0;
        log::debug!("Tick driver started ({} ms)", self.period * 1000.0);
        true
    }

    /// Stop ticking and drop any partial tick. Returns false if already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.accumulator = 0.0;
        log::debug!("Tick driver stopped after {} ticks", self.ticks);
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Total ticks run since creation
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run the ticks covered by `elapsed` seconds, drawing after each one.
    ///
    /// One-shot inputs (restart, pointer) are consumed by the first tick.
    /// Returns the number of ticks run.
    pub fn advance<R: Renderer + ?Sized>(
        &mut self,
        elapsed: f64,
        state: &mut GameState,
        input: &mut TickInput,
        renderer: &mut R,
    ) -> u32 {
        if !self.running {
            return 0;
        }
        // Clamp long pauses (tab in background) to the substep budget
        let elapsed = elapsed.max(0.0).min(self.period * f64::from(MAX_SUBSTEPS + 1));
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= self.period && substeps < MAX_SUBSTEPS {
            tick(state, input);
            renderer.draw(&state.frame());
            self.accumulator -= self.period;
            self.ticks += 1;
            substeps += 1;

            // Clear one-shot inputs after processing
            *input = TickInput::default();
        }
        substeps
    }
}
