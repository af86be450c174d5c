//! Game state and core simulation types
//!
//! One `GameState` owns everything a run needs: scroll position, player,
//! the materialized tunnel and the generator that extends it.

use serde::{Deserialize, Serialize};

use super::generator::WorldGenerator;
use super::polygon::Polygon;
use crate::Vector2;
use crate::tuning::Tuning;
use crate::viewport::Viewport;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Scrolling, player steering
    Running,
    /// Player touched a wall; waits for a restart request
    GameOver,
}

/// Complete state of one game session (restarts included)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed; each run derives its tunnel seed from it
    pub seed: u64,
    /// Run counter (0 for the first run)
    pub run: u32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Score of the current run (one per survived tick)
    pub points: u64,
    /// Best score seen this session
    pub best_points: u64,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    pub player: Vector2,
    pub viewport: Viewport,
    /// Materialized tunnel, ordered from oldest to newest segment
    pub world: Vec<Polygon>,
    pub generator: WorldGenerator,
    /// Segments dropped after scrolling off screen
    pub evicted: u64,
}

/// Read-only view handed to the renderer each tick
#[derive(Debug, Clone, Serialize)]
pub struct Frame<'a> {
    pub viewport: &'a Viewport,
    pub world: &'a [Polygon],
    pub player: Vector2,
    pub points: u64,
    pub best_points: u64,
    pub phase: GamePhase,
}

impl Frame<'_> {
    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

/// Tunnel seed for a given run of a session
fn run_seed(seed: u64, run: u32) -> u64 {
    (run as u64).wrapping_mul(2654435761).wrapping_add(seed)
}

impl GameState {
    /// Start a fresh session with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        let mut state = Self {
            seed,
            run: 0,
            phase: GamePhase::Running,
            points: 0,
            best_points: 0,
            time_ticks: 0,
            player: tuning.player_start,
            viewport: Viewport::new(tuning.viewport_position, tuning.viewport_size),
            world: Vec::new(),
            generator: WorldGenerator::new(run_seed(seed, 0), &tuning),
            evicted: 0,
            tuning,
        };
        state.top_up_world();
        log::info!("Run 0 started (seed {})", seed);
        state
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Move the player horizontally to a world x; ignored after game over
    pub fn set_player_x(&mut self, x: f64) {
        if self.is_running() {
            self.player.x = x;
        }
    }

    /// Begin a new run. Only honored in `GameOver`; returns whether it restarted.
    pub fn restart(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.run += 1;
        self.phase = GamePhase::Running;
        self.points = 0;
        self.time_ticks = 0;
        self.player = self.tuning.player_start;
        self.viewport = Viewport::new(self.tuning.viewport_position, self.tuning.viewport_size);
        self.world.clear();
        self.generator = WorldGenerator::new(run_seed(self.seed, self.run), &self.tuning);
        self.evicted = 0;
        self.top_up_world();
        log::info!("Run {} started", self.run);
        true
    }

    /// Whether any segment contains the player's logical position
    pub fn player_in_tunnel(&self) -> bool {
        self.world.iter().any(|segment| segment.contains(self.player))
    }

    /// End the run
    pub fn lose(&mut self) {
        self.phase = GamePhase::GameOver;
        if self.points > self.best_points {
            self.best_points = self.points;
        }
        log::info!(
            "Game over after {} ticks: {} points (best {})",
            self.time_ticks,
            self.points,
            self.best_points
        );
    }

    /// Generate segments until the newest one reaches past the top of the viewport
    pub fn top_up_world(&mut self) {
        let top = self.viewport.top();
        while self.world.last().is_none_or(|last| last.min_y() >= top) {
            self.world.push(self.generator.generate_next());
        }
    }

    /// Drop segments that lie entirely below the visible area
    pub fn evict_offscreen(&mut self) {
        let bottom = self.viewport.bottom();
        let before = self.world.len();
        self.world.retain(|segment| segment.min_y() <= bottom);
        let dropped = before - self.world.len();
        if dropped > 0 {
            self.evicted += dropped as u64;
            log::trace!("Evicted {} segments ({} total)", dropped, self.evicted);
        }
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            viewport: &self.viewport,
            world: &self.world,
            player: self.player,
            points: self.points,
            best_points: self.best_points,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_has_lookahead() {
        let state = GameState::new(1, Tuning::default());
        assert!(state.is_running());
        assert!(state.world.len() >= 2);
        assert!(state.world.last().unwrap().min_y() < state.viewport.top());
        assert!(state.player_in_tunnel());
    }

    #[test]
    fn test_set_player_x_gated_by_phase() {
        let mut state = GameState::new(1, Tuning::default());
        state.set_player_x(1.25);
        assert_eq!(state.player.x, 1.25);
        state.lose();
        state.set_player_x(-3.0);
        assert_eq!(state.player.x, 1.25);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut state = GameState::new(1, Tuning::default());
        assert!(!state.restart());
        assert_eq!(state.run, 0);

        state.points = 42;
        state.lose();
        assert_eq!(state.best_points, 42);
        assert!(state.restart());
        assert_eq!(state.run, 1);
        assert_eq!(state.points, 0);
        assert_eq!(state.best_points, 42);
        assert!(state.is_running());
    }

    #[test]
    fn test_evict_keeps_visible_segments() {
        let mut state = GameState::new(1, Tuning::default());
        let count = state.world.len();
        state.evict_offscreen();
        assert_eq!(state.world.len(), count);

        // Scroll far enough that the start chute is below the screen
        state.viewport.scroll(-21.0);
        state.evict_offscreen();
        assert!(state.evicted >= 1);
        assert!(state.world.iter().all(|s| s.min_y() <= state.viewport.bottom()));
    }

    #[test]
    fn test_frame_serializes() {
        let state = GameState::new(3, Tuning::default());
        let json = serde_json::to_string(&state.frame()).unwrap();
        assert!(json.contains("\"phase\":\"Running\""));
        assert!(json.contains("\"world\""));
    }
}
