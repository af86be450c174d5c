//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`] so a run can be reproduced
//! from `(seed, tuning)`. Missing JSON fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::Vector2;
use crate::consts::*;

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Tunnel bounds ===
    /// Left edge of the playable area
    pub min_x: f64,
    /// Right edge of the playable area
    pub max_x: f64,

    // === Start chute ===
    /// Top-left y of the full-width starting rectangle
    pub start_y: f64,
    /// Height of the starting rectangle
    pub start_height: f64,

    // === Generator ===
    /// Gap width at run start
    pub start_width: f64,
    /// Maximum horizontal jitter per segment
    pub displacement: f64,
    /// Vertical drop per segment, sampled from `[drop_min, drop_max]`
    pub drop_min: f64,
    pub drop_max: f64,
    /// Extra height each segment reaches into the previous one
    pub segment_overlap: f64,

    // === Scrolling ===
    /// World units scrolled per tick
    pub scroll_step: f64,
    /// Host tick cadence (milliseconds)
    pub tick_interval_ms: u32,

    // === Difficulty ===
    /// Points between two width reductions
    pub difficulty_interval: u64,
    /// Multiplier applied to the width on each reduction
    pub difficulty_factor: f64,
    /// Width never shrinks below this
    pub min_width: f64,

    // === Camera / player ===
    pub viewport_position: Vector2,
    pub viewport_size: Vector2,
    pub player_start: Vector2,

    /// Drop segments once they scrolled past the bottom of the viewport
    pub evict_offscreen: bool,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            min_x: WORLD_MIN_X,
            max_x: WORLD_MAX_X,

            start_y: -5.0,
            start_height: 10.0,

            start_width: 3.0,
            displacement: 4.0,
            drop_min: 6.0,
            drop_max: 6.0,
            segment_overlap: 1.0,

            scroll_step: SCROLL_STEP,
            tick_interval_ms: TICK_INTERVAL_MS,

            difficulty_interval: DIFFICULTY_INTERVAL,
            difficulty_factor: DIFFICULTY_FACTOR,
            min_width: MIN_TUNNEL_WIDTH,

            viewport_position: Vector2::new(-5.0, -5.0),
            viewport_size: Vector2::new(10.0, 20.0),
            player_start: Vector2::ZERO,

            evict_offscreen: true,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning.sanitized())
    }

    /// Load tuning, falling back to defaults when the file is missing or invalid
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        match Self::load(path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Using default tuning ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Repair values that would make the generator stall or produce
    /// non-finite geometry on the first segments.
    ///
    /// Unsolvable-but-finite layouts (a gap wider than the bounds) are left
    /// alone; they only produce odd geometry.
    pub fn sanitized(mut self) -> Self {
        if self.min_x > self.max_x {
            log::warn!("min_x {} > max_x {}, swapping", self.min_x, self.max_x);
            std::mem::swap(&mut self.min_x, &mut self.max_x);
        }
        if !(self.displacement >= 0.0) {
            log::warn!("displacement {} must be >= 0, using 0", self.displacement);
            self.displacement = 0.0;
        }
        let span = self.max_x - self.min_x;
        if span.is_finite() && self.displacement > span {
            log::warn!(
                "displacement {} exceeds tunnel span {}, capping",
                self.displacement,
                span
            );
            self.displacement = span;
        }
        if !(self.drop_min > 0.0) {
            log::warn!("drop_min {} must be > 0, using default", self.drop_min);
            self.drop_min = Self::default().drop_min;
        }
        if self.drop_min < MIN_SEGMENT_DROP {
            log::warn!("drop_min {} below {}, raising", self.drop_min, MIN_SEGMENT_DROP);
            self.drop_min = MIN_SEGMENT_DROP;
        }
        if self.drop_max < self.drop_min {
            log::warn!("drop_max {} < drop_min {}, clamping", self.drop_max, self.drop_min);
            self.drop_max = self.drop_min;
        }
        if !(self.segment_overlap >= 0.0) {
            log::warn!("segment_overlap {} must be >= 0, using 0", self.segment_overlap);
            self.segment_overlap = 0.0;
        }
        if self.difficulty_interval == 0 {
            log::warn!("difficulty_interval must be > 0, using default");
            self.difficulty_interval = DIFFICULTY_INTERVAL;
        }
        if !(self.min_width > 0.0) {
            log::warn!("min_width {} must be > 0, using default", self.min_width);
            self.min_width = MIN_TUNNEL_WIDTH;
        }
        if !(self.start_width >= self.min_width) {
            log::warn!(
                "start_width {} below min_width {}, raising",
                self.start_width,
                self.min_width
            );
            self.start_width = self.min_width;
        }
        self
    }
}
