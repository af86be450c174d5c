//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, fixed scroll step
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod generator;
pub mod polygon;
pub mod state;
pub mod tick;

pub use generator::WorldGenerator;
pub use polygon::{Line, Polygon};
pub use state::{Frame, GamePhase, GameState};
pub use tick::{TickInput, increase_difficulty, tick, update};
