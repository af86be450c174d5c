//! Tunnel Runner - an endless vertical tunnel arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, tunnel generation, game state)
//! - `viewport`: World to display coordinate mapping
//! - `tuning`: Data-driven game balance
//! - `driver`: Fixed-tick driver and renderer boundary
//! - `web`: wasm-bindgen facade for the browser host

pub mod driver;
pub mod sim;
pub mod tuning;
pub mod viewport;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use driver::{Renderer, TickDriver};
pub use tuning::Tuning;
pub use viewport::Viewport;

/// 2-D value type used for every world and display coordinate.
///
/// Component-wise `+ - * /`, `dot`, scalar `+`/`/` and `ceil` are all pure
/// and return new values. Division by a zero component follows IEEE-754.
pub type Vector2 = glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Reference tick cadence of the host timer (milliseconds)
    pub const TICK_INTERVAL_MS: u32 = 50;
    /// Maximum ticks run for one host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Horizontal tunnel bounds
    pub const WORLD_MIN_X: f64 = -4.0;
    pub const WORLD_MAX_X: f64 = 4.0;

    /// World units scrolled per tick
    pub const SCROLL_STEP: f64 = 0.2;

    /// Points between two difficulty ramps
    pub const DIFFICULTY_INTERVAL: u64 = 200;
    /// Width multiplier applied on each ramp
    pub const DIFFICULTY_FACTOR: f64 = 0.9;
    /// Narrowest the tunnel may become
    pub const MIN_TUNNEL_WIDTH: f64 = 0.5;
    /// Shortest vertical drop per segment
    pub const MIN_SEGMENT_DROP: f64 = 0.1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vector_ops() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a + b, Vector2::new(4.0, 6.0));
        assert_eq!(b - a, Vector2::new(2.0, 2.0));
        assert_eq!(a * b, Vector2::new(3.0, 8.0));
        assert_eq!(b / a, Vector2::new(3.0, 2.0));
        assert_eq!(a.dot(b), 11.0);
        assert_eq!(a + 0.5, Vector2::new(1.5, 2.5));
        assert_eq!(b / 2.0, Vector2::new(1.5, 2.0));
        assert_eq!(Vector2::new(1.2, -1.2).ceil(), Vector2::new(2.0, -1.0));
    }

    #[test]
    fn test_divide_by_zero_is_not_an_error() {
        let v = Vector2::new(1.0, 0.0) / Vector2::ZERO;
        assert!(v.x.is_infinite());
        assert!(v.y.is_nan());
    }

    proptest! {
        #[test]
        fn add_then_subtract_round_trips(
            x in -1.0e6f64..1.0e6, y in -1.0e6f64..1.0e6,
            ax in -1.0e6f64..1.0e6, ay in -1.0e6f64..1.0e6,
        ) {
            let v = Vector2::new(x, y);
            let a = Vector2::new(ax, ay);
            let back = (v + a) - a;
            prop_assert!((back - v).abs().max_element() < 1e-6);
        }
    }
}
