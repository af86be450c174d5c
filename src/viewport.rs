//! World to display coordinate mapping
//!
//! The viewport is the world-space rectangle currently shown. Renderers work
//! in a normalized `[0, 1]²` display frame (origin top-left) or directly in
//! pixels given the client size.

use serde::{Deserialize, Serialize};

use crate::Vector2;

/// Visible world rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// World coordinate mapped to the display's top-left corner
    pub position: Vector2,
    /// World extent mapped onto the whole display
    pub size: Vector2,
}

impl Viewport {
    pub fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    /// Scroll vertically by `dy` world units (negative moves toward the tunnel's far end)
    pub fn scroll(&mut self, dy: f64) {
        self.position.y += dy;
    }

    /// Smallest visible world-y
    #[inline]
    pub fn top(&self) -> f64 {
        self.position.y
    }

    /// Largest visible world-y
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.position.y + self.size.y
    }

    /// World point to normalized display coordinates
    pub fn to_normalized(&self, world: Vector2) -> Vector2 {
        (world - self.position) / self.size
    }

    /// Normalized display coordinates back to a world point
    pub fn from_normalized(&self, normalized: Vector2) -> Vector2 {
        normalized * self.size + self.position
    }

    /// World point to pixel coordinates for a display of `client_size` pixels
    pub fn to_pixels(&self, world: Vector2, client_size: Vector2) -> Vector2 {
        (world - self.position) * (client_size / self.size)
    }

    /// Pixel coordinates back to a world point
    pub fn to_world(&self, pixel: Vector2, client_size: Vector2) -> Vector2 {
        pixel * (self.size / client_size) + self.position
    }
}
