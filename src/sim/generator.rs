//! Procedural tunnel generation
//!
//! Emits an unbounded sequence of wall segments. The tunnel travels toward
//! negative world-y; each segment slants from the previous reference point
//! to a new one whose x random-walks inside `[min_x, max_x - width]`.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::polygon::Polygon;
use crate::Vector2;
use crate::tuning::Tuning;

/// Stateful tunnel generator. Its reference point is the only memory of
/// where the tunnel left off.
#[derive(Debug, Clone)]
pub struct WorldGenerator {
    rng: Pcg32,
    /// Left end of the edge shared with the next segment
    last_position: Vector2,
    width: f64,
    min_x: f64,
    max_x: f64,
    displacement: f64,
    drop_min: f64,
    drop_max: f64,
    overlap: f64,
    start_y: f64,
    start_height: f64,
    emitted: u64,
}

impl WorldGenerator {
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let center = (tuning.min_x + tuning.max_x) / 2.0;
        Self {
            rng: Pcg32::seed_from_u64(seed),
            last_position: Vector2::new(
                center - tuning.start_width / 2.0,
                tuning.start_y + tuning.segment_overlap,
            ),
            width: tuning.start_width,
            min_x: tuning.min_x,
            max_x: tuning.max_x,
            displacement: tuning.displacement,
            drop_min: tuning.drop_min,
            drop_max: tuning.drop_max,
            overlap: tuning.segment_overlap,
            start_y: tuning.start_y,
            start_height: tuning.start_height,
            emitted: 0,
        }
    }

    /// Produce the next wall segment.
    ///
    /// The first call returns the full-width start chute.
    pub fn generate_next(&mut self) -> Polygon {
        self.emitted += 1;
        if self.emitted == 1 {
            return Polygon::rectangle(
                self.min_x,
                self.start_y,
                self.max_x - self.min_x,
                self.start_height,
            );
        }

        let drop = self.sample_drop();
        let jitter = self.displacement * (2.0 * self.rng.random::<f64>() - 1.0);
        let mut next = Vector2::new(self.last_position.x + jitter, self.last_position.y - drop);
        next.x = self.clamp_x(next.x);

        let segment = Polygon::skewed_rectangle(
            next.x,
            self.last_position.x,
            next.y,
            self.width,
            drop + self.overlap,
        );
        self.last_position = next;
        segment
    }

    /// Uniform in `[drop_min, drop_max]`; interpolates so huge ranges stay finite
    fn sample_drop(&mut self) -> f64 {
        if self.drop_max > self.drop_min {
            let t: f64 = self.rng.random();
            self.drop_min * (1.0 - t) + self.drop_max * t
        } else {
            self.drop_min
        }
    }

    /// Keep a reference x inside `[min_x, max_x - width]`
    fn clamp_x(&self, mut x: f64) -> f64 {
        if x < self.min_x {
            x = self.min_x;
        }
        if x + self.width >= self.max_x {
            x = self.max_x - self.width;
        }
        x
    }

    /// Change the gap width, keeping the gap centered on its current position
    pub fn set_width(&mut self, width: f64) {
        self.last_position.x += (self.width - width) / 2.0;
        self.width = width;
        self.last_position.x = self.clamp_x(self.last_position.x);
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn last_position(&self) -> Vector2 {
        self.last_position
    }

    /// Number of segments produced so far (start chute included)
    pub fn segments_emitted(&self) -> u64 {
        self.emitted
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min_x, self.max_x)
    }
}
