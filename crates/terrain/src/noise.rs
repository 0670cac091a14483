//! Deterministic seeded noise primitives.
//!
//! Everything here is driven by a single `f64` seed: the same seed produces
//! the same `next()` sequence and the same noise field on every platform, so
//! terrain is fully reproducible without persisting anything.

use std::f64::consts::TAU;

/// Raw range of the gradient dot-product scheme below. Measured empirically
/// for this exact corner-angle construction; outputs are clamped to
/// [-PERLIN_RAW_RANGE, PERLIN_RAW_RANGE] and rescaled to [-1, 1].
const PERLIN_RAW_RANGE: f64 = 0.7;

/// Scalar hash: maps any finite `f64` to [0, 1).
///
/// `frac(sin(x * 12.9898) * 43758.5453)` -- the classic shader hash. Chained
/// through itself it forms the deterministic `next()` stream.
pub fn generate(x: f64) -> f64 {
    fract((x * 12.9898).sin() * 43758.5453)
}

#[inline]
fn fract(n: f64) -> f64 {
    n - n.floor()
}

/// Quintic-smoothed interpolation between `a` and `b`:
/// the blend factor is `t^3 (t (6t - 15) + 10)`, which has zero first and
/// second derivatives at both ends.
#[inline]
pub fn smooth_lerp(a: f64, b: f64, t: f64) -> f64 {
    let t = t * t * t * (t * (t * 6.0 - 15.0) + 10.0);
    (1.0 - t) * a + t * b
}

/// Seeded noise source.
///
/// Holds the seed plus a running state for the stateful `next()` stream.
/// `generate_2d`, `perlin` and `ridge` are stateless and pure: they combine
/// only the seed with their arguments.
#[derive(Debug, Clone)]
pub struct Noise {
    seed: f64,
    state: f64,
}

impl Noise {
    /// Create a source from an explicit seed.
    pub fn new(seed: f64) -> Self {
        Self {
            seed,
            state: generate(seed),
        }
    }

    /// Create a source with a seed drawn from system entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<f64>())
    }

    pub fn seed(&self) -> f64 {
        self.seed
    }

    /// Advance the stream and return the next value in [0, 1).
    /// Stateful; single-threaded use only.
    pub fn next(&mut self) -> f64 {
        self.state = generate(self.state);
        self.state
    }

    /// Stateless 2D hash of (seed, x, y) into [0, 1). Used as the
    /// pseudo-random value at integer lattice corners.
    pub fn generate_2d(&self, x: f64, y: f64) -> f64 {
        let x = x + self.seed;
        let y = y + self.seed;
        fract((x * 12.9898 + y * 78.233).sin() * 43758.5453)
    }

    /// Continuous gradient noise in [-1, 1].
    ///
    /// Each of the four surrounding lattice corners hashes to an angle in
    /// [0, 2*pi); the offset vector from that corner to (x, y) is projected
    /// onto (cos a, sin a), and the four dot products are quintic-smoothed
    /// horizontally then vertically.
    pub fn perlin(&self, x: f64, y: f64) -> f64 {
        let left = x.floor();
        let top = y.floor();
        let right = left + 1.0;
        let bottom = top + 1.0;

        let left_off = x - left;
        let top_off = y - top;
        let right_off = x - right;
        let bottom_off = y - bottom;

        let tl_angle = self.generate_2d(left, top) * TAU;
        let tr_angle = self.generate_2d(right, top) * TAU;
        let bl_angle = self.generate_2d(left, bottom) * TAU;
        let br_angle = self.generate_2d(right, bottom) * TAU;

        let tl = left_off * tl_angle.cos() + top_off * tl_angle.sin();
        let tr = right_off * tr_angle.cos() + top_off * tr_angle.sin();
        let bl = left_off * bl_angle.cos() + bottom_off * bl_angle.sin();
        let br = right_off * br_angle.cos() + bottom_off * br_angle.sin();

        let top_value = smooth_lerp(tl, tr, left_off);
        let bottom_value = smooth_lerp(bl, br, left_off);

        smooth_lerp(top_value, bottom_value, top_off).clamp(-PERLIN_RAW_RANGE, PERLIN_RAW_RANGE)
            / PERLIN_RAW_RANGE
    }

    /// Ridged noise: `|perlin(x, y)|^p`, in [0, 1].
    pub fn ridge(&self, x: f64, y: f64, p: f64) -> f64 {
        self.perlin(x, y).abs().powf(p)
    }
}
