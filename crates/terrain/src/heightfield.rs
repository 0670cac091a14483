//! Multi-octave height-field synthesis.
//!
//! [`HeightField`] maps a world (x, z) coordinate to an elevation: three
//! noise octaves are summed and normalized, remapped through the relief
//! curve, then an erosion-masked hill overlay is added on top. Sampling is a
//! pure total function -- identical (seed, x, z) always yields identical
//! output, bit for bit.

use serde::{Deserialize, Serialize};

use crate::config;
use crate::noise::{smooth_lerp, Noise};

/// Number of decorrelation offsets drawn from the noise stream at
/// construction. Each synthesis stage shifts the sampling coordinate by its
/// own offset pair so the stages do not sample the same field.
const OFFSET_COUNT: usize = 12;

/// Amplitude, frequency and relief parameters for one height field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeightFieldParams {
    pub base_frequency: f64,
    pub base_amplitude: f64,
    pub mid_frequency: f64,
    pub mid_weight: f64,
    pub detail_frequency: f64,
    pub detail_weight: f64,
    pub erosion_frequency: f64,
    pub erosion_mask_frequency: f64,
    pub erosion_strength: f64,
    pub hill_frequency: f64,
    pub hill_amplitude: f64,
    pub hill_bias: f64,
    /// Ordered (position, height) control points; positions ascending in [0, 1].
    pub relief_curve: Vec<(f64, f64)>,
}

impl Default for HeightFieldParams {
    fn default() -> Self {
        Self {
            base_frequency: config::BASE_FREQUENCY,
            base_amplitude: config::BASE_AMPLITUDE,
            mid_frequency: config::MID_FREQUENCY,
            mid_weight: config::MID_WEIGHT,
            detail_frequency: config::DETAIL_FREQUENCY,
            detail_weight: config::DETAIL_WEIGHT,
            erosion_frequency: config::EROSION_FREQUENCY,
            erosion_mask_frequency: config::EROSION_MASK_FREQUENCY,
            erosion_strength: config::EROSION_STRENGTH,
            hill_frequency: config::HILL_FREQUENCY,
            hill_amplitude: config::HILL_AMPLITUDE,
            hill_bias: config::HILL_BIAS,
            relief_curve: config::RELIEF_CURVE.to_vec(),
        }
    }
}

/// A seeded height field.
///
/// The twelve offsets are explicit per-instance state, so independent fields
/// (different seeds, or the same seed in parallel tests) can coexist.
pub struct HeightField {
    noise: Noise,
    offsets: [f64; OFFSET_COUNT],
    params: HeightFieldParams,
}

impl HeightField {
    /// Consume twelve values from the noise stream as decorrelation offsets
    /// and freeze the field.
    pub fn new(mut noise: Noise, params: HeightFieldParams) -> Self {
        let mut offsets = [0.0; OFFSET_COUNT];
        for offset in offsets.iter_mut() {
            *offset = noise.next();
        }
        Self {
            noise,
            offsets,
            params,
        }
    }

    /// Default-parameter field from an explicit seed.
    pub fn from_seed(seed: f64) -> Self {
        Self::new(Noise::new(seed), HeightFieldParams::default())
    }

    pub fn seed(&self) -> f64 {
        self.noise.seed()
    }

    /// Elevation at world (x, z). Pure and total: always finite for finite
    /// inputs, no error states.
    ///
    /// The sampling coordinate accumulates the offset pairs stage by stage,
    /// so the second octave samples at x + off0 + off2 and so on. The erosion
    /// mask shifts by the (6, 7) pair a second time; pairs 8 and 9 are drawn
    /// from the stream but not referenced here.
    pub fn sample(&self, x: f64, z: f64) -> f64 {
        let p = &self.params;
        let off = &self.offsets;
        let relief = &p.relief_curve;

        // Fallback when no curve segment brackets t below; seeded from the
        // first control point's *position*, not its height.
        let mut h = relief[0].0 * p.base_amplitude - p.base_amplitude;

        // Three octaves, summed unnormalized then rescaled to [0, 1].
        let mut x = x + off[0];
        let mut z = z + off[1];
        let mut t = self.noise.perlin(x * p.base_frequency, z * p.base_frequency) * 0.5 + 0.5;

        x += off[2];
        z += off[3];
        t += (self.noise.perlin(x * p.mid_frequency, z * p.mid_frequency) * 0.5 + 0.5)
            * p.mid_weight;

        x += off[4];
        z += off[5];
        t += (self.noise.perlin(x * p.detail_frequency, z * p.detail_frequency) * 0.5 + 0.5)
            * p.detail_weight;

        t /= 1.0 + p.mid_weight + p.detail_weight;

        // Relief curve: first control point whose position brackets t from
        // above; t is remapped into that sub-range before interpolation.
        // Heights are scaled so t = 0 lands at -base_amplitude.
        for i in 1..relief.len() {
            if t <= relief[i].0 {
                let span = map_unit(t, relief[i - 1].0, relief[i].0);
                h = smooth_lerp(relief[i - 1].1, relief[i].1, span) * p.base_amplitude
                    - p.base_amplitude;
                break;
            }
        }

        // Erosion mask: asymmetric and zero-floored, so it only ever opens
        // room for hills, never digs below the relief height.
        x += off[6];
        z += off[7];
        let e = self.noise.perlin(x * p.erosion_frequency, z * p.erosion_frequency) * 0.5;

        x += off[6];
        z += off[7];
        let e = (e
            - (self
                .noise
                .perlin(x * p.erosion_mask_frequency, z * p.erosion_mask_frequency)
                * 0.5
                + 0.5)
                * p.erosion_strength)
            .max(0.0);

        // Hill overlay, gated by the erosion mask.
        x += off[10];
        z += off[11];
        h += (self.noise.perlin(x * p.hill_frequency, z * p.hill_frequency) * 0.5 + 0.5)
            * e
            * p.hill_amplitude
            - p.hill_amplitude * p.hill_bias;

        h
    }
}

/// Remap `t` from [a, b] to [0, 1].
#[inline]
fn map_unit(t: f64, a: f64, b: f64) -> f64 {
    (t - a) / (b - a)
}
