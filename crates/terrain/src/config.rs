//! Build-time terrain configuration constants.
//!
//! These are the default values baked into [`crate::tiles::TerrainLayout`]
//! and [`crate::heightfield::HeightFieldParams`]. They are fixed at build
//! time; hosts that want different values construct the parameter structs
//! explicitly before startup.

/// Number of tiles along each world axis.
pub const TILES_PER_AXIS: usize = 32;

/// Quads along each edge of a single tile (a tile has (TILE_SIZE+1)^2 vertices).
pub const TILE_SIZE: usize = 32;

/// View distance in tiles: the active window spans [-TILES_RADIUS, TILES_RADIUS)
/// around the viewer's tile. Must stay within [1, TILES_PER_AXIS / 2].
pub const TILES_RADIUS: usize = 8;

/// Uniform scale applied to tile-local vertex positions.
pub const WORLD_SCALE: f32 = 1.0;

/// World extent in grid units (quads per axis).
pub const WORLD_SIZE: usize = TILES_PER_AXIS * TILE_SIZE;

// ---------------------------------------------------------------------------
// Height synthesis bands
// ---------------------------------------------------------------------------

/// Primary octave frequency.
pub const BASE_FREQUENCY: f64 = 0.003;
/// Vertical amplitude of the relief curve output, in world units.
pub const BASE_AMPLITUDE: f64 = 500.0;

/// Secondary octave frequency.
pub const MID_FREQUENCY: f64 = 0.008;
/// Secondary octave weight relative to the primary band.
pub const MID_WEIGHT: f64 = 0.2;

/// Tertiary octave frequency.
pub const DETAIL_FREQUENCY: f64 = 0.02;
/// Tertiary octave weight relative to the primary band.
pub const DETAIL_WEIGHT: f64 = 0.1;

/// Erosion band frequency.
pub const EROSION_FREQUENCY: f64 = 0.008;
/// Erosion mask frequency (subtracted from the band, zero-floored).
pub const EROSION_MASK_FREQUENCY: f64 = 0.02;
/// Erosion mask strength.
pub const EROSION_STRENGTH: f64 = 0.1;

/// Hill overlay frequency.
pub const HILL_FREQUENCY: f64 = 0.03;
/// Hill overlay amplitude, in world units.
pub const HILL_AMPLITUDE: f64 = 100.0;
/// Fraction of the hill amplitude subtracted as a constant bias.
pub const HILL_BIAS: f64 = 0.3;

/// Relief curve: ordered (normalized signal position, normalized height)
/// control points shaping plains, slopes and cliffs. The composite noise
/// signal in [0, 1] is remapped through this table before height scaling.
pub const RELIEF_CURVE: [(f64, f64); 8] = [
    (0.0, 0.0),
    (0.12, 0.0),
    (0.25, 0.5),
    (0.35, 0.5),
    (0.45, 0.75),
    (0.5, 0.75),
    (0.7, 1.0),
    (1.0, 1.0),
];
