//! Tile decomposition: slicing the world mesh into fixed-size patches.
//!
//! Tiles are carved once at startup and never rebuilt; afterwards only their
//! visibility changes. Every tile reuses one shared local index buffer, and
//! its positions/normals are *copied* from the world mesh -- never
//! recomputed -- so vertices shared by adjacent tiles stay bit-identical.

use std::sync::Arc;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::world_mesh::{push_quad_indices, WorldMesh};

/// Invalid build-time tile configuration. Rejected at construction -- never
/// silently clamped -- so a surprising visible window cannot appear at
/// startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("tiles_per_axis must be positive")]
    ZeroTilesPerAxis,
    #[error("tile_size must be positive")]
    ZeroTileSize,
    #[error("tiles_radius {radius} outside valid range [1, {max}]")]
    RadiusOutOfRange { radius: usize, max: usize },
}

/// Validated tile grid geometry. Fixed at build time.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTerrainLayout")]
pub struct TerrainLayout {
    tiles_per_axis: usize,
    tile_size: usize,
    tiles_radius: usize,
    scale: f32,
}

impl Default for TerrainLayout {
    fn default() -> Self {
        Self {
            tiles_per_axis: config::TILES_PER_AXIS,
            tile_size: config::TILE_SIZE,
            tiles_radius: config::TILES_RADIUS,
            scale: config::WORLD_SCALE,
        }
    }
}

impl TerrainLayout {
    /// Validate and freeze a layout. `tiles_radius` must lie in
    /// [1, tiles_per_axis / 2] so the streaming window can never leave the
    /// world.
    pub fn new(
        tiles_per_axis: usize,
        tile_size: usize,
        tiles_radius: usize,
        scale: f32,
    ) -> Result<Self, LayoutError> {
        if tiles_per_axis == 0 {
            return Err(LayoutError::ZeroTilesPerAxis);
        }
        if tile_size == 0 {
            return Err(LayoutError::ZeroTileSize);
        }
        let max = tiles_per_axis / 2;
        if tiles_radius < 1 || tiles_radius > max {
            return Err(LayoutError::RadiusOutOfRange {
                radius: tiles_radius,
                max,
            });
        }
        Ok(Self {
            tiles_per_axis,
            tile_size,
            tiles_radius,
            scale,
        })
    }

    pub fn tiles_per_axis(&self) -> usize {
        self.tiles_per_axis
    }

    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    pub fn tiles_radius(&self) -> usize {
        self.tiles_radius
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// World extent in quads per axis.
    pub fn world_size(&self) -> usize {
        self.tiles_per_axis * self.tile_size
    }

    /// Half the scaled world extent; tile positions are translated by this
    /// so the world is centered on the origin.
    pub fn half_size(&self) -> f32 {
        self.world_size() as f32 * 0.5 * self.scale
    }

    pub fn tile_count(&self) -> usize {
        self.tiles_per_axis * self.tiles_per_axis
    }

    /// Flat row-major index of tile (tile_x, tile_z).
    #[inline]
    pub fn tile_index(&self, tile_x: usize, tile_z: usize) -> usize {
        tile_z * self.tiles_per_axis + tile_x
    }
}

/// Serde mirror of [`TerrainLayout`]. Deserialization funnels through
/// [`TerrainLayout::new`], so an invalid layout cannot enter by that door
/// either.
#[derive(Deserialize)]
struct RawTerrainLayout {
    tiles_per_axis: usize,
    tile_size: usize,
    tiles_radius: usize,
    scale: f32,
}

impl TryFrom<RawTerrainLayout> for TerrainLayout {
    type Error = LayoutError;

    fn try_from(raw: RawTerrainLayout) -> Result<Self, Self::Error> {
        Self::new(raw.tiles_per_axis, raw.tile_size, raw.tiles_radius, raw.scale)
    }
}

/// One fixed-size terrain patch: local vertex data copied from the world
/// mesh, addressed by its (tile_x, tile_z) grid coordinate.
pub struct Tile {
    pub tile_x: usize,
    pub tile_z: usize,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
}

/// All tiles plus the one index buffer they share.
///
/// Built once, immutable afterwards; safe to share read-only.
#[derive(Resource)]
pub struct TileSet {
    pub tiles: Vec<Tile>,
    /// Local triangle indices common to every tile, shared by reference and
    /// never mutated.
    pub indices: Arc<[u32]>,
    pub layout: TerrainLayout,
}

impl TileSet {
    /// Carve `layout.tile_count()` tiles out of a built world mesh.
    pub fn build(layout: TerrainLayout, world: &WorldMesh) -> Self {
        let tile_size = layout.tile_size();
        let verts_per_edge = tile_size + 1;
        let world_verts = layout.world_size() + 1;
        debug_assert_eq!(world.heights.size(), world_verts);

        let mut indices = Vec::with_capacity(tile_size * tile_size * 6);
        for z in 0..tile_size {
            for x in 0..tile_size {
                push_quad_indices(&mut indices, x, z, verts_per_edge);
            }
        }
        let indices: Arc<[u32]> = indices.into();

        let half = layout.half_size();
        let scale = layout.scale();

        let mut tiles = Vec::with_capacity(layout.tile_count());
        for tile_z in 0..layout.tiles_per_axis() {
            for tile_x in 0..layout.tiles_per_axis() {
                let mut positions = Vec::with_capacity(verts_per_edge * verts_per_edge);
                let mut normals = Vec::with_capacity(verts_per_edge * verts_per_edge);

                for z in 0..verts_per_edge {
                    for x in 0..verts_per_edge {
                        let world_x = tile_x * tile_size + x;
                        let world_z = tile_z * tile_size + z;

                        positions.push([
                            (world_x as f32 - half) * scale,
                            world.heights.get(world_x, world_z) * scale,
                            (world_z as f32 - half) * scale,
                        ]);
                        normals.push(world.normals[world.heights.index(world_x, world_z)]);
                    }
                }

                tiles.push(Tile {
                    tile_x,
                    tile_z,
                    positions,
                    normals,
                });
            }
        }

        Self {
            tiles,
            indices,
            layout,
        }
    }
}
