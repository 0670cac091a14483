//! Seeded seabed terrain generation and tile streaming core.
//!
//! A single `f64` seed deterministically produces a bounded world surface:
//! the seed drives a noise source, the noise drives a multi-octave height
//! field, the height field is sampled into one world-scale mesh with
//! seam-consistent normals, and the mesh is carved into fixed-size tiles.
//! At runtime only the square window of tiles around the viewer is visible;
//! [`streaming`] computes that window each frame in O(window^2), independent
//! of world size.
//!
//! Nothing is persisted -- the terrain is recomputed from the seed on every
//! run.

use bevy::prelude::*;

pub mod config;
pub mod grid;
pub mod heightfield;
pub mod noise;
pub mod streaming;
pub mod tiles;
pub mod world_mesh;

#[cfg(test)]
mod integration_tests;

use heightfield::{HeightField, HeightFieldParams};
use noise::Noise;
use tiles::{TerrainLayout, TileSet};
use world_mesh::WorldMesh;

/// Optional noise seed. `None` draws a fresh seed from system entropy at
/// generation time; hosts insert `TerrainSeed(Some(..))` before startup for
/// reproducible worlds.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct TerrainSeed(pub Option<f64>);

/// Registers terrain resources and runs world generation once at startup.
///
/// Generation is synchronous and completes before any consumer system runs;
/// there is never a partially built visible world.
pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainSeed>()
            .init_resource::<TerrainLayout>()
            .add_systems(Startup, generate_terrain);
    }
}

/// Build the whole world from the configured seed and layout and insert the
/// finished [`TileSet`] resource.
pub fn generate_terrain(mut commands: Commands, seed: Res<TerrainSeed>, layout: Res<TerrainLayout>) {
    let noise = match seed.0 {
        Some(value) => Noise::new(value),
        None => Noise::from_entropy(),
    };
    info!("generating terrain, seed {}", noise.seed());

    let field = HeightField::new(noise, HeightFieldParams::default());
    let world = WorldMesh::build(&layout, |x, z| field.sample(x, z));
    let tile_set = TileSet::build(*layout, &world);

    let verts = world.heights.size() * world.heights.size();
    info!(
        "terrain ready: {} tiles, {} sampled vertices",
        tile_set.tiles.len(),
        verts
    );

    commands.insert_resource(tile_set);
}
