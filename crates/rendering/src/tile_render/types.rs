use bevy::prelude::*;

use terrain::streaming::StreamingController;

/// Marks the entity whose translation feeds the streaming controller.
/// Exactly one entity should carry this; the camera does by default.
#[derive(Component)]
pub struct Viewer;

/// Marker + grid coordinate for one spawned terrain tile entity.
#[derive(Component)]
pub struct TerrainTile {
    pub tile_x: usize,
    pub tile_z: usize,
}

/// Tile entity ids in tile order (`tile_z * tiles_per_axis + tile_x`), so a
/// window index maps straight to an entity. Populated once at spawn.
#[derive(Resource, Default)]
pub struct TileEntities(pub Vec<Entity>);

/// The streaming controller's frame-to-frame bookkeeping.
#[derive(Resource, Default)]
pub struct TileStreaming(pub StreamingController);
