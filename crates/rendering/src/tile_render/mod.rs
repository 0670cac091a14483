//! Terrain tile entities and per-frame visibility streaming.

mod mesh;
mod systems;
mod types;

pub use mesh::build_tile_mesh;
pub use systems::{spawn_terrain_tiles, stream_tiles};
pub use types::{TerrainTile, TileEntities, TileStreaming, Viewer};
