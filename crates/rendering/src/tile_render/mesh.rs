use bevy::prelude::*;
use bevy::render::mesh::Indices;
use bevy::render::render_asset::RenderAssetUsages;

use terrain::tiles::Tile;

/// Assemble a renderable mesh from a tile's copied buffers.
///
/// Positions and normals are taken verbatim (the normals were computed over
/// the whole world before decomposition, so neighbors match at the edges);
/// the shared index buffer is copied out for the GPU upload. UVs are dummy:
/// the material is untextured.
pub fn build_tile_mesh(tile: &Tile, indices: &[u32]) -> Mesh {
    let uvs: Vec<[f32; 2]> = vec![[0.0, 0.0]; tile.positions.len()];
    Mesh::new(
        bevy::render::mesh::PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, tile.positions.clone())
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, tile.normals.clone())
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices.to_vec()))
}
