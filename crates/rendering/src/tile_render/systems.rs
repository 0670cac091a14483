use bevy::prelude::*;

use terrain::tiles::TileSet;

use super::mesh::build_tile_mesh;
use super::types::{TerrainTile, TileEntities, TileStreaming, Viewer};

/// Spawn one entity per tile, hidden, and record the ids in tile order.
///
/// Runs once at startup after `terrain::generate_terrain`; tiles are never
/// despawned afterwards, only their `Visibility` flips.
pub fn spawn_terrain_tiles(
    mut commands: Commands,
    tile_set: Res<TileSet>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.42, 0.32),
        perceptual_roughness: 0.9,
        ..default()
    });

    let mut entities = Vec::with_capacity(tile_set.tiles.len());
    for tile in &tile_set.tiles {
        let mesh = build_tile_mesh(tile, &tile_set.indices);
        let entity = commands
            .spawn((
                Mesh3d(meshes.add(mesh)),
                MeshMaterial3d(material.clone()),
                Transform::IDENTITY,
                Visibility::Hidden,
                TerrainTile {
                    tile_x: tile.tile_x,
                    tile_z: tile.tile_z,
                },
            ))
            .id();
        entities.push(entity);
    }

    info!("spawned {} terrain tiles", entities.len());
    commands.insert_resource(TileEntities(entities));
}

/// Per-frame streaming: map the viewer position to a tile window and flip
/// visibility -- the whole previous window off, the whole current window on.
///
/// The viewer position is clamped to a valid tile coordinate before any
/// entity lookup, so a viewer far outside the world never indexes out of
/// bounds.
pub fn stream_tiles(
    mut streaming: ResMut<TileStreaming>,
    entities: Res<TileEntities>,
    tile_set: Res<TileSet>,
    viewer: Query<&Transform, With<Viewer>>,
    mut tiles: Query<&mut Visibility, With<TerrainTile>>,
) {
    if entities.0.is_empty() {
        return;
    }
    let Ok(transform) = viewer.get_single() else {
        return;
    };

    let change = streaming.0.update(
        transform.translation.x,
        transform.translation.z,
        &tile_set.layout,
    );

    for &index in &change.hidden {
        if let Ok(mut visibility) = tiles.get_mut(entities.0[index]) {
            *visibility = Visibility::Hidden;
        }
    }
    for &index in &change.shown {
        if let Ok(mut visibility) = tiles.get_mut(entities.0[index]) {
            *visibility = Visibility::Visible;
        }
    }
}
