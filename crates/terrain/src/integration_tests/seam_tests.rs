//! Seam continuity across tile borders.
//!
//! Adjacent tiles copy their edge vertices from the same world-mesh rows, so
//! positions and normals must match bit for bit -- any deviation would show
//! up as a lighting seam.

use crate::heightfield::HeightField;
use crate::tiles::{TerrainLayout, TileSet};
use crate::world_mesh::WorldMesh;

fn build_tiles(seed: f64) -> TileSet {
    let layout = TerrainLayout::new(4, 8, 1, 1.0).expect("valid layout");
    let field = HeightField::from_seed(seed);
    let world = WorldMesh::build(&layout, |x, z| field.sample(x, z));
    TileSet::build(layout, &world)
}

#[test]
fn test_horizontal_neighbors_share_edge_exactly() {
    let set = build_tiles(0.42);
    let layout = set.layout;
    let edge = layout.tile_size();
    let verts = edge + 1;

    for tz in 0..layout.tiles_per_axis() {
        for tx in 0..layout.tiles_per_axis() - 1 {
            let west = &set.tiles[layout.tile_index(tx, tz)];
            let east = &set.tiles[layout.tile_index(tx + 1, tz)];

            for z in 0..verts {
                let right = z * verts + edge;
                let left = z * verts;
                assert_eq!(
                    west.positions[right], east.positions[left],
                    "position seam between tiles ({tx}, {tz}) and ({}, {tz}) at row {z}",
                    tx + 1
                );
                assert_eq!(
                    west.normals[right], east.normals[left],
                    "normal seam between tiles ({tx}, {tz}) and ({}, {tz}) at row {z}",
                    tx + 1
                );
            }
        }
    }
}

#[test]
fn test_vertical_neighbors_share_edge_exactly() {
    let set = build_tiles(0.42);
    let layout = set.layout;
    let edge = layout.tile_size();
    let verts = edge + 1;

    for tz in 0..layout.tiles_per_axis() - 1 {
        for tx in 0..layout.tiles_per_axis() {
            let north = &set.tiles[layout.tile_index(tx, tz)];
            let south = &set.tiles[layout.tile_index(tx, tz + 1)];

            for x in 0..verts {
                let bottom = edge * verts + x;
                let top = x;
                assert_eq!(
                    north.positions[bottom], south.positions[top],
                    "position seam between tiles ({tx}, {tz}) and ({tx}, {}) at column {x}",
                    tz + 1
                );
                assert_eq!(
                    north.normals[bottom], south.normals[top],
                    "normal seam between tiles ({tx}, {tz}) and ({tx}, {}) at column {x}",
                    tz + 1
                );
            }
        }
    }
}

#[test]
fn test_corner_vertex_shared_by_four_tiles() {
    let set = build_tiles(1.5);
    let layout = set.layout;
    let edge = layout.tile_size();
    let verts = edge + 1;

    // The inner corner where tiles (0,0), (1,0), (0,1), (1,1) meet.
    let nw = &set.tiles[layout.tile_index(0, 0)];
    let ne = &set.tiles[layout.tile_index(1, 0)];
    let sw = &set.tiles[layout.tile_index(0, 1)];
    let se = &set.tiles[layout.tile_index(1, 1)];

    let corner_nw = nw.positions[edge * verts + edge];
    let corner_ne = ne.positions[edge * verts];
    let corner_sw = sw.positions[edge];
    let corner_se = se.positions[0];

    assert_eq!(corner_nw, corner_ne);
    assert_eq!(corner_nw, corner_sw);
    assert_eq!(corner_nw, corner_se);

    let normal_nw = nw.normals[edge * verts + edge];
    assert_eq!(normal_nw, ne.normals[edge * verts]);
    assert_eq!(normal_nw, sw.normals[edge]);
    assert_eq!(normal_nw, se.normals[0]);
}

#[test]
fn test_identical_seed_rebuild_is_bitwise_equal() {
    let a = build_tiles(7.25);
    let b = build_tiles(7.25);

    for (ta, tb) in a.tiles.iter().zip(&b.tiles) {
        for (pa, pb) in ta.positions.iter().zip(&tb.positions) {
            assert_eq!(pa[1].to_bits(), pb[1].to_bits(), "height differs on rebuild");
        }
    }
}
