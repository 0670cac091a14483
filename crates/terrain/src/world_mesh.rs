//! World-scale mesh sampling and normal computation.
//!
//! The whole bounded world is sampled and triangulated as one mesh so that
//! vertex normals can be accumulated over every face before any tile is
//! sliced off. Normals computed per tile would disagree along tile borders;
//! computing them here first guarantees adjacent tiles later copy
//! bit-identical boundary normals and no lighting seams appear.

use crate::grid::Grid2;
use crate::tiles::TerrainLayout;

/// Sampled heights plus per-vertex normals for the full world grid.
///
/// Positions are implicit: vertex (x, z) sits at world (x, height, z) before
/// tile-local translation and scaling. The triangle list used for normal
/// accumulation is transient; tiles rebuild their own local index buffers.
pub struct WorldMesh {
    pub heights: Grid2<f32>,
    pub normals: Vec<[f32; 3]>,
}

impl WorldMesh {
    /// Sample `height_at` on every integer point of the (W+1)x(W+1) grid and
    /// compute smooth vertex normals over the entire surface.
    pub fn build(layout: &TerrainLayout, height_at: impl Fn(f64, f64) -> f64) -> Self {
        let world_size = layout.world_size();
        let verts_per_axis = world_size + 1;

        let heights = Grid2::from_fn(verts_per_axis, |x, z| height_at(x as f64, z as f64) as f32);

        let mut indices = Vec::with_capacity(world_size * world_size * 6);
        for z in 0..world_size {
            for x in 0..world_size {
                push_quad_indices(&mut indices, x, z, verts_per_axis);
            }
        }

        let normals = vertex_normals(&heights, &indices);

        Self { heights, normals }
    }
}

/// Emit the two triangles of the unit quad whose lowest corner is (x, z),
/// with `stride` vertices per grid row.
///
/// The quad diagonal alternates on (x + z) parity; a fixed diagonal would
/// streak directional artifacts across the surface.
pub(crate) fn push_quad_indices(indices: &mut Vec<u32>, x: usize, z: usize, stride: usize) {
    let v = (z * stride + x) as u32;
    let s = stride as u32;
    if (x + z) % 2 == 0 {
        // Diagonal from (x, z) to (x+1, z+1).
        indices.extend_from_slice(&[v + s + 1, v + 1, v, v, v + s, v + s + 1]);
    } else {
        // Diagonal from (x+1, z) to (x, z+1).
        indices.extend_from_slice(&[v + s, v + 1, v, v + s, v + s + 1, v + 1]);
    }
}

/// Accumulate area-weighted face normals into every referenced vertex and
/// normalize. Unnormalized cross products weight each face by its area, so
/// large faces dominate the smoothed result.
fn vertex_normals(heights: &Grid2<f32>, indices: &[u32]) -> Vec<[f32; 3]> {
    let verts_per_axis = heights.size();
    let position = |i: u32| -> [f32; 3] {
        let x = i as usize % verts_per_axis;
        let z = i as usize / verts_per_axis;
        [x as f32, *heights.get(x, z), z as f32]
    };

    let mut normals = vec![[0.0f32; 3]; verts_per_axis * verts_per_axis];

    for tri in indices.chunks_exact(3) {
        let a = position(tri[0]);
        let b = position(tri[1]);
        let c = position(tri[2]);

        let cb = [c[0] - b[0], c[1] - b[1], c[2] - b[2]];
        let ab = [a[0] - b[0], a[1] - b[1], a[2] - b[2]];
        let face = [
            cb[1] * ab[2] - cb[2] * ab[1],
            cb[2] * ab[0] - cb[0] * ab[2],
            cb[0] * ab[1] - cb[1] * ab[0],
        ];

        for &i in tri {
            let n = &mut normals[i as usize];
            n[0] += face[0];
            n[1] += face[1];
            n[2] += face[2];
        }
    }

    for n in &mut normals {
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        if len < 1e-8 {
            *n = [0.0, 1.0, 0.0];
        } else {
            n[0] /= len;
            n[1] /= len;
            n[2] /= len;
        }
    }

    normals
}
