//! Per-frame tile streaming window.
//!
//! Every frame the viewer position maps to a tile coordinate, clamped so the
//! square active window always fits inside the world, and the whole window
//! is rewritten: previous tiles hidden, current window shown. Cost is
//! O((2 * tiles_radius)^2) per frame regardless of world size. There is no
//! entered/exited diffing and no short-circuit when the viewer tile is
//! unchanged; the rewrite is the contract.

use crate::tiles::TerrainLayout;

/// Tile coordinate the viewer currently occupies, clamped per axis to
/// [tiles_radius, tiles_per_axis - tiles_radius].
///
/// Clamping happens before any index is formed, so positions far outside the
/// world (or non-finite ones) still resolve to a valid window.
pub fn viewer_tile(viewer_x: f32, viewer_z: f32, layout: &TerrainLayout) -> (usize, usize) {
    let lo = layout.tiles_radius() as isize;
    let hi = (layout.tiles_per_axis() - layout.tiles_radius()) as isize;
    let half = layout.half_size();
    let tile_size = layout.tile_size() as f32;

    let clamp_axis = |coord: f32| -> usize {
        let tile = ((coord + half) / tile_size).round();
        // `as isize` saturates (and maps NaN to 0) before the clamp.
        (tile as isize).clamp(lo, hi) as usize
    };

    (clamp_axis(viewer_x), clamp_axis(viewer_z))
}

/// Tiles to hide and tiles to show for one frame, in application order:
/// hide first, then show, so tiles present in both end up visible.
pub struct WindowChange {
    pub hidden: Vec<usize>,
    pub shown: Vec<usize>,
}

/// Active-window bookkeeping: remembers the previously shown set so it can
/// be deactivated wholesale on the next update.
#[derive(Default)]
pub struct StreamingController {
    previous: Vec<usize>,
}

impl StreamingController {
    /// Recompute the active window around the viewer.
    ///
    /// Returns the previous active set as `hidden` and the full square
    /// window [-r, r) along both axes around the clamped viewer tile as
    /// `shown`; `shown` becomes the next previous set.
    pub fn update(&mut self, viewer_x: f32, viewer_z: f32, layout: &TerrainLayout) -> WindowChange {
        let (tile_x, tile_z) = viewer_tile(viewer_x, viewer_z, layout);
        let radius = layout.tiles_radius();
        let per_axis = layout.tiles_per_axis();

        let hidden = std::mem::take(&mut self.previous);

        let mut shown = Vec::with_capacity(4 * radius * radius);
        for z in (tile_z - radius)..(tile_z + radius) {
            for x in (tile_x - radius)..(tile_x + radius) {
                shown.push(z * per_axis + x);
            }
        }

        self.previous.clone_from(&shown);
        WindowChange { hidden, shown }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_32() -> TerrainLayout {
        TerrainLayout::new(32, 32, 8, 1.0).expect("valid layout")
    }

    /// Apply a window change to a flat visibility vector the way the render
    /// side does: hide first, then show.
    fn apply(flags: &mut [bool], change: &WindowChange) {
        for &i in &change.hidden {
            flags[i] = false;
        }
        for &i in &change.shown {
            flags[i] = true;
        }
    }

    #[test]
    fn test_viewer_at_origin_maps_to_center_tile() {
        assert_eq!(viewer_tile(0.0, 0.0, &layout_32()), (16, 16));
    }

    #[test]
    fn test_viewer_tile_clamps_to_window_bounds() {
        let layout = layout_32();
        // Far past the +X edge: clamp to tiles_per_axis - tiles_radius.
        assert_eq!(viewer_tile(1.0e9, 0.0, &layout), (24, 16));
        // Far past the -Z edge: clamp to tiles_radius.
        assert_eq!(viewer_tile(0.0, -1.0e9, &layout), (16, 8));
        // Non-finite input still lands inside the valid range.
        assert_eq!(viewer_tile(f32::NAN, f32::INFINITY, &layout), (8, 24));
    }

    #[test]
    fn test_window_at_origin_is_centered_square() {
        let layout = layout_32();
        let mut controller = StreamingController::default();
        let change = controller.update(0.0, 0.0, &layout);

        assert!(change.hidden.is_empty(), "first update hides nothing");
        assert_eq!(change.shown.len(), 256);

        let expected: Vec<usize> = (8..24)
            .flat_map(|z| (8..24).map(move |x| z * 32 + x))
            .collect();
        assert_eq!(change.shown, expected);
    }

    #[test]
    fn test_window_clamped_at_extreme_edge() {
        let layout = layout_32();
        let mut controller = StreamingController::default();
        let change = controller.update(1.0e9, 0.0, &layout);

        // X range clamps to [tiles_per_axis - 2 * tiles_radius, tiles_per_axis).
        for &i in &change.shown {
            let x = i % 32;
            assert!((16..32).contains(&x), "tile x {x} escaped the world");
        }
        assert_eq!(change.shown.len(), 256);
    }

    #[test]
    fn test_all_window_indices_in_bounds_everywhere() {
        let layout = layout_32();
        let mut controller = StreamingController::default();
        for (vx, vz) in [
            (0.0, 0.0),
            (-1.0e9, -1.0e9),
            (1.0e9, 1.0e9),
            (512.0, -512.0),
            (f32::NEG_INFINITY, f32::NAN),
        ] {
            let change = controller.update(vx, vz, &layout);
            for &i in &change.shown {
                assert!(i < layout.tile_count(), "index {i} out of bounds");
            }
        }
    }

    #[test]
    fn test_update_idempotent_for_unchanged_viewer() {
        let layout = layout_32();
        let mut controller = StreamingController::default();
        let mut flags = vec![false; layout.tile_count()];

        let first = controller.update(10.0, -20.0, &layout);
        apply(&mut flags, &first);
        let snapshot = flags.clone();

        let second = controller.update(10.0, -20.0, &layout);
        apply(&mut flags, &second);

        assert_eq!(flags, snapshot, "repeat update changed visibility");
        assert_eq!(second.hidden, second.shown, "window should be unchanged");
    }

    #[test]
    fn test_visible_count_invariant() {
        let layout = layout_32();
        let mut controller = StreamingController::default();
        let mut flags = vec![false; layout.tile_count()];

        for (vx, vz) in [(0.0, 0.0), (300.0, 300.0), (-1.0e6, 40.0)] {
            let change = controller.update(vx, vz, &layout);
            apply(&mut flags, &change);
            let visible = flags.iter().filter(|v| **v).count();
            assert_eq!(visible, 256, "visible count must be (2 * radius)^2");
        }
    }

    #[test]
    fn test_window_follows_viewer_across_tile_boundary() {
        let layout = layout_32();
        let mut controller = StreamingController::default();
        let mut flags = vec![false; layout.tile_count()];

        apply(&mut flags, &controller.update(0.0, 0.0, &layout));
        // One tile to the +X: the window shifts one column.
        apply(&mut flags, &controller.update(32.0, 0.0, &layout));

        for z in 8..24 {
            assert!(!flags[z * 32 + 8], "old west column still visible");
            assert!(flags[z * 32 + 24], "new east column not visible");
        }
        assert_eq!(flags.iter().filter(|v| **v).count(), 256);
    }

    #[test]
    fn test_minimal_radius_window() {
        let layout = TerrainLayout::new(4, 8, 1, 1.0).expect("valid layout");
        let mut controller = StreamingController::default();
        let change = controller.update(0.0, 0.0, &layout);
        assert_eq!(change.shown.len(), 4);
    }
}
