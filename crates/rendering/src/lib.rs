//! Rendering layer: camera, lighting, and terrain tile presentation.
//!
//! Everything here consumes the data the terrain crate produced at startup.
//! Tiles spawn hidden; the per-frame streamer flips visibility around the
//! viewer so only a fixed window of tiles is ever drawn.

use bevy::prelude::*;

pub mod camera;
pub mod tile_render;

pub use tile_render::Viewer;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<tile_render::TileStreaming>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    tile_render::spawn_terrain_tiles,
                )
                    .chain()
                    .after(terrain::generate_terrain),
            )
            .add_systems(
                Update,
                (
                    camera::camera_move,
                    camera::camera_look,
                    tile_render::stream_tiles,
                ),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.55, 0.65, 0.75),
        brightness: 300.0,
    });

    commands.spawn((
        DirectionalLight {
            color: Color::srgb(0.9, 0.95, 1.0),
            illuminance: 4_000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::YXZ,
            std::f32::consts::FRAC_PI_4,
            -std::f32::consts::FRAC_PI_3,
            0.0,
        )),
    ));
}
