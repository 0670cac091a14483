use bevy::prelude::*;
use bevy::window::PresentMode;

use terrain::TerrainSeed;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Seabed".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((terrain::TerrainPlugin, rendering::RenderingPlugin));

    // SEABED_SEED pins the world to a reproducible seed; unset means a fresh
    // random world every run.
    if let Ok(raw) = std::env::var("SEABED_SEED") {
        match raw.parse::<f64>() {
            Ok(seed) => {
                app.insert_resource(TerrainSeed(Some(seed)));
            }
            Err(_) => {
                eprintln!("SEABED_SEED is not a number, ignoring: {raw:?}");
            }
        }
    }

    app.run();
}
