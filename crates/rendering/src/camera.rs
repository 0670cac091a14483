use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use crate::tile_render::Viewer;

const MOVE_SPEED: f32 = 120.0;
const FAST_MULTIPLIER: f32 = 4.0;
const LOOK_SENSITIVITY: f32 = 0.003;
const MIN_PITCH: f32 = -85.0 * std::f32::consts::PI / 180.0;
const MAX_PITCH: f32 = 85.0 * std::f32::consts::PI / 180.0;

/// Free-fly viewer camera state. The camera entity's translation is the
/// position feed the tile streamer reads every frame.
#[derive(Resource)]
pub struct FlyCamera {
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: -20.0_f32.to_radians(),
        }
    }
}

pub fn setup_camera(mut commands: Commands) {
    let fly = FlyCamera::default();

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 120.0, 0.0)
            .with_rotation(Quat::from_euler(EulerRot::YXZ, fly.yaw, fly.pitch, 0.0)),
        Viewer,
    ));
    commands.insert_resource(fly);
}

/// WASD planar movement, Q/E vertical, shift to boost.
pub fn camera_move(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut query: Query<&mut Transform, With<Viewer>>,
) {
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };

    let forward = transform.forward();
    let planar_forward = Vec3::new(forward.x, 0.0, forward.z).normalize_or_zero();
    let right = transform.right();
    let planar_right = Vec3::new(right.x, 0.0, right.z).normalize_or_zero();

    let mut direction = Vec3::ZERO;
    if keys.pressed(KeyCode::KeyW) {
        direction += planar_forward;
    }
    if keys.pressed(KeyCode::KeyS) {
        direction -= planar_forward;
    }
    if keys.pressed(KeyCode::KeyD) {
        direction += planar_right;
    }
    if keys.pressed(KeyCode::KeyA) {
        direction -= planar_right;
    }
    if keys.pressed(KeyCode::KeyE) {
        direction += Vec3::Y;
    }
    if keys.pressed(KeyCode::KeyQ) {
        direction -= Vec3::Y;
    }

    if direction == Vec3::ZERO {
        return;
    }

    let mut speed = MOVE_SPEED;
    if keys.pressed(KeyCode::ShiftLeft) {
        speed *= FAST_MULTIPLIER;
    }
    transform.translation += direction.normalize() * speed * time.delta_secs();
}

/// Mouse look while the right button is held.
pub fn camera_look(
    buttons: Res<ButtonInput<MouseButton>>,
    mut motion: EventReader<MouseMotion>,
    mut fly: ResMut<FlyCamera>,
    mut query: Query<&mut Transform, With<Viewer>>,
) {
    if !buttons.pressed(MouseButton::Right) {
        motion.clear();
        return;
    }
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };

    for event in motion.read() {
        fly.yaw -= event.delta.x * LOOK_SENSITIVITY;
        fly.pitch = (fly.pitch - event.delta.y * LOOK_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
    }

    transform.rotation = Quat::from_euler(EulerRot::YXZ, fly.yaw, fly.pitch, 0.0);
}
