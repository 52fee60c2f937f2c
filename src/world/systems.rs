//! Systems for the world module.
use bevy::{
    ecs::message::MessageReader,
    gltf::GltfAssetLabel,
    image::{ImageAddressMode, ImageLoaderSettings, ImageSampler, ImageSamplerDescriptor},
    input::{mouse::MouseMotion, ButtonInput},
    math::{primitives::Plane3d, Affine2},
    prelude::*,
    window::{CursorGrabMode, CursorOptions},
};

use crate::{
    core::{input::InputState, settings::ControlSettings},
    player::components::Player,
    world::components::{FirstPersonCamera, PrimarySun, SkyBox},
};

const GROUND_SIZE: f32 = 1000.0;
const GROUND_TEXTURE_REPEAT: f32 = 50.0;
const SKY_BOX_SIZE: f32 = 1000.0;
pub const SKY_COLOR: Color = Color::srgb(0.53, 0.75, 0.92);
const GRASS_TEXTURE: &str = "textures/grass.jpg";
const PITCH_LIMIT: f32 = 1.54;

/// Static props placed around the spawn point: (asset path, position).
const ENVIRONMENT_PROPS: [(&str, Vec3); 2] = [
    ("environment/tree.glb", Vec3::new(0.0, 0.0, -10.0)),
    ("environment/building.glb", Vec3::new(10.0, 0.0, 10.0)),
];

/// Spawns the initial scene: tiled grass ground, sky box, sun and the first-person camera.
pub fn spawn_world_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    settings: Res<ControlSettings>,
) {
    let grass = asset_server.load_with_settings(
        GRASS_TEXTURE,
        |loader: &mut ImageLoaderSettings| {
            loader.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
                address_mode_u: ImageAddressMode::Repeat,
                address_mode_v: ImageAddressMode::Repeat,
                ..default()
            });
        },
    );

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(GROUND_SIZE, GROUND_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(grass),
            uv_transform: Affine2::from_scale(Vec2::splat(GROUND_TEXTURE_REPEAT)),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        })),
        Transform::default(),
        Name::new("Ground"),
    ));

    commands.spawn((
        Mesh3d(meshes.add(Cuboid::from_size(Vec3::splat(SKY_BOX_SIZE)))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: SKY_COLOR,
            unlit: true,
            cull_mode: None,
            ..default()
        })),
        Transform::default(),
        SkyBox,
        Name::new("Sky Box"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(16.0, 32.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
        PrimarySun,
    ));

    let camera = &settings.camera;
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, camera.eye_height, 0.0),
        FirstPersonCamera::new(camera.move_speed, camera.look_sensitivity),
        Player,
        Name::new("Player Camera"),
    ));
}

/// Loads the static trees and buildings. Missing files only leave a gap in the scene.
pub fn spawn_environment_props(mut commands: Commands, asset_server: Res<AssetServer>) {
    for (path, position) in ENVIRONMENT_PROPS {
        commands.spawn((
            SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(path))),
            Transform::from_translation(position),
            Name::new(path),
        ));
    }
}

/// Grabs the cursor on left click and releases it on Escape.
pub fn update_cursor_grab(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut cursor_options: Single<&mut CursorOptions>,
) {
    if mouse_buttons.just_pressed(MouseButton::Left) {
        cursor_options.visible = false;
        cursor_options.grab_mode = CursorGrabMode::Locked;
    } else if keyboard.just_pressed(KeyCode::Escape) {
        cursor_options.visible = true;
        cursor_options.grab_mode = CursorGrabMode::None;
    }
}

/// Applies mouse look to the first-person camera while the cursor is grabbed.
pub fn first_person_mouse_look(
    mut motion_events: MessageReader<MouseMotion>,
    cursor_options: Single<&CursorOptions>,
    mut query: Query<(&mut FirstPersonCamera, &mut Transform)>,
) {
    let mut cumulative_delta = Vec2::ZERO;
    for ev in motion_events.read() {
        cumulative_delta += ev.delta;
    }

    if cursor_options.grab_mode != CursorGrabMode::Locked || cumulative_delta == Vec2::ZERO {
        return;
    }

    if let Ok((mut camera, mut transform)) = query.single_mut() {
        camera.yaw -= cumulative_delta.x * camera.look_sensitivity;
        camera.pitch -= cumulative_delta.y * camera.look_sensitivity;
        camera.pitch = camera.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        let rotation = Quat::from_axis_angle(Vec3::Y, camera.yaw)
            * Quat::from_axis_angle(Vec3::X, camera.pitch);
        transform.rotation = rotation.normalize();
    }
}

/// Unit-length ground-plane movement direction for the held WASD keys, or zero.
pub fn planar_movement(forward: Vec3, right: Vec3, input: &InputState) -> Vec3 {
    let mut direction = Vec3::ZERO;
    if input.is_pressed("w") {
        direction += forward;
    }
    if input.is_pressed("s") {
        direction -= forward;
    }
    if input.is_pressed("a") {
        direction -= right;
    }
    if input.is_pressed("d") {
        direction += right;
    }

    direction.y = 0.0;
    direction.normalize_or_zero()
}

/// Moves the first-person camera along the ground relative to where it is looking.
pub fn first_person_translate(
    input: Res<InputState>,
    time: Res<Time>,
    mut query: Query<(&FirstPersonCamera, &mut Transform)>,
) {
    if let Ok((camera, mut transform)) = query.single_mut() {
        let direction = planar_movement(
            transform.forward().as_vec3(),
            transform.right().as_vec3(),
            &input,
        );
        transform.translation += direction * camera.move_speed * time.delta_secs();
    }
}
