//! Components used by the world module.
use bevy::prelude::*;

/// First-person camera orientation and locomotion tuning.
#[derive(Component, Debug)]
pub struct FirstPersonCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub move_speed: f32,
    pub look_sensitivity: f32,
}

impl FirstPersonCamera {
    pub fn new(move_speed: f32, look_sensitivity: f32) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            move_speed,
            look_sensitivity,
        }
    }
}

/// Marker component identifying the main directional light (the "sun").
#[derive(Component, Default)]
pub struct PrimarySun;

/// Marker for the large inward-facing box that stands in for the sky.
#[derive(Component, Default)]
pub struct SkyBox;
