//! Control and interaction tuning loaded from `config/controls.toml`.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use super::paths::ConfigPaths;

#[derive(Debug, Clone, Deserialize, Default)]
struct RawControlsConfig {
    #[serde(default)]
    camera: RawCameraSection,
    #[serde(default)]
    proximity: RawProximitySection,
    #[serde(default)]
    quests: RawQuestSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawCameraSection {
    move_speed: f32,
    look_sensitivity: f32,
    eye_height: f32,
}

impl Default for RawCameraSection {
    fn default() -> Self {
        Self {
            move_speed: 12.0,
            look_sensitivity: 0.001,
            eye_height: 2.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawProximitySection {
    interaction_range: f32,
    rearm_on_exit: bool,
}

impl Default for RawProximitySection {
    fn default() -> Self {
        Self {
            interaction_range: 3.0,
            rearm_on_exit: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawQuestSection {
    complete_on_target_visit: bool,
}

impl Default for RawQuestSection {
    fn default() -> Self {
        Self {
            complete_on_target_visit: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    /// World units per second.
    pub move_speed: f32,
    /// Radians of rotation per pixel of mouse motion.
    pub look_sensitivity: f32,
    pub eye_height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProximitySettings {
    /// Strict upper bound on the player-NPC distance that opens a dialogue.
    pub interaction_range: f32,
    /// Hold an NPC's dialogue closed after it resolves until the player walks out of range.
    pub rearm_on_exit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuestSettings {
    /// Complete quests targeting an NPC as soon as the player walks into its range.
    pub complete_on_target_visit: bool,
}

/// Tunables shared by the camera, proximity and quest systems.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControlSettings {
    pub camera: CameraSettings,
    pub proximity: ProximitySettings,
    pub quests: QuestSettings,
}

impl ControlSettings {
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(data) => Self::parse(&data).unwrap_or_else(|err| {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    path.display(),
                    err
                );
                Self::default()
            }),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    path.display(),
                    err
                );
                Self::default()
            }
        }
    }

    pub fn parse(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawControlsConfig>(data).map(Self::from)
    }
}

impl Default for ControlSettings {
    fn default() -> Self {
        RawControlsConfig::default().into()
    }
}

impl FromWorld for ControlSettings {
    fn from_world(world: &mut World) -> Self {
        let path = world
            .get_resource::<ConfigPaths>()
            .map(|paths| paths.controls.clone())
            .unwrap_or_else(|| ConfigPaths::default().controls);
        Self::load_or_default(path)
    }
}

impl From<RawControlsConfig> for ControlSettings {
    fn from(value: RawControlsConfig) -> Self {
        let camera = value.camera;
        let proximity = value.proximity;

        Self {
            camera: CameraSettings {
                move_speed: camera.move_speed.max(0.0),
                look_sensitivity: camera.look_sensitivity.max(0.0),
                eye_height: camera.eye_height,
            },
            proximity: ProximitySettings {
                interaction_range: proximity.interaction_range.max(0.0),
                rearm_on_exit: proximity.rearm_on_exit,
            },
            quests: QuestSettings {
                complete_on_target_visit: value.quests.complete_on_target_visit,
            },
        }
    }
}
