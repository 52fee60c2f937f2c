use std::path::Path;

use bevy::prelude::*;

mod core;
mod dialogue;
mod npc;
mod player;
mod quest;
mod ui;
mod world;

use crate::{
    core::CorePlugin, dialogue::DialoguePlugin, npc::NpcPlugin, player::PlayerPlugin,
    quest::QuestPlugin, ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    load_settings_env();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Wayfarer".to_string(),
                    ..default()
                }),
                ..default()
            }),
            CorePlugin::default(), // First: other plugins read ConfigPaths while building
            WorldPlugin,
            NpcPlugin,
            PlayerPlugin,
            DialoguePlugin,
            QuestPlugin,
            UiPlugin,
        ))
        .run();
}

fn load_settings_env() {
    const SETTINGS_FILE: &str = "settings.env";

    let path = Path::new(SETTINGS_FILE);
    if !path.exists() {
        return;
    }

    if let Err(err) = dotenvy::from_filename(path) {
        eprintln!("Failed to load {}: {}", SETTINGS_FILE, err);
    }
}
