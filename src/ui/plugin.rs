// src/ui/plugin.rs
//
// UiPlugin coordinates the dialogue panel and quest log overlays.

use bevy::prelude::*;

use crate::{
    dialogue::systems::{present_dialogue, resolve_dialogue_responses},
    quest::systems::{apply_dialogue_outcomes, complete_visited_quests},
};

use super::{
    dialogue_panel::{
        components::DialoguePanelSettings,
        systems::{spawn_dialogue_panel, sync_dialogue_panel},
    },
    quest_log::systems::{refresh_quest_log, spawn_quest_log},
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.insert_resource(DialoguePanelSettings::default())
            .add_systems(Startup, (spawn_dialogue_panel, spawn_quest_log))
            .add_systems(
                Update,
                (
                    sync_dialogue_panel
                        .after(resolve_dialogue_responses)
                        .after(present_dialogue),
                    refresh_quest_log
                        .after(apply_dialogue_outcomes)
                        .after(complete_visited_quests),
                ),
            );
    }
}
