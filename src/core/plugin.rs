//! CorePlugin wires input state, configuration paths and control settings.
use bevy::prelude::*;

use super::{
    input::{record_keyboard_input, InputState, KeyPressed},
    paths::ConfigPaths,
    settings::ControlSettings,
};

/// Registers shared input and configuration resources.
#[derive(Debug, Clone, Default)]
pub struct CorePlugin {
    paths: Option<ConfigPaths>,
}

impl CorePlugin {
    /// Creates a CorePlugin that uses the provided paths instead of reading the environment.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_paths(paths: ConfigPaths) -> Self {
        Self { paths: Some(paths) }
    }
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let paths = self.paths.clone().unwrap_or_else(ConfigPaths::from_env);

        app.insert_resource(paths)
            .init_resource::<ControlSettings>()
            .init_resource::<InputState>()
            .add_message::<KeyPressed>()
            .add_systems(Startup, log_startup_settings)
            .add_systems(Update, record_keyboard_input);

        #[cfg(feature = "core_debug")]
        app.add_systems(Update, log_pressed_keys.after(record_keyboard_input));
    }
}

fn log_startup_settings(paths: Res<ConfigPaths>, settings: Res<ControlSettings>) {
    info!(
        "CorePlugin initialised: npcs={} controls={} journal={}",
        paths.npc_registry.display(),
        paths.controls.display(),
        paths.quest_journal.display()
    );
    info!(
        "Interaction range {:.2} (rearm on exit: {}), complete on target visit: {}",
        settings.proximity.interaction_range,
        settings.proximity.rearm_on_exit,
        settings.quests.complete_on_target_visit
    );
}

#[cfg(feature = "core_debug")]
fn log_pressed_keys(mut pressed: MessageReader<KeyPressed>) {
    for key in pressed.read() {
        debug!(target: "core_debug", "Key pressed: {:?}", key.label);
    }
}
