//! NPC plugin wiring the registry, spawning and model load tracking.
use bevy::prelude::*;

use crate::{
    npc::{
        components::NpcIdGenerator,
        registry::NpcRegistry,
        systems::{poll_npc_model_loads, promote_loaded_npcs, spawn_registry_npcs},
    },
    world::systems::spawn_world_environment,
};

pub struct NpcPlugin;

impl Plugin for NpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NpcIdGenerator>()
            .init_resource::<NpcRegistry>()
            .add_systems(Startup, spawn_registry_npcs.after(spawn_world_environment))
            .add_systems(Update, (poll_npc_model_loads, promote_loaded_npcs).chain());
    }
}
