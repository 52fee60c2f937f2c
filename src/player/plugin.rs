//! Player plugin wiring proximity monitoring.
use bevy::prelude::*;

use crate::{
    dialogue::systems::resolve_dialogue_responses,
    player::{components::ProximityLatch, systems::monitor_npc_proximity},
    world::systems::first_person_translate,
};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ProximityLatch>().add_systems(
            Update,
            monitor_npc_proximity
                .after(first_person_translate)
                .after(resolve_dialogue_responses),
        );
    }
}
