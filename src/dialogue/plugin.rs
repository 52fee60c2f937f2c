//! Dialogue plugin wiring the presenter resource and its systems.
use bevy::prelude::*;

use crate::{core::input::record_keyboard_input, player::systems::monitor_npc_proximity};

use super::{
    events::{DialogueResolved, NpcVisited, ProximitySignal},
    presenter::DialoguePresenter,
    systems::{present_dialogue, resolve_dialogue_responses},
};

pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialoguePresenter>()
            .add_message::<ProximitySignal>()
            .add_message::<NpcVisited>()
            .add_message::<DialogueResolved>()
            .add_systems(
                Update,
                (
                    resolve_dialogue_responses.after(record_keyboard_input),
                    present_dialogue.after(monitor_npc_proximity),
                ),
            );
    }
}
