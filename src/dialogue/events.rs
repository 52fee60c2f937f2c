//! Messages emitted by the proximity monitor and the dialogue presenter.
use bevy::prelude::Message;

use crate::npc::components::NpcId;

use super::presenter::DialogueResponse;

/// Fired each frame for every loaded NPC inside interaction range, nearest first.
#[derive(Message, Debug, Clone, PartialEq)]
pub struct ProximitySignal {
    pub npc: NpcId,
    pub name: String,
    pub distance: f32,
}

/// Fired once when the player walks into an NPC's interaction range.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct NpcVisited {
    pub npc: NpcId,
    pub name: String,
}

/// Fired when the player answers an open dialogue.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct DialogueResolved {
    pub npc: NpcId,
    pub speaker: String,
    pub response: DialogueResponse,
}
