//! Components and resources for player proximity tracking.
use std::collections::HashSet;

use bevy::prelude::*;

use crate::npc::components::NpcId;

/// Marker component identifying the player entity (attached to camera).
#[derive(Component, Debug, Default)]
pub struct Player;

/// Information about an NPC that is near the player.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyNpcInfo {
    /// Unique identifier for the NPC
    pub npc_id: NpcId,
    /// Display name of the NPC
    pub name: String,
    /// Distance from player to NPC (in world units)
    pub distance: f32,
}

/// Frame-to-frame memory of which NPCs are in range and which are waiting for the
/// player to leave before their dialogue may open again.
#[derive(Resource, Debug, Default)]
pub struct ProximityLatch {
    in_range: HashSet<NpcId>,
    awaiting_exit: HashSet<NpcId>,
}

impl ProximityLatch {
    /// Records the NPCs in range this frame and returns the ones that were not in range
    /// last frame. NPCs that left range are released from any hold.
    pub fn observe<'a>(&mut self, nearby: &'a [NearbyNpcInfo]) -> Vec<&'a NearbyNpcInfo> {
        let current: HashSet<NpcId> = nearby.iter().map(|info| info.npc_id).collect();
        let entered = nearby
            .iter()
            .filter(|info| !self.in_range.contains(&info.npc_id))
            .collect();

        self.awaiting_exit.retain(|id| current.contains(id));
        self.in_range = current;
        entered
    }

    pub fn hold_until_exit(&mut self, npc: NpcId) {
        self.awaiting_exit.insert(npc);
    }

    pub fn is_held(&self, npc: NpcId) -> bool {
        self.awaiting_exit.contains(&npc)
    }
}
