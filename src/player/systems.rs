//! Proximity monitoring between the player and loaded NPCs.
use bevy::prelude::*;

use crate::{
    core::settings::ControlSettings,
    dialogue::{
        events::{DialogueResolved, NpcVisited, ProximitySignal},
        presenter::DialoguePresenter,
    },
    npc::components::{Identity, RuntimeNpc},
    player::components::{NearbyNpcInfo, Player, ProximityLatch},
};

/// Strict range check: an NPC exactly `range` away is out of range.
pub fn within_interaction_range(player: Vec3, npc: Vec3, range: f32) -> bool {
    player.distance(npc) < range
}

/// Collects NPCs within `range` of `player`, nearest first.
pub fn npcs_in_range<'a>(
    player: Vec3,
    npcs: impl Iterator<Item = (Vec3, &'a Identity)>,
    range: f32,
) -> Vec<NearbyNpcInfo> {
    let mut nearby: Vec<_> = npcs
        .filter(|(position, _)| within_interaction_range(player, *position, range))
        .map(|(position, identity)| NearbyNpcInfo {
            npc_id: identity.id,
            name: identity.display_name.clone(),
            distance: player.distance(position),
        })
        .collect();
    nearby.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    nearby
}

/// Per-frame proximity check against every loaded NPC.
///
/// Emits [`NpcVisited`] on range entry and [`ProximitySignal`] for each in-range NPC while
/// no dialogue is showing. NPCs whose dialogue just resolved are held until the player
/// leaves their range when `rearm_on_exit` is set.
#[allow(clippy::too_many_arguments)]
pub fn monitor_npc_proximity(
    player_query: Query<&Transform, With<Player>>,
    npc_query: Query<(&Transform, &Identity), With<RuntimeNpc>>,
    settings: Res<ControlSettings>,
    presenter: Res<DialoguePresenter>,
    mut latch: ResMut<ProximityLatch>,
    mut resolved: MessageReader<DialogueResolved>,
    mut signals: MessageWriter<ProximitySignal>,
    mut visits: MessageWriter<NpcVisited>,
) {
    for outcome in resolved.read() {
        if settings.proximity.rearm_on_exit {
            latch.hold_until_exit(outcome.npc);
        }
    }

    let Ok(player_transform) = player_query.single() else {
        return;
    };

    let nearby = npcs_in_range(
        player_transform.translation,
        npc_query
            .iter()
            .map(|(transform, identity)| (transform.translation, identity)),
        settings.proximity.interaction_range,
    );

    for entered in latch.observe(&nearby) {
        debug!(
            "Player reached {} (distance: {:.2})",
            entered.name, entered.distance
        );
        visits.write(NpcVisited {
            npc: entered.npc_id,
            name: entered.name.clone(),
        });
    }

    if presenter.is_showing() {
        return;
    }

    for info in nearby.iter().filter(|info| !latch.is_held(info.npc_id)) {
        signals.write(ProximitySignal {
            npc: info.npc_id,
            name: info.name.clone(),
            distance: info.distance,
        });
    }
}
