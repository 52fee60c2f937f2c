//! Systems driving the dialogue presenter lifecycle.
use bevy::prelude::*;

use crate::{core::input::KeyPressed, npc::registry::NpcRegistry};

use super::{
    events::{DialogueResolved, ProximitySignal},
    presenter::{DialoguePresenter, DialogueResponse},
};

/// Feeds key presses into the open dialogue and closes it on the first accept/decline.
///
/// Runs before [`present_dialogue`], so keys pressed in the frame a dialogue opens are
/// drained without reaching it.
pub fn resolve_dialogue_responses(
    mut keys: MessageReader<KeyPressed>,
    mut presenter: ResMut<DialoguePresenter>,
    mut resolved: MessageWriter<DialogueResolved>,
) {
    if !presenter.is_showing() {
        keys.clear();
        return;
    }

    let mut answered = false;
    for key in keys.read() {
        match DialogueResponse::from_key_label(&key.label) {
            Some(response) => {
                if presenter.submit(response) {
                    answered = true;
                } else {
                    debug!(target: "dialogue", "Ignoring extra reply {:?}", response);
                }
            }
            None => debug!(target: "dialogue", "Ignoring key {:?} during dialogue", key.label),
        }
    }

    if !answered {
        return;
    }

    if let Some(outcome) = presenter.resolve() {
        info!(
            target: "dialogue",
            "{} ({}) dialogue closed with {:?}",
            outcome.speaker, outcome.npc, outcome.response
        );
        resolved.write(DialogueResolved {
            npc: outcome.npc,
            speaker: outcome.speaker,
            response: outcome.response,
        });
    }
}

/// Opens the dialogue for the first in-range NPC while no dialogue is showing.
pub fn present_dialogue(
    mut signals: MessageReader<ProximitySignal>,
    registry: Res<NpcRegistry>,
    mut presenter: ResMut<DialoguePresenter>,
) {
    for signal in signals.read() {
        if presenter.is_showing() {
            continue;
        }

        let Some(descriptor) = registry.get(&signal.name) else {
            warn!(
                target: "dialogue",
                "No registry entry for {} ({}); cannot present dialogue",
                signal.name, signal.npc
            );
            continue;
        };

        presenter.open(
            signal.npc,
            descriptor.name.clone(),
            descriptor.dialogue_lines.clone(),
        );
        info!(
            target: "dialogue",
            "Showing dialogue for {} (distance: {:.2})",
            descriptor.name, signal.distance
        );
    }
}
