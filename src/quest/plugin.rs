//! Quest plugin wiring the ledger, journal and quest progression systems.
use bevy::prelude::*;

use crate::{dialogue::systems::resolve_dialogue_responses, player::systems::monitor_npc_proximity};

use super::{
    journal::{flush_quest_journal, QuestJournal},
    ledger::QuestLedger,
    systems::{apply_dialogue_outcomes, complete_visited_quests},
};

pub struct QuestPlugin;

impl Plugin for QuestPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<QuestLedger>()
            .init_resource::<QuestJournal>()
            .add_systems(Startup, log_journal_path)
            .add_systems(
                Update,
                (
                    apply_dialogue_outcomes.after(resolve_dialogue_responses),
                    complete_visited_quests
                        .after(monitor_npc_proximity)
                        .after(apply_dialogue_outcomes),
                    flush_quest_journal
                        .after(apply_dialogue_outcomes)
                        .after(complete_visited_quests),
                ),
            );
    }
}

fn log_journal_path(journal: Res<QuestJournal>) {
    info!(
        target: "quest",
        "QuestPlugin initialised; journal at {}",
        journal.path().display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::settings::ControlSettings,
        dialogue::{
            events::{DialogueResolved, NpcVisited},
            presenter::DialogueResponse,
        },
        npc::{components::NpcId, registry::NpcRegistry},
    };

    #[test]
    fn visit_in_the_accepting_frame_completes_the_quest() {
        let journal_path = std::env::temp_dir().join(format!(
            "wayfarer_same_frame_{}.jsonl",
            std::process::id()
        ));

        let mut app = App::new();
        app.add_message::<DialogueResolved>()
            .add_message::<NpcVisited>()
            .init_resource::<Time>()
            .insert_resource(ControlSettings::default())
            .insert_resource(NpcRegistry::builtin())
            .insert_resource(QuestJournal::new(journal_path.clone()))
            .add_plugins(QuestPlugin);

        app.world_mut().write_message(DialogueResolved {
            npc: NpcId::new(0),
            speaker: "Guide Bot".to_string(),
            response: DialogueResponse::Accept,
        });
        app.world_mut().write_message(NpcVisited {
            npc: NpcId::new(1),
            name: "Explorer".to_string(),
        });
        app.update();

        let ledger = app.world().resource::<QuestLedger>();
        assert_eq!(ledger.render(), "Find and talk to Explorer - ✅");

        let _ = std::fs::remove_file(journal_path);
    }
}
