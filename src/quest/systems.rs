//! Systems applying dialogue outcomes and NPC visits to the quest ledger.
use bevy::prelude::*;

use crate::{
    core::settings::ControlSettings,
    dialogue::{
        events::{DialogueResolved, NpcVisited},
        presenter::DialogueResponse,
    },
    npc::registry::NpcRegistry,
};

use super::{
    journal::{QuestJournal, QuestJournalEvent},
    ledger::QuestLedger,
};

/// Accepts the speaker's quest when the player answers "accept".
pub fn apply_dialogue_outcomes(
    time: Res<Time>,
    mut resolved: MessageReader<DialogueResolved>,
    registry: Res<NpcRegistry>,
    mut ledger: ResMut<QuestLedger>,
    mut journal: ResMut<QuestJournal>,
) {
    for outcome in resolved.read() {
        if outcome.response != DialogueResponse::Accept {
            continue;
        }

        let template = registry
            .get(&outcome.speaker)
            .and_then(|descriptor| descriptor.quest.as_ref());

        match ledger.accept(template) {
            Some(record) => {
                info!(
                    target: "quest",
                    "Quest accepted from {}: {}", outcome.speaker, record.description
                );
                journal.push(
                    time.elapsed_secs_f64(),
                    QuestJournalEvent::accepted(record),
                );
            }
            None => debug!(
                target: "quest",
                "{} has no open quest to accept", outcome.speaker
            ),
        }
    }
}

/// Completes quests that target an NPC when the player walks up to it.
pub fn complete_visited_quests(
    time: Res<Time>,
    settings: Res<ControlSettings>,
    mut visits: MessageReader<NpcVisited>,
    mut ledger: ResMut<QuestLedger>,
    mut journal: ResMut<QuestJournal>,
) {
    if !settings.quests.complete_on_target_visit {
        visits.clear();
        return;
    }

    for visit in visits.read() {
        if !ledger.has_open_quest_for(&visit.name) {
            continue;
        }

        for record in ledger.mark_completed(&visit.name) {
            info!(target: "quest", "Quest completed: {}", record.description);
            journal.push(
                time.elapsed_secs_f64(),
                QuestJournalEvent::completed(&record),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{npc::components::NpcId, quest::types::QuestTemplate};

    fn quest_app(settings: ControlSettings) -> App {
        let journal_path = std::env::temp_dir().join("wayfarer_quest_systems_unused.jsonl");
        let mut app = App::new();
        app.add_message::<DialogueResolved>()
            .add_message::<NpcVisited>()
            .init_resource::<Time>()
            .insert_resource(settings)
            .insert_resource(NpcRegistry::builtin())
            .insert_resource(QuestJournal::new(journal_path))
            .init_resource::<QuestLedger>()
            .add_systems(Update, (apply_dialogue_outcomes, complete_visited_quests).chain());
        app
    }

    fn resolved(speaker: &str, response: DialogueResponse) -> DialogueResolved {
        DialogueResolved {
            npc: NpcId::new(0),
            speaker: speaker.to_string(),
            response,
        }
    }

    fn visited(name: &str) -> NpcVisited {
        NpcVisited {
            npc: NpcId::new(1),
            name: name.to_string(),
        }
    }

    #[test]
    fn accept_adds_speaker_quest() {
        let mut app = quest_app(ControlSettings::default());
        app.world_mut()
            .write_message(resolved("Guide Bot", DialogueResponse::Accept));
        app.update();

        let ledger = app.world().resource::<QuestLedger>();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.records()[0].description, "Find and talk to Explorer");
        assert!(!ledger.records()[0].completed);
        assert_eq!(app.world().resource::<QuestJournal>().pending_len(), 1);

        let registry = app.world().resource::<NpcRegistry>();
        let template = registry
            .get("Guide Bot")
            .and_then(|descriptor| descriptor.quest.clone());
        assert_eq!(
            template,
            Some(QuestTemplate::new("Find and talk to Explorer", "Explorer"))
        );
    }

    #[test]
    fn decline_and_questless_accept_leave_ledger_empty() {
        let mut app = quest_app(ControlSettings::default());
        app.world_mut()
            .write_message(resolved("Guide Bot", DialogueResponse::Decline));
        app.world_mut()
            .write_message(resolved("Explorer", DialogueResponse::Accept));
        app.update();

        assert!(app.world().resource::<QuestLedger>().is_empty());
    }

    #[test]
    fn visiting_target_completes_quest() {
        let mut app = quest_app(ControlSettings::default());
        app.world_mut()
            .write_message(resolved("Guide Bot", DialogueResponse::Accept));
        app.update();

        app.world_mut().write_message(visited("Explorer"));
        app.update();

        let ledger = app.world().resource::<QuestLedger>();
        assert!(ledger.records()[0].completed);
        assert_eq!(ledger.render(), "Find and talk to Explorer - ✅");
        assert_eq!(app.world().resource::<QuestJournal>().pending_len(), 2);
    }

    #[test]
    fn visit_completion_can_be_disabled() {
        let mut settings = ControlSettings::default();
        settings.quests.complete_on_target_visit = false;
        let mut app = quest_app(settings);
        app.world_mut()
            .write_message(resolved("Guide Bot", DialogueResponse::Accept));
        app.world_mut().write_message(visited("Explorer"));
        app.update();

        let ledger = app.world().resource::<QuestLedger>();
        assert_eq!(ledger.len(), 1);
        assert!(!ledger.records()[0].completed);
    }
}
