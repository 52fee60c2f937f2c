//! Quest module hosting templates, the ledger and the quest journal.
pub mod journal;
pub mod ledger;
pub mod plugin;
pub mod systems;
pub mod types;

pub use plugin::QuestPlugin;

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use super::{journal::QuestJournal, ledger::QuestLedger, systems::*};
    use crate::{
        core::{input::KeyPressed, settings::ControlSettings},
        dialogue::{
            events::{DialogueResolved, NpcVisited, ProximitySignal},
            presenter::DialoguePresenter,
            systems::{present_dialogue, resolve_dialogue_responses},
        },
        npc::{
            components::{Identity, NpcIdGenerator, RuntimeNpc},
            registry::NpcRegistry,
        },
        player::{
            components::{Player, ProximityLatch},
            systems::monitor_npc_proximity,
        },
    };

    fn interaction_app() -> App {
        let journal_path = std::env::temp_dir().join(format!(
            "wayfarer_e2e_{}.jsonl",
            std::process::id()
        ));

        let mut app = App::new();
        app.add_message::<KeyPressed>()
            .add_message::<ProximitySignal>()
            .add_message::<NpcVisited>()
            .add_message::<DialogueResolved>()
            .init_resource::<Time>()
            .insert_resource(ControlSettings::default())
            .insert_resource(NpcRegistry::builtin())
            .insert_resource(QuestJournal::new(journal_path))
            .init_resource::<DialoguePresenter>()
            .init_resource::<ProximityLatch>()
            .init_resource::<QuestLedger>()
            .add_systems(
                Update,
                (
                    resolve_dialogue_responses,
                    monitor_npc_proximity,
                    present_dialogue,
                    apply_dialogue_outcomes,
                    complete_visited_quests,
                )
                    .chain(),
            );

        let mut ids = NpcIdGenerator::default();
        let descriptors: Vec<_> = app
            .world()
            .resource::<NpcRegistry>()
            .iter()
            .cloned()
            .collect();
        for descriptor in descriptors {
            app.world_mut().spawn((
                Transform::from_translation(descriptor.spawn_position),
                Identity::new(ids.next_id(), descriptor.name.clone()),
                RuntimeNpc,
            ));
        }
        app
    }

    fn move_player(app: &mut App, player: Entity, position: Vec3) {
        app.world_mut()
            .entity_mut(player)
            .insert(Transform::from_translation(position));
    }

    #[test]
    fn accept_guide_quest_then_complete_at_explorer() {
        let mut app = interaction_app();
        let player = app
            .world_mut()
            .spawn((Player, Transform::from_xyz(0.0, 2.0, 0.0)))
            .id();

        app.update();
        assert!(!app.world().resource::<DialoguePresenter>().is_showing());

        move_player(&mut app, player, Vec3::new(3.0, 2.0, 2.0));
        app.update();
        let speaker = app
            .world()
            .resource::<DialoguePresenter>()
            .showing()
            .map(|active| active.speaker.clone());
        assert_eq!(speaker.as_deref(), Some("Guide Bot"));

        app.world_mut().write_message(KeyPressed::new("y"));
        app.update();

        assert!(!app.world().resource::<DialoguePresenter>().is_showing());
        let ledger = app.world().resource::<QuestLedger>();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.records()[0].description, "Find and talk to Explorer");
        assert!(!ledger.records()[0].completed);

        // A late second key has nothing to answer.
        app.world_mut().write_message(KeyPressed::new("y"));
        app.update();
        assert_eq!(app.world().resource::<QuestLedger>().len(), 1);

        move_player(&mut app, player, Vec3::new(-5.0, 2.0, 5.0));
        app.update();

        let ledger = app.world().resource::<QuestLedger>();
        assert!(ledger.records()[0].completed);
        assert_eq!(ledger.render(), "Find and talk to Explorer - ✅");

        let speaker = app
            .world()
            .resource::<DialoguePresenter>()
            .showing()
            .map(|active| active.speaker.clone());
        assert_eq!(speaker.as_deref(), Some("Explorer"));
    }

    #[test]
    fn declining_leaves_ledger_untouched() {
        let mut app = interaction_app();
        app.world_mut()
            .spawn((Player, Transform::from_xyz(3.0, 2.0, 2.0)));

        app.update();
        assert!(app.world().resource::<DialoguePresenter>().is_showing());

        app.world_mut().write_message(KeyPressed::new("n"));
        app.update();

        assert!(!app.world().resource::<DialoguePresenter>().is_showing());
        assert!(app.world().resource::<QuestLedger>().is_empty());
    }
}
