// src/ui/quest_log/systems.rs
//
// Systems for spawning the quest log overlay and rerendering it from the ledger.

use bevy::prelude::*;

use crate::quest::ledger::QuestLedger;

use super::components::{QuestLogPanel, QuestLogText};

const BACKGROUND_COLOR: Color = Color::srgba(0.05, 0.05, 0.08, 0.75);
const TITLE_COLOR: Color = Color::srgb(1.0, 0.9, 0.4);
const TEXT_COLOR: Color = Color::WHITE;

/// Spawns the quest log in the top-left corner.
pub fn spawn_quest_log(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(16.0),
                min_width: Val::Px(220.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            QuestLogPanel,
            Name::new("Quest Log"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Quests"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TITLE_COLOR),
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 15.0,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                QuestLogText,
            ));
        });
}

/// Rerenders the quest log whenever the ledger changes.
pub fn refresh_quest_log(
    ledger: Res<QuestLedger>,
    mut texts: Query<&mut Text, With<QuestLogText>>,
) {
    if !ledger.is_changed() {
        return;
    }

    let rendered = ledger.render();
    for mut text in texts.iter_mut() {
        text.0 = rendered.clone();
    }
}
