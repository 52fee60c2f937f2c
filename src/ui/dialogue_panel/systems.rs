// src/ui/dialogue_panel/systems.rs
//
// Systems for spawning the dialogue panel and mirroring the presenter state onto it.

use bevy::prelude::*;

use crate::dialogue::presenter::DialoguePresenter;

use super::components::{DialoguePanel, DialoguePanelField, DialoguePanelSettings};

// Visual constants
const BACKGROUND_COLOR: Color = Color::srgba(0.1, 0.1, 0.1, 0.9);
const BORDER_COLOR: Color = Color::srgb(0.3, 0.3, 0.3);
const TEXT_COLOR: Color = Color::WHITE;
const NAME_COLOR: Color = Color::srgb(1.0, 0.9, 0.4); // Yellow/gold
const HINT_COLOR: Color = Color::srgb(0.7, 0.7, 0.7);
const RESPONSE_HINT: &str = "[Y] Accept    [N] Decline";

/// Spawns the hidden dialogue panel, centred along the bottom edge.
pub fn spawn_dialogue_panel(mut commands: Commands, settings: Res<DialoguePanelSettings>) {
    commands
        .spawn((
            Node {
                display: Display::None,
                position_type: PositionType::Absolute,
                bottom: Val::Px(settings.bottom_offset),
                left: Val::Percent(50.0),
                margin: UiRect::left(Val::Px(-settings.panel_width / 2.0)),
                width: Val::Px(settings.panel_width),
                padding: UiRect::all(Val::Px(settings.padding)),
                border: UiRect::all(Val::Px(settings.border_width)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(BACKGROUND_COLOR),
            BorderColor::from(BORDER_COLOR),
            DialoguePanel,
            Name::new("Dialogue Panel"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.name_font_size,
                    ..default()
                },
                TextColor(NAME_COLOR),
                DialoguePanelField::Speaker,
            ));

            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: settings.text_font_size,
                    ..default()
                },
                TextColor(TEXT_COLOR),
                DialoguePanelField::Body,
            ));

            parent.spawn((
                Text::new(RESPONSE_HINT),
                TextFont {
                    font_size: settings.hint_font_size,
                    ..default()
                },
                TextColor(HINT_COLOR),
            ));
        });
}

/// Shows the panel with the active dialogue's text, or hides it when nothing is showing.
pub fn sync_dialogue_panel(
    presenter: Res<DialoguePresenter>,
    mut panels: Query<&mut Node, With<DialoguePanel>>,
    mut fields: Query<(&mut Text, &DialoguePanelField)>,
) {
    if !presenter.is_changed() {
        return;
    }

    let active = presenter.showing();
    for mut node in panels.iter_mut() {
        node.display = if active.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }

    let Some(active) = active else {
        return;
    };

    for (mut text, field) in fields.iter_mut() {
        text.0 = match field {
            DialoguePanelField::Speaker => active.speaker.clone(),
            DialoguePanelField::Body => active.body(),
        };
    }
}
