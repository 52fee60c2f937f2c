//! WorldPlugin coordinates environment setup, lighting and first-person controls.
use bevy::prelude::*;

use crate::{
    core::input::record_keyboard_input,
    world::systems::{
        first_person_mouse_look, first_person_translate, spawn_environment_props,
        spawn_world_environment, update_cursor_grab, SKY_COLOR,
    },
};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(SKY_COLOR))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 600.0,
                ..default()
            })
            .add_systems(
                Startup,
                (spawn_world_environment, spawn_environment_props).chain(),
            )
            .add_systems(
                Update,
                (
                    update_cursor_grab,
                    first_person_mouse_look.after(update_cursor_grab),
                    first_person_translate.after(record_keyboard_input),
                ),
            );
    }
}
