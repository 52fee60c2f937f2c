//! Keyboard state tracked by lowercase key label.
use std::collections::HashMap;

use bevy::{
    input::{
        keyboard::{Key, KeyboardFocusLost, KeyboardInput},
        ButtonState,
    },
    prelude::*,
};

/// Pressed/released state per key label, written once per frame from raw keyboard input.
#[derive(Resource, Debug, Default, Clone)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    pub fn set(&mut self, label: impl Into<String>, pressed: bool) {
        self.keys.insert(label.into(), pressed);
    }

    pub fn is_pressed(&self, label: &str) -> bool {
        self.keys.get(label).copied().unwrap_or(false)
    }

    /// Releases every key. Used when the window loses focus, since no key-up arrives then.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

/// Fired for every fresh (non-repeat) key-down, labelled in lowercase.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct KeyPressed {
    pub label: String,
}

impl KeyPressed {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// Maps a logical key to the lowercase label used by movement and dialogue bindings.
pub fn key_label(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(text.to_lowercase()),
        _ => None,
    }
}

/// Applies raw keyboard messages to [`InputState`] and re-emits key-downs as [`KeyPressed`].
/// Losing keyboard focus releases every key.
pub fn record_keyboard_input(
    mut keyboard: MessageReader<KeyboardInput>,
    mut focus_lost: MessageReader<KeyboardFocusLost>,
    mut input: ResMut<InputState>,
    mut pressed: MessageWriter<KeyPressed>,
) {
    for event in keyboard.read() {
        let Some(label) = key_label(&event.logical_key) else {
            continue;
        };

        match event.state {
            ButtonState::Pressed => {
                input.set(label.clone(), true);
                if !event.repeat {
                    pressed.write(KeyPressed::new(label));
                }
            }
            ButtonState::Released => input.set(label, false),
        }
    }

    if !focus_lost.is_empty() {
        focus_lost.clear();
        debug!("Keyboard focus lost; releasing held keys");
        input.clear();
    }
}
