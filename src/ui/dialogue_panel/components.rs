// src/ui/dialogue_panel/components.rs
//
// Components and resources for the shared dialogue panel.

use bevy::prelude::*;

/// Marker on the root node of the single dialogue panel.
#[derive(Component, Debug, Default)]
pub struct DialoguePanel;

/// Text slots inside the dialogue panel that change per dialogue.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialoguePanelField {
    Speaker,
    Body,
}

/// Resource containing settings for dialogue panel layout.
#[derive(Resource, Debug)]
pub struct DialoguePanelSettings {
    /// Panel width (pixels).
    pub panel_width: f32,

    /// Padding inside panel (pixels).
    pub padding: f32,

    /// Border width (pixels).
    pub border_width: f32,

    /// Offset from bottom edge of screen (pixels).
    pub bottom_offset: f32,

    /// Font size for NPC name (points).
    pub name_font_size: f32,

    /// Font size for dialogue text (points).
    pub text_font_size: f32,

    /// Font size for the response hint (points).
    pub hint_font_size: f32,
}

impl Default for DialoguePanelSettings {
    fn default() -> Self {
        Self {
            panel_width: 480.0,
            padding: 14.0,
            border_width: 2.0,
            bottom_offset: 32.0,
            name_font_size: 18.0,
            text_font_size: 16.0,
            hint_font_size: 14.0,
        }
    }
}
