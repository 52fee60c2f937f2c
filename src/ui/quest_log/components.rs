// src/ui/quest_log/components.rs
//
// Components for the quest log overlay.

use bevy::prelude::*;

/// Marker on the root node of the quest log overlay.
#[derive(Component, Debug, Default)]
pub struct QuestLogPanel;

/// Marker on the text node rerendered from the quest ledger.
#[derive(Component, Debug, Default)]
pub struct QuestLogText;
