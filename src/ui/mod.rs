// src/ui/mod.rs
//
// UI module providing screen-space overlays.
//
// Current features:
// - Dialogue panel (single shared NPC dialogue display with accept/decline hint)
// - Quest log (top-left list of accepted quests)

pub mod dialogue_panel;
pub mod plugin;
pub mod quest_log;

// Re-export the main plugin
pub use plugin::UiPlugin;
