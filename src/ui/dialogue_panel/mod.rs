// src/ui/dialogue_panel/mod.rs
//
// Dialogue panel module providing the single bottom-centre NPC dialogue display.

pub mod components;
pub mod systems;
