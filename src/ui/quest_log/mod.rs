// src/ui/quest_log/mod.rs
//
// Quest log overlay listing accepted quests and their completion state.

pub mod components;
pub mod systems;
