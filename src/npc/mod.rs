//! NPC module exposes the registry, identity data and model loading.
pub mod components;
pub mod plugin;
pub mod registry;
pub mod systems;

pub use plugin::NpcPlugin;
