//! Player module - tracks the player's proximity to loaded NPCs.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
