//! Dialogue module hosting the presenter state machine and proximity messages.
pub mod events;
pub mod plugin;
pub mod presenter;
pub mod systems;

pub use plugin::DialoguePlugin;
