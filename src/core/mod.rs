//! Core module housing input state and configuration shared by every plugin.
pub mod input;
pub mod paths;
pub mod plugin;
pub mod settings;

pub use plugin::CorePlugin;
