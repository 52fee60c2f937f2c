//! File locations for configuration and the quest journal, overridable from the environment.
use std::{env, path::PathBuf};

use bevy::prelude::Resource;

const DEFAULT_NPC_CONFIG: &str = "config/npcs.toml";
const DEFAULT_CONTROLS_CONFIG: &str = "config/controls.toml";
const DEFAULT_JOURNAL_PATH: &str = "logs/quest_journal.jsonl";

/// Resolved paths used by the plugins when they load their resources.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub npc_registry: PathBuf,
    pub controls: PathBuf,
    pub quest_journal: PathBuf,
}

impl ConfigPaths {
    /// Reads `WAYFARER_*` overrides, keeping the defaults for unset or blank variables.
    pub fn from_env() -> Self {
        Self {
            npc_registry: path_from_env("WAYFARER_NPC_CONFIG", DEFAULT_NPC_CONFIG),
            controls: path_from_env("WAYFARER_CONTROLS_CONFIG", DEFAULT_CONTROLS_CONFIG),
            quest_journal: path_from_env("WAYFARER_JOURNAL_PATH", DEFAULT_JOURNAL_PATH),
        }
    }
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            npc_registry: PathBuf::from(DEFAULT_NPC_CONFIG),
            controls: PathBuf::from(DEFAULT_CONTROLS_CONFIG),
            quest_journal: PathBuf::from(DEFAULT_JOURNAL_PATH),
        }
    }
}

fn path_from_env(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}
