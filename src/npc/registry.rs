//! NPC registry loaded from `config/npcs.toml` with a built-in fallback.
use std::{collections::HashSet, fmt, fs, path::Path};

use bevy::{log::warn, prelude::*};
use serde::Deserialize;

use crate::{core::paths::ConfigPaths, quest::types::QuestTemplate};

const DEFAULT_NPC_MODEL: &str = "characters/npc1.glb";

#[derive(Debug, Clone, Deserialize)]
pub struct NpcRegistryConfig {
    pub npcs: Vec<NpcConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NpcConfig {
    pub name: String,
    pub position: [f32; 3],
    #[serde(default)]
    pub dialogue: Vec<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub quest: Option<QuestTemplate>,
}

fn default_model() -> String {
    DEFAULT_NPC_MODEL.to_string()
}

/// Static description of an NPC. Immutable once the registry is built.
#[derive(Debug, Clone, PartialEq)]
pub struct NpcDescriptor {
    pub name: String,
    pub spawn_position: Vec3,
    pub dialogue_lines: Vec<String>,
    pub quest: Option<QuestTemplate>,
    pub model: String,
}

/// Reasons a registry configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    Read { path: String, message: String },
    Parse { message: String },
    Empty,
    BlankName { index: usize },
    DuplicateName { name: String },
    UnknownQuestTarget { npc: String, target: String },
    SelfQuestTarget { npc: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, message } => write!(f, "unable to read {}: {}", path, message),
            Self::Parse { message } => write!(f, "invalid npc config: {}", message),
            Self::Empty => write!(f, "npc config must define at least one npc"),
            Self::BlankName { index } => write!(f, "npc #{} has a blank name", index),
            Self::DuplicateName { name } => write!(f, "npc name '{}' is not unique", name),
            Self::UnknownQuestTarget { npc, target } => write!(
                f,
                "quest offered by '{}' targets unknown npc '{}'",
                npc, target
            ),
            Self::SelfQuestTarget { npc } => {
                write!(f, "quest offered by '{}' targets its own giver", npc)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Every NPC the world knows about, in declaration order.
#[derive(Resource, Debug, Clone)]
pub struct NpcRegistry {
    descriptors: Vec<NpcDescriptor>,
}

impl NpcRegistry {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|err| RegistryError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::parse(&data)
    }

    pub fn parse(data: &str) -> Result<Self, RegistryError> {
        let config: NpcRegistryConfig = toml::from_str(data).map_err(|err| RegistryError::Parse {
            message: err.to_string(),
        })?;
        Self::from_config(config)
    }

    pub fn from_config(config: NpcRegistryConfig) -> Result<Self, RegistryError> {
        if config.npcs.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut names = HashSet::new();
        let mut descriptors = Vec::with_capacity(config.npcs.len());

        for (index, npc) in config.npcs.into_iter().enumerate() {
            let name = npc.name.trim().to_string();
            if name.is_empty() {
                return Err(RegistryError::BlankName { index });
            }
            if !names.insert(name.clone()) {
                return Err(RegistryError::DuplicateName { name });
            }

            descriptors.push(NpcDescriptor {
                name,
                spawn_position: Vec3::from_array(npc.position),
                dialogue_lines: npc.dialogue,
                quest: npc.quest,
                model: npc.model,
            });
        }

        for descriptor in &descriptors {
            if let Some(quest) = &descriptor.quest {
                // The giver's visit fires before its quest can be accepted.
                if quest.target == descriptor.name {
                    return Err(RegistryError::SelfQuestTarget {
                        npc: descriptor.name.clone(),
                    });
                }
                if !names.contains(&quest.target) {
                    return Err(RegistryError::UnknownQuestTarget {
                        npc: descriptor.name.clone(),
                        target: quest.target.clone(),
                    });
                }
            }
        }

        Ok(Self { descriptors })
    }

    /// The two-NPC world used when no valid configuration is available.
    pub fn builtin() -> Self {
        let config = NpcRegistryConfig {
            npcs: vec![
                NpcConfig {
                    name: "Guide Bot".to_string(),
                    position: [3.0, 0.0, 3.0],
                    dialogue: vec![
                        "Welcome to our world!".to_string(),
                        "Could you please talk to the Explorer nearby?".to_string(),
                    ],
                    model: default_model(),
                    quest: Some(QuestTemplate::new("Find and talk to Explorer", "Explorer")),
                },
                NpcConfig {
                    name: "Explorer".to_string(),
                    position: [-5.0, 0.0, 6.0],
                    dialogue: vec![
                        "Thanks for finding me!".to_string(),
                        "Have you seen the tree nearby?".to_string(),
                    ],
                    model: default_model(),
                    quest: None,
                },
            ],
        };

        Self::from_config(config).expect("built-in npc registry should be valid")
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(registry) => {
                info!(
                    target: "npc",
                    "Loaded {} npc descriptors from {}",
                    registry.len(),
                    path.display()
                );
                registry
            }
            Err(error) => {
                warn!(
                    target: "npc",
                    "Failed to load npc registry from {}: {error}. Falling back to built-in npcs.",
                    path.display()
                );
                Self::builtin()
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&NpcDescriptor> {
        self.descriptors.iter().find(|descriptor| descriptor.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NpcDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }
}

impl FromWorld for NpcRegistry {
    fn from_world(world: &mut World) -> Self {
        let path = world
            .get_resource::<ConfigPaths>()
            .map(|paths| paths.npc_registry.clone())
            .unwrap_or_else(|| ConfigPaths::default().npc_registry);
        Self::load_or_default(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_matches_demo_world() {
        let registry = NpcRegistry::builtin();
        assert_eq!(registry.len(), 2);

        let guide = registry.get("Guide Bot").expect("guide bot present");
        assert_eq!(guide.spawn_position, Vec3::new(3.0, 0.0, 3.0));
        assert_eq!(guide.dialogue_lines.len(), 2);
        let quest = guide.quest.as_ref().expect("guide bot offers a quest");
        assert_eq!(quest.target, "Explorer");
        assert!(!quest.completed);

        let explorer = registry.get("Explorer").expect("explorer present");
        assert!(explorer.quest.is_none());
        assert_eq!(explorer.model, DEFAULT_NPC_MODEL);
    }

    #[test]
    fn parses_toml_registry() {
        let registry = NpcRegistry::parse(
            r#"
            [[npcs]]
            name = "Keeper"
            position = [1.0, 0.0, -2.0]
            dialogue = ["Hello."]
            model = "characters/keeper.glb"

            [npcs.quest]
            description = "Visit the Hermit"
            target = "Hermit"

            [[npcs]]
            name = "Hermit"
            position = [20.0, 0.0, 20.0]
            "#,
        )
        .expect("registry parses");

        let keeper = registry.get("Keeper").expect("keeper present");
        assert_eq!(keeper.model, "characters/keeper.glb");
        assert_eq!(
            keeper.quest,
            Some(QuestTemplate::new("Visit the Hermit", "Hermit"))
        );

        let hermit = registry.get("Hermit").expect("hermit present");
        assert!(hermit.dialogue_lines.is_empty());
        assert_eq!(hermit.model, DEFAULT_NPC_MODEL);

        let order: Vec<_> = registry.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(order, vec!["Keeper", "Hermit"]);
    }

    #[test]
    fn rejects_duplicate_and_blank_names() {
        let duplicate = NpcRegistry::parse(
            r#"
            [[npcs]]
            name = "Twin"
            position = [0.0, 0.0, 0.0]

            [[npcs]]
            name = "Twin"
            position = [1.0, 0.0, 0.0]
            "#,
        );
        assert_eq!(
            duplicate.unwrap_err(),
            RegistryError::DuplicateName {
                name: "Twin".to_string()
            }
        );

        let blank = NpcRegistry::parse(
            r#"
            [[npcs]]
            name = "  "
            position = [0.0, 0.0, 0.0]
            "#,
        );
        assert_eq!(blank.unwrap_err(), RegistryError::BlankName { index: 0 });
    }

    #[test]
    fn rejects_quest_with_unknown_target() {
        let result = NpcRegistry::parse(
            r#"
            [[npcs]]
            name = "Guide"
            position = [0.0, 0.0, 0.0]
            quest = { description = "Find Ghost", target = "Ghost" }
            "#,
        );
        assert!(matches!(
            result,
            Err(RegistryError::UnknownQuestTarget { .. })
        ));
    }

    #[test]
    fn rejects_quest_targeting_its_giver() {
        let result = NpcRegistry::parse(
            r#"
            [[npcs]]
            name = "Hermit"
            position = [0.0, 0.0, 0.0]
            quest = { description = "Talk to me", target = "Hermit" }
            "#,
        );
        assert_eq!(
            result.unwrap_err(),
            RegistryError::SelfQuestTarget {
                npc: "Hermit".to_string()
            }
        );
    }

    #[test]
    fn empty_or_malformed_config_is_rejected() {
        assert_eq!(
            NpcRegistry::parse("npcs = []").unwrap_err(),
            RegistryError::Empty
        );
        assert!(matches!(
            NpcRegistry::parse("npcs = 5"),
            Err(RegistryError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let registry = NpcRegistry::load_or_default("config/does-not-exist.toml");
        assert_eq!(registry.len(), NpcRegistry::builtin().len());
        let error = NpcRegistry::load_from_file("config/does-not-exist.toml").unwrap_err();
        assert!(error.to_string().contains("unable to read"));
    }
}
