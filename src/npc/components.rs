//! NPC-specific components and supporting resources.
use std::fmt;

use bevy::prelude::*;

/// Unique identifier for an NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Component)]
pub struct NpcId(u64);

impl NpcId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for NpcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NPC-{:04}", self.0)
    }
}

/// Runtime identity linking an NPC entity back to its registry descriptor by name.
#[derive(Component, Debug, Clone)]
pub struct Identity {
    pub id: NpcId,
    pub display_name: String,
}

impl Identity {
    pub fn new(id: NpcId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// Progress of the asynchronous model load for an NPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelLoadStatus {
    Pending,
    Loaded,
    Failed,
}

/// Asset path of an NPC's model plus its load status. The scene handle lives on `SceneRoot`.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct NpcModel {
    pub path: String,
    pub status: ModelLoadStatus,
}

impl NpcModel {
    pub fn pending(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: ModelLoadStatus::Pending,
        }
    }
}

/// Marker for NPCs whose model finished loading. Only these are proximity-checked.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct RuntimeNpc;

/// Resource that issues monotonically increasing NPC ids.
#[derive(Resource, Default)]
pub struct NpcIdGenerator {
    next: u64,
}

impl NpcIdGenerator {
    pub fn next_id(&mut self) -> NpcId {
        let id = self.next;
        self.next += 1;
        NpcId::new(id)
    }
}
