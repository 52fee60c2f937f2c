//! Systems related to NPC spawning and model loading.
use bevy::{asset::LoadState, gltf::GltfAssetLabel, prelude::*};

use crate::npc::{
    components::{Identity, ModelLoadStatus, NpcIdGenerator, NpcModel, RuntimeNpc},
    registry::NpcRegistry,
};

/// Spawns one entity per registry descriptor and starts loading its model.
pub fn spawn_registry_npcs(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    registry: Res<NpcRegistry>,
    mut id_generator: ResMut<NpcIdGenerator>,
) {
    for descriptor in registry.iter() {
        let id = id_generator.next_id();
        let scene: Handle<Scene> =
            asset_server.load(GltfAssetLabel::Scene(0).from_asset(descriptor.model.clone()));

        commands.spawn((
            SceneRoot(scene),
            Transform::from_translation(descriptor.spawn_position),
            Identity::new(id, descriptor.name.clone()),
            NpcModel::pending(descriptor.model.clone()),
            Name::new(format!("{} ({})", descriptor.name, id)),
        ));

        debug!(
            target: "npc",
            "Spawned {} at {:?}, loading {}",
            descriptor.name, descriptor.spawn_position, descriptor.model
        );
    }
}

/// Records the terminal load state of every pending NPC model.
pub fn poll_npc_model_loads(
    asset_server: Res<AssetServer>,
    mut npcs: Query<(&SceneRoot, &mut NpcModel)>,
) {
    for (scene, mut model) in npcs.iter_mut() {
        if model.status != ModelLoadStatus::Pending {
            continue;
        }

        let state = asset_server.load_state(scene.0.id());
        if let Some(status) = resolve_load_status(&state) {
            model.status = status;
        }
    }
}

/// Promotes NPCs whose model finished loading to [`RuntimeNpc`]; failed loads stay inert.
pub fn promote_loaded_npcs(
    mut commands: Commands,
    npcs: Query<(Entity, &Identity, &NpcModel), (Changed<NpcModel>, Without<RuntimeNpc>)>,
) {
    for (entity, identity, model) in npcs.iter() {
        match model.status {
            ModelLoadStatus::Loaded => {
                commands.entity(entity).insert(RuntimeNpc);
                info!(target: "npc", "{} is ready ({})", identity.display_name, model.path);
            }
            ModelLoadStatus::Failed => {
                warn!(
                    target: "npc",
                    "Model {} for {} failed to load; the npc will not react to the player",
                    model.path, identity.display_name
                );
            }
            ModelLoadStatus::Pending => {}
        }
    }
}

/// Maps an asset load state to a terminal model status, or `None` while still in flight.
pub fn resolve_load_status(state: &LoadState) -> Option<ModelLoadStatus> {
    match state {
        LoadState::Loaded => Some(ModelLoadStatus::Loaded),
        LoadState::Failed(_) => Some(ModelLoadStatus::Failed),
        LoadState::NotLoaded | LoadState::Loading => None,
    }
}
