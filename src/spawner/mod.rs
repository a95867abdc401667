pub mod components;
pub mod events;
mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use events::*;
use systems::*;

pub struct SpawnerPlugin;
impl Plugin for SpawnerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_event::<SpawnBlockRequest>()
            .add_systems(
                Update,
                (read_spawn_key, handle_spawn_request)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
