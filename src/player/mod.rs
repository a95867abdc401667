pub mod components;
pub mod events;
pub mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use components::PlayerRegistry;
use events::*;
use systems::*;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerRegistry>()
            .add_event::<Death>()
            .add_systems(OnEnter(AppState::InGame), spawn_local_player)
            .add_systems(
                Update,
                (forget_despawned_players, respawn_fallen).run_if(in_state(AppState::InGame)),
            );
    }
}
