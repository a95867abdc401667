pub mod components;
pub mod events;
pub mod proximity;
mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use events::*;
use systems::*;

pub struct PickupPlugin;
impl Plugin for PickupPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_event::<PickupRequest>()
            .add_systems(
                Update,
                (read_pickup_key, update_pickup_focus, handle_pickup_request)
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
