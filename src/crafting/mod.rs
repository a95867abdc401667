pub mod components;
pub mod events;
mod systems;

use crate::core::states::AppState;
use bevy::prelude::*;
use events::*;
use systems::*;

pub struct CraftingPlugin;
impl Plugin for CraftingPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CraftRequest>()
            .add_systems(OnEnter(AppState::InGame), spawn_stations)
            .add_systems(Update, handle_craft.run_if(in_state(AppState::InGame)));
    }
}
