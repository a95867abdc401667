use bevy::prelude::*;

use crate::player::components::PlayerId;

#[derive(Event, Debug, Clone)]
pub struct CraftRequest {
    pub player: PlayerId,
    pub recipe: String,
}
