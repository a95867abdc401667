use bevy::prelude::*;

#[derive(Event, Debug, Clone, Copy)]
pub struct SpawnBlockRequest {
    pub spawner: Entity,
}
