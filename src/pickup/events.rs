use bevy::prelude::*;

use crate::player::components::PlayerId;

/// 按下拾取键（或 CLI 的 pickup）
#[derive(Event, Debug, Clone, Copy)]
pub struct PickupRequest {
    pub player: PlayerId,
}
