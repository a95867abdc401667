use bevy::prelude::*;

use crate::player::components::PlayerId;

/// 按物品表给予物品
#[derive(Event, Debug, Clone)]
pub struct GiveItemEvent {
    pub player: PlayerId,
    pub id: String,
    pub count: u32,
}

#[derive(Event, Debug, Clone)]
pub struct TakeItemEvent {
    pub player: PlayerId,
    pub id: String,
    pub count: u32,
}

#[derive(Event, Debug, Clone)]
pub struct ClearInventoryEvent {
    pub player: PlayerId,
}

/// 让 CLI 请求打印背包
#[derive(Event, Debug, Clone)]
pub struct ListInventoryEvent {
    pub player: PlayerId,
}
