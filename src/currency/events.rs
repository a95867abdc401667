use bevy::prelude::*;

use crate::player::components::PlayerId;

#[derive(Event, Debug, Clone)]
pub struct AddMoney {
    pub player: PlayerId,
    pub amount: u64,
    pub reason: String,
}

#[derive(Event, Debug, Clone)]
pub struct RemoveMoney {
    pub player: PlayerId,
    pub amount: u64,
    pub reason: String,
}

#[derive(Event, Debug, Clone)]
pub struct ResetMoney {
    pub player: PlayerId,
}

/// 让 CLI 请求打印余额
#[derive(Event, Debug, Clone)]
pub struct ShowMoney {
    pub player: PlayerId,
}

/// 物理引擎报告：other 进入了 volume 触发体积
#[derive(Event, Debug, Clone, Copy)]
pub struct TriggerEnter {
    pub volume: Entity,
    pub other: Entity,
}

#[derive(Event, Debug, Clone)]
pub struct PurchaseRequest {
    pub buyer: PlayerId,
    pub item: String, // 货架 id 或名称
}
