use bevy::prelude::*;

/// 死亡事件（掉出世界）
#[derive(Event, Debug)]
pub struct Death {
    pub entity: Entity,
}
