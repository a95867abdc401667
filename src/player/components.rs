use std::collections::HashMap;

use bevy::prelude::*;
use uuid::Uuid;

/// 玩家标记组件
#[derive(Component)]
pub struct Player;

/// 稳定的玩家标识，由平台账号 ID 生成，重连后保持不变
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    pub fn from_account(account: &str) -> Self {
        // 固定 namespace + 账号字节生成 v5 UUID，同一账号总得到同一值
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, account.as_bytes()))
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// 平台账号 ID（存档 key 用），空字符串表示编辑器测试模式
#[derive(Component, Debug, Clone, Default)]
pub struct AccountId(pub String);

/// 该实体的朝向决定拾取提示（相当于摄像机）
#[derive(Component, Default)]
pub struct Viewer;

/// 掉出世界后传送回重生点
#[derive(Component, Debug, Clone)]
pub struct FallRespawn {
    pub death_height: f32,
    pub respawn_position: Vec3,
}

/// 本进程操控的玩家
#[derive(Resource, Debug, Clone, Copy)]
pub struct LocalPlayer(pub PlayerId);

/// PlayerId → 玩家实体
#[derive(Resource, Debug, Default)]
pub struct PlayerRegistry {
    owners: HashMap<PlayerId, Entity>,
}

impl PlayerRegistry {
    pub fn insert(&mut self, id: PlayerId, entity: Entity) {
        self.owners.insert(id, entity);
    }

    pub fn get(&self, id: PlayerId) -> Option<Entity> {
        self.owners.get(&id).copied()
    }

    pub fn forget_entity(&mut self, entity: Entity) {
        self.owners.retain(|_, e| *e != entity);
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
