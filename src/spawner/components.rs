use bevy::prelude::*;

use crate::core::resources::SpawnerSection;

/// 要生成的方块模板
#[derive(Debug, Clone, PartialEq)]
pub struct BlockPrefab {
    pub label: String,
}

impl Default for BlockPrefab {
    fn default() -> Self {
        Self {
            label: "Block".into(),
        }
    }
}

/// 按键在 Body 前方生成方块
#[derive(Component, Debug, Clone)]
pub struct BlockSpawner {
    pub key: KeyCode,
    pub distance: f32,
    pub lift: f32, // 额外抬高
    pub prefab: Option<BlockPrefab>,
}

impl BlockSpawner {
    pub fn from_config(section: &SpawnerSection) -> Self {
        Self {
            key: KeyCode::KeyE,
            distance: section.distance,
            lift: section.lift,
            prefab: Some(BlockPrefab::default()),
        }
    }

    /// body_world 为 Body 的世界变换
    pub fn spawn_transform(&self, body_world: &Transform) -> Transform {
        let mut position = body_world.translation + *body_world.forward() * self.distance;
        position.y += self.lift;
        Transform::from_translation(position).with_rotation(body_world.rotation)
    }
}

/// 生成出来的方块
#[derive(Component, Debug, Clone)]
pub struct Block {
    pub prefab: BlockPrefab,
    pub spawned_by: Entity,
}
