use bevy::prelude::*;

use crate::core::resources::PickupSection;

/// 地上可拾取的物品
#[derive(Component, Debug, Clone)]
#[require(PickupFocus, Transform)]
pub struct ItemPickup {
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub max_stack: u32,
    pub max_distance: f32,
    pub max_view_angle: f32, // 角度制
}

impl ItemPickup {
    pub fn new(
        item_id: impl Into<String>,
        item_name: impl Into<String>,
        quantity: u32,
        max_stack: u32,
        section: &PickupSection,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.into(),
            quantity,
            max_stack,
            max_distance: section.max_distance,
            max_view_angle: section.max_view_angle,
        }
    }

    pub fn prompt(&self) -> String {
        format!("[F] 拾取 {} ×{}", self.item_name, self.quantity)
    }
}

/// 每帧刷新：本地观察者是否正看着它
#[derive(Component, Debug, Clone, Copy)]
pub struct PickupFocus {
    pub looked_at: bool,
    pub distance: f32,
}

impl Default for PickupFocus {
    fn default() -> Self {
        Self {
            looked_at: false,
            distance: f32::MAX,
        }
    }
}
