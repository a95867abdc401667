//! 主机权威的玩法组件：背包、钱包、拾取、合成、方块生成、掉落重生。
//!
//! 每个模块是一个 Bevy 插件；修改背包和钱包需要 [`network::HostAuthority`]。

use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;

pub mod core;
pub mod crafting;
pub mod currency;
pub mod data;
pub mod interface;
pub mod inventory;
pub mod network;
pub mod pickup;
pub mod player;
pub mod spawner;

#[cfg(test)]
mod testing;

/// 除数据加载和 CLI 以外的全部玩法插件
pub struct GameplayPlugins;

impl PluginGroup for GameplayPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(crate::core::CorePlugin)
            .add(player::PlayerPlugin)
            .add(inventory::InventoryPlugin)
            .add(currency::CurrencyPlugin)
            .add(crafting::CraftingPlugin)
            .add(pickup::PickupPlugin)
            .add(spawner::SpawnerPlugin)
    }
}
